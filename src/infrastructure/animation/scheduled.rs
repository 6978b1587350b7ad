//! Scheduled animator
//!
//! Gives each transition a deadline of `now + duration`. The host loop asks
//! for the handles that are due and reports them back to the widget. Motion
//! itself is not interpolated; the last snapped and target styles are kept
//! per element so a renderer can draw the settled layout.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::domain::ports::{Animator, Completion};
use crate::domain::value_objects::{AnimTarget, Style, Transition, TransitionHandle};

#[derive(Debug, Default)]
struct Schedule {
    due: Vec<(TransitionHandle, Instant)>,
    styles: HashMap<AnimTarget, Style>,
}

#[derive(Debug, Clone, Default)]
pub struct ScheduledAnimator {
    schedule: Arc<Mutex<Schedule>>,
}

impl ScheduledAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return the handles whose deadline passed, oldest first
    pub fn due(&self, now: Instant) -> Vec<TransitionHandle> {
        let Ok(mut schedule) = self.schedule.lock() else {
            return Vec::new();
        };
        let (ready, waiting): (Vec<_>, Vec<_>) =
            schedule.due.drain(..).partition(|(_, at)| *at <= now);
        schedule.due = waiting;
        ready.into_iter().map(|(handle, _)| handle).collect()
    }

    /// Earliest deadline still pending
    pub fn next_deadline(&self) -> Option<Instant> {
        self.schedule
            .lock()
            .ok()
            .and_then(|schedule| schedule.due.iter().map(|(_, at)| *at).min())
    }

    /// Latest style applied to `target`
    pub fn style(&self, target: &AnimTarget) -> Option<Style> {
        self.schedule
            .lock()
            .ok()
            .and_then(|schedule| schedule.styles.get(target).cloned())
    }

    fn apply(schedule: &mut Schedule, target: &AnimTarget, style: &Style) {
        let entry = schedule.styles.entry(target.clone()).or_default();
        if style.visible.is_some() {
            entry.visible = style.visible;
        }
        if style.opacity.is_some() {
            entry.opacity = style.opacity;
        }
        if style.x.is_some() {
            entry.x = style.x;
        }
        if style.y.is_some() {
            entry.y = style.y;
        }
        if style.height.is_some() {
            entry.height = style.height;
        }
    }
}

impl Animator for ScheduledAnimator {
    fn animate(&mut self, handle: TransitionHandle, transition: &Transition) -> Completion {
        let Ok(mut schedule) = self.schedule.lock() else {
            return Completion::Immediate;
        };
        for track in &transition.tracks {
            Self::apply(&mut schedule, &track.target, &track.from);
            Self::apply(&mut schedule, &track.target, &track.to);
        }
        if transition.is_instant() {
            return Completion::Immediate;
        }
        let at = Instant::now() + Duration::from_millis(transition.duration_ms);
        schedule.due.push((handle, at));
        Completion::Deferred
    }

    fn snap(&mut self, target: &AnimTarget, style: &Style) {
        if let Ok(mut schedule) = self.schedule.lock() {
            Self::apply(&mut schedule, target, style);
        }
    }
}
