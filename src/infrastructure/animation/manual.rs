//! Manual animator
//!
//! Every non-instant transition stays in flight until the owner calls
//! `Dropdown::complete_transition` with its handle. Clones share one log.

use std::sync::{Arc, Mutex};

use crate::domain::ports::{Animator, Completion};
use crate::domain::value_objects::{AnimTarget, Style, Transition, TransitionHandle};

#[derive(Debug, Default)]
struct AnimationLog {
    started: Vec<(TransitionHandle, Transition)>,
    snaps: Vec<(AnimTarget, Style)>,
}

#[derive(Debug, Clone, Default)]
pub struct ManualAnimator {
    log: Arc<Mutex<AnimationLog>>,
}

impl ManualAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transitions started so far, instant ones included
    pub fn started(&self) -> Vec<(TransitionHandle, Transition)> {
        self.log
            .lock()
            .map(|log| log.started.clone())
            .unwrap_or_default()
    }

    /// Drain the started transitions
    pub fn take_started(&self) -> Vec<(TransitionHandle, Transition)> {
        self.log
            .lock()
            .map(|mut log| std::mem::take(&mut log.started))
            .unwrap_or_default()
    }

    /// Handle of the most recent transition
    pub fn last_handle(&self) -> Option<TransitionHandle> {
        self.log
            .lock()
            .ok()
            .and_then(|log| log.started.last().map(|(handle, _)| *handle))
    }

    /// Styles applied without motion, oldest first
    pub fn snaps(&self) -> Vec<(AnimTarget, Style)> {
        self.log
            .lock()
            .map(|log| log.snaps.clone())
            .unwrap_or_default()
    }
}

impl Animator for ManualAnimator {
    fn animate(&mut self, handle: TransitionHandle, transition: &Transition) -> Completion {
        if let Ok(mut log) = self.log.lock() {
            log.started.push((handle, transition.clone()));
        }
        Completion::Deferred
    }

    fn snap(&mut self, target: &AnimTarget, style: &Style) {
        if let Ok(mut log) = self.log.lock() {
            log.snaps.push((target.clone(), style.clone()));
        }
    }
}
