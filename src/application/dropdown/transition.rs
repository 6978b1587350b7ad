//! Two-phase transitions
//!
//! Starting a transition records what has to happen once it settles and hands
//! the motion to the animator. `complete_transition` is the only place that
//! flips terminal flags and emits post-notifications.

use crate::domain::entities::MenuId;
use crate::domain::ports::{Completion, DropdownEvent};
use crate::domain::value_objects::{
    AnimTarget, Resize, Slide, Style, Transition, TransitionHandle,
};

use super::{Dropdown, Motion, Phase};

/// Work left for a transition's completion.
#[derive(Debug, Clone)]
pub(super) enum Pending {
    Open,
    Close,
    OpenMenu {
        menu: MenuId,
        current: Option<MenuId>,
    },
    CloseMenu {
        menu: MenuId,
        target: MenuId,
    },
    Resize(Resize),
}

impl Pending {
    fn kind(&self) -> &'static str {
        match self {
            Pending::Open => "open",
            Pending::Close => "close",
            Pending::OpenMenu { .. } => "open.menu",
            Pending::CloseMenu { .. } => "close.menu",
            Pending::Resize(_) => "resize",
        }
    }

    pub(super) fn is_menu(&self) -> bool {
        matches!(self, Pending::OpenMenu { .. } | Pending::CloseMenu { .. })
    }
}

impl Dropdown {
    /// An empty transition at the speed `motion` calls for
    pub(super) fn transition(&self, motion: Motion) -> Transition {
        let speed = match motion {
            Motion::Animated => self.options.speed,
            Motion::Instant => 0,
        };
        Transition::new(speed, self.options.easing.clone())
    }

    /// Hand `transition` to the animator and remember `pending`.
    ///
    /// Zero-duration transitions and animators that settle at once complete
    /// before this returns.
    pub(super) fn begin(&mut self, pending: Pending, transition: Transition) -> TransitionHandle {
        let handle = TransitionHandle(self.next_handle);
        self.next_handle += 1;

        tracing::trace!(
            uid = %self.uid,
            handle = handle.0,
            kind = pending.kind(),
            duration_ms = transition.duration_ms,
            "transition started"
        );
        self.pending.insert(handle, pending);

        let completion = self.animator.animate(handle, &transition);
        if transition.is_instant() || completion == Completion::Immediate {
            self.complete_transition(handle);
        }
        handle
    }

    /// Settle a transition started earlier.
    ///
    /// Returns `false` for unknown or already completed handles, so a host
    /// reporting completion twice changes nothing.
    pub fn complete_transition(&mut self, handle: TransitionHandle) -> bool {
        let Some(pending) = self.pending.remove(&handle) else {
            tracing::debug!(uid = %self.uid, handle = handle.0, "unknown transition handle");
            return false;
        };
        tracing::trace!(uid = %self.uid, handle = handle.0, kind = pending.kind(), "transition settled");

        match pending {
            Pending::Open => {
                self.nav.phase = Phase::Open;
                self.emit(DropdownEvent::Open);
            }
            Pending::Close => {
                self.animator
                    .snap(&AnimTarget::Wrapper, &Style::default().visible(false));
                self.nav.phase = Phase::Closed;
                self.nav.above = false;
                if self.options.close_reset {
                    self.reset(false);
                }
                self.emit(DropdownEvent::Close);
            }
            Pending::OpenMenu { menu, current } => {
                self.nav.menu_transition = None;
                self.nav.current = Some(menu.clone());
                self.settle_menu(&menu, true, Slide::Rest);
                if let Some(current) = &current {
                    self.settle_menu(current, false, Slide::Left);
                }
                self.emit(DropdownEvent::OpenMenu { menu, current });
            }
            Pending::CloseMenu { menu, target } => {
                self.nav.menu_transition = None;
                self.nav.current = Some(target.clone());
                self.settle_menu(&menu, false, Slide::Right);
                self.settle_menu(&target, true, Slide::Rest);
                self.emit(DropdownEvent::CloseMenu { menu, target });
            }
            Pending::Resize(resize) => {
                self.nav.resizing = false;
                self.nav.wrapper_height = Some(resize.collision.menu_height);
                self.emit(DropdownEvent::Resize {
                    menu: resize.menu,
                    collision: resize.collision,
                });
            }
        }
        true
    }

    /// Complete every pending transition, oldest first
    pub fn complete_all(&mut self) -> usize {
        let mut settled = 0;
        while let Some(handle) = self.pending.keys().next().copied() {
            if self.complete_transition(handle) {
                settled += 1;
            }
        }
        settled
    }

    fn settle_menu(&mut self, menu: &MenuId, open: bool, slide: Slide) {
        if let Some(record) = self.store.menu_mut(menu) {
            record.open = open;
            record.slide = slide;
        }
    }
}
