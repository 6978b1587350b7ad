//! Animator Port
//!
//! The transition engine the widget delegates motion to. The widget starts a
//! transition with a handle and later learns of its completion through
//! `Dropdown::complete_transition(handle)`.

use crate::domain::value_objects::{AnimTarget, Style, Transition, TransitionHandle};

/// How an animator settles a transition it was handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Already settled; the widget completes it before `animate` returns
    Immediate,
    /// The host reports completion later, exactly once
    Deferred,
}

/// Animation collaborator
///
/// Implementations apply every track's `from` style immediately and move to
/// `to` over the transition's duration. Zero-duration transitions are always
/// treated as immediate by the widget, whatever the animator answers.
pub trait Animator: Send {
    /// Start a transition
    fn animate(&mut self, handle: TransitionHandle, transition: &Transition) -> Completion;

    /// Apply a style with no motion
    fn snap(&mut self, _target: &AnimTarget, _style: &Style) {}
}

/// Animator that settles every transition at once
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAnimator;

impl Animator for NoopAnimator {
    fn animate(&mut self, _handle: TransitionHandle, _transition: &Transition) -> Completion {
        Completion::Immediate
    }
}
