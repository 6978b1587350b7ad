//! Animator Implementations
//!
//! - ManualAnimator: records transitions and leaves completion to the caller
//! - ScheduledAnimator: completes transitions once their duration elapsed,
//!   polled by a host event loop

mod manual;
mod scheduled;

pub use manual::ManualAnimator;
pub use scheduled::ScheduledAnimator;
