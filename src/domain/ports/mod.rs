//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the widget core.
//! Infrastructure and UI layers provide concrete implementations.

pub mod animator;
pub mod events;
pub mod surface;

pub use animator::{Animator, Completion, NoopAnimator};
pub use events::{DropdownEvent, DropdownEventSink};
pub use surface::{HeadlessSurface, Surface};
