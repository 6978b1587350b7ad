//! Domain Value Objects
//!
//! Immutable value types shared by the store, the widget and its ports.

mod config_warning;
mod geometry;
mod instance;
mod refs;
mod selection;
mod style;

pub use config_warning::ConfigWarning;
pub use geometry::{Collision, Measurements, Placement, Point, Resize, Size, Space};
pub use instance::InstanceId;
pub use refs::{ItemRef, MenuRef};
pub use selection::{Selection, SelectionValue, Values};
pub use style::{AnimTarget, Dimension, Slide, Style, Track, Transition, TransitionHandle};
