//! Surface Implementations
//!
//! - FixedSurface: scripted measurements and a shared log of host calls

mod fixed;

pub use fixed::{FixedSurface, SurfaceLog};
