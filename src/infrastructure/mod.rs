//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! ## Structure
//!
//! - `animation/` - Animators (manual, scheduled)
//! - `events/` - Notification sinks (NDJSON, recording)
//! - `markup/` - Population from select and list markup
//! - `surface/` - Scripted host surface

pub mod animation;
pub mod events;
pub mod markup;
pub mod surface;

pub use animation::{ManualAnimator, ScheduledAnimator};
pub use events::{JsonEventSink, RecordingEventSink};
pub use markup::{Population, SourceDocument};
pub use surface::{FixedSurface, SurfaceLog};
