//! Domain Services
//!
//! Pure logic over the entity store and host measurements.
//! These services have no I/O dependencies and are easily testable.

mod collision;
mod propagation;
mod store;

pub use collision::{compute_collision, scroll_offset};
pub use propagation::propagate_selection;
pub use store::{BuildRules, EntityStore};
