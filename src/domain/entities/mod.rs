//! Domain entities
//!
//! Records held by the entity store. Relations are id fields only.

mod item;
mod menu;

pub use item::{Children, ChildrenSpec, Divider, Item, ItemId, ItemSpec};
pub use menu::{Menu, MenuId, MenuSpec};
