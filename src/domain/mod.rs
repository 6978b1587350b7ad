//! Domain Layer
//!
//! The widget core without any host: records, selection sequences,
//! geometry and the collaborator traits.
//!
//! ## Structure
//!
//! - `entities/` - Items, menus and their input specifications
//! - `value_objects/` - References, selection, geometry, animation vocabulary
//! - `services/` - Entity store, selection propagation, collision
//! - `ports/` - Interface definitions for hosts (animator, surface, events)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches a terminal, file or clock
//! 2. **Ids, not pointers** - Parent/child links are id fields into one arena
//! 3. **Ports & Adapters** - All side effects go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
