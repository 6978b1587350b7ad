//! Application Layer
//!
//! The widget facade and the registry that routes host input to instances.
//! This layer:
//! - Depends on the Domain layer (entities, services, ports)
//! - Owns the state machines; rules about records live in Domain
//! - Never talks to a terminal or file directly
//!
//! ## Use Cases
//!
//! - `Dropdown` - One widget instance: selection, navigation, focus, reset, query mode
//! - `Dispatcher` - Outside-click close, key broadcast, debounced auto-resize

pub mod dispatcher;
pub mod dropdown;

pub use dispatcher::Dispatcher;
pub use dropdown::{Command, Dropdown, DropdownBuilder, Key, MenuTransition, Motion, Phase};
