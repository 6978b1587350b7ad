//! Dropmenu - multi-level dropdown menu widget
//!
//! A dropdown instance keeps an entity store of menus and items, a selection
//! (single or multi), and a navigation state machine whose transitions run
//! in two phases so any host can animate them. Hosts plug in through the
//! `Animator`, `Surface` and `DropdownEventSink` ports; a terminal host and
//! a `dropmenu` binary ship with the crate.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{Command, Dispatcher, Dropdown, DropdownBuilder, Key, Phase};
pub use config::{Options, OptionsPatch};
pub use domain::entities::{Item, ItemId, ItemSpec, Menu, MenuId, MenuSpec};
pub use domain::ports::{Animator, DropdownEvent, DropdownEventSink, Surface};
pub use domain::value_objects::{InstanceId, ItemRef, MenuRef, SelectionValue};
pub use error::{DropmenuError, DropmenuResult};
