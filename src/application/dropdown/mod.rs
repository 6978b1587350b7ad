//! Dropdown Module
//!
//! The widget facade: one instance owns its entity store, selection and
//! navigation state, and talks to its host only through the domain ports.
//!
//! ## Structure
//!
//! - `builder` - Construction and the init sequence (`DropdownBuilder`)
//! - `transition` - Two-phase transitions (begin, `complete_transition`)
//! - `selection` - Select, deselect, select by value
//! - `navigation` - Open/close of the widget and of menus, resize
//! - `focus` - Focus marker and the keyboard state machine
//! - `reset` - Snapping back to the main menu
//! - `toggle` - Toggle control label
//! - `query` - Invocation by command name
//!
//! ## Usage
//!
//! ```ignore
//! use dropmenu::application::Dropdown;
//!
//! let mut dropdown = Dropdown::builder(options).items(specs).build();
//! dropdown.open();
//! dropdown.select("apple");
//! ```

mod builder;
mod focus;
mod navigation;
mod query;
mod reset;
mod selection;
mod toggle;
mod transition;

pub use builder::DropdownBuilder;
pub use focus::Key;
pub use query::Command;

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::config::Options;
use crate::domain::entities::{Item, ItemId, ItemSpec, Menu, MenuId, MenuSpec};
use crate::domain::ports::{Animator, DropdownEvent, DropdownEventSink, Surface};
use crate::domain::services::EntityStore;
use crate::domain::value_objects::{
    InstanceId, ItemRef, MenuRef, Selection, SelectionValue, TransitionHandle,
};

use toggle::ToggleLabel;
use transition::Pending;

/// Widget-level phase. Exactly one holds at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

/// A menu-level transition in flight, keyed by the acting menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuTransition {
    Opening(MenuId),
    Closing(MenuId),
}

/// Whether a transition runs at the configured speed or settles at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Animated,
    Instant,
}

#[derive(Debug, Clone, Default)]
struct NavState {
    phase: Phase,
    menu_transition: Option<MenuTransition>,
    resizing: bool,
    current: Option<MenuId>,
    above: bool,
    /// Wrapper height set by the last settled resize
    wrapper_height: Option<f64>,
    /// Toggle control height from the last measurement
    toggle_height: f64,
}

/// One dropdown instance.
pub struct Dropdown {
    uid: InstanceId,
    options: Options,
    store: EntityStore,
    selection: Selection,
    nav: NavState,
    focused: Option<ItemId>,
    toggle_focused: bool,
    toggle: ToggleLabel,
    /// Mirror the selection into a native control
    mirrors_control: bool,
    pending: BTreeMap<TransitionHandle, Pending>,
    next_handle: u64,
    animator: Box<dyn Animator>,
    surface: Box<dyn Surface>,
    sinks: Vec<Arc<dyn DropdownEventSink>>,
}

impl std::fmt::Debug for Dropdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dropdown")
            .field("uid", &self.uid)
            .field("phase", &self.nav.phase)
            .field("current", &self.nav.current)
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

impl Dropdown {
    /// Start building an instance with settled options
    pub fn builder(options: Options) -> DropdownBuilder {
        DropdownBuilder::new(options)
    }

    pub fn uid(&self) -> &InstanceId {
        &self.uid
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn is_multi(&self) -> bool {
        self.selection.is_multi()
    }

    pub fn phase(&self) -> Phase {
        self.nav.phase
    }

    /// Settled open
    pub fn is_open(&self) -> bool {
        self.nav.phase == Phase::Open
    }

    /// Any widget or menu transition in flight (resizes excluded)
    pub fn is_animating(&self) -> bool {
        self.pending.values().any(|p| !matches!(p, Pending::Resize(_)))
    }

    pub fn is_resizing(&self) -> bool {
        self.nav.resizing
    }

    pub fn menu_transition(&self) -> Option<&MenuTransition> {
        self.nav.menu_transition.as_ref()
    }

    /// Menu currently shown
    pub fn current_menu(&self) -> Option<&MenuId> {
        self.nav.current.as_ref()
    }

    pub fn main_menu(&self) -> Option<&MenuId> {
        self.store.main_menu()
    }

    /// Menu is placed above its anchor
    pub fn is_above(&self) -> bool {
        self.nav.above
    }

    pub fn wrapper_height(&self) -> Option<f64> {
        self.nav.wrapper_height
    }

    pub fn focused(&self) -> Option<&ItemId> {
        self.focused.as_ref()
    }

    pub fn toggle_focused(&self) -> bool {
        self.toggle_focused
    }

    /// Text currently shown on the toggle control
    pub fn toggle_label(&self) -> &str {
        self.toggle.text()
    }

    /// Transitions started and not yet completed, oldest first
    pub fn pending_transitions(&self) -> Vec<TransitionHandle> {
        self.pending.keys().copied().collect()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Selected ids in selection order
    pub fn selected(&self) -> &[ItemId] {
        self.selection.items()
    }

    /// Selected records in selection order
    pub fn selected_items(&self) -> Vec<&Item> {
        self.selection
            .items()
            .iter()
            .filter_map(|id| self.store.item(id))
            .collect()
    }

    /// Value of the whole selection
    pub fn value(&self) -> SelectionValue {
        self.selection.value()
    }

    /// Resolved value of one item
    pub fn item_value(&self, item: impl Into<ItemRef>) -> Option<String> {
        self.get_item(item).map(|i| i.resolved_value().to_string())
    }

    pub fn text(&self, item: impl Into<ItemRef>) -> Option<String> {
        self.get_item(item).map(|i| i.text.clone())
    }

    pub fn get_item(&self, item: impl Into<ItemRef>) -> Option<&Item> {
        let item = item.into();
        self.store
            .resolve_item(&item)
            .and_then(|id| self.store.item(&id))
    }

    pub fn get_menu(&self, menu: impl Into<MenuRef>) -> Option<&Menu> {
        self.resolve_menu(&menu.into())
            .and_then(|id| self.store.menu(&id))
    }

    /// Register a menu after construction
    pub fn add_menu(&mut self, spec: MenuSpec) -> MenuId {
        self.store.add_menu(spec)
    }

    /// Add one item to a menu; `None` when the menu does not resolve
    pub fn add_item(&mut self, spec: ItemSpec, menu: impl Into<MenuRef>) -> Option<ItemId> {
        let menu = self.resolve_menu(&menu.into())?;
        Some(self.store.add_item(spec, &menu))
    }

    pub fn add_items(&mut self, specs: Vec<ItemSpec>, menu: impl Into<MenuRef>) -> Vec<ItemId> {
        match self.resolve_menu(&menu.into()) {
            Some(menu) => self.store.add_items(specs, &menu),
            None => Vec::new(),
        }
    }

    /// Attach another notification listener
    pub fn add_sink(&mut self, sink: Arc<dyn DropdownEventSink>) {
        self.sinks.push(sink);
    }

    fn resolve_item(&self, item: &ItemRef) -> Option<ItemId> {
        let resolved = self.store.resolve_item(item);
        if resolved.is_none() {
            tracing::debug!(uid = %self.uid, item = item.as_str(), "item not found");
        }
        resolved
    }

    fn resolve_menu(&self, menu: &MenuRef) -> Option<MenuId> {
        let resolved = self.store.resolve_menu(menu, self.nav.current.as_ref());
        if resolved.is_none() {
            tracing::debug!(uid = %self.uid, menu = ?menu, "menu not found");
        }
        resolved
    }

    fn emit(&self, event: DropdownEvent) {
        tracing::trace!(uid = %self.uid, event = event.name(), "notify");
        for sink in &self.sinks {
            sink.on_event(&self.uid, &event);
        }
    }
}
