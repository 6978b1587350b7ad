//! Fixed surface
//!
//! Answers measurements from a fixed layout. When a row height is set, list
//! heights follow the item count of each menu and item offsets follow their
//! position. Every call the widget makes into the host is logged; clones
//! share the log.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::entities::{ItemId, Menu, MenuId};
use crate::domain::ports::Surface;
use crate::domain::value_objects::{Measurements, SelectionValue, Size};

/// Host calls observed by a `FixedSurface`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurfaceLog {
    pub toggle_texts: Vec<String>,
    pub controls: Vec<SelectionValue>,
    pub navigations: Vec<String>,
    pub focus: Vec<Option<ItemId>>,
    pub toggle_focus: usize,
    pub scrolls: Vec<(MenuId, f64)>,
    pub measured: Vec<MenuId>,
}

#[derive(Debug, Clone)]
pub struct FixedSurface {
    measurements: Measurements,
    /// Per-menu (menu, list) sizes
    menus: HashMap<MenuId, (Size, Size)>,
    row_height: f64,
    scroll_tops: HashMap<MenuId, f64>,
    transitions: bool,
    log: Arc<Mutex<SurfaceLog>>,
}

impl Default for FixedSurface {
    fn default() -> Self {
        Self::new(Measurements::default())
    }
}

impl FixedSurface {
    pub fn new(measurements: Measurements) -> Self {
        Self {
            measurements,
            menus: HashMap::new(),
            row_height: 0.0,
            scroll_tops: HashMap::new(),
            transitions: true,
            log: Arc::new(Mutex::new(SurfaceLog::default())),
        }
    }

    /// Derive list heights and item offsets from rows of `height`
    pub fn with_row_height(mut self, height: f64) -> Self {
        self.row_height = height;
        self
    }

    /// Pin the menu and list size reported for one menu
    pub fn with_menu(mut self, menu: impl Into<MenuId>, outer: Size, list: Size) -> Self {
        self.menus.insert(menu.into(), (outer, list));
        self
    }

    pub fn with_scroll_top(mut self, menu: impl Into<MenuId>, top: f64) -> Self {
        self.scroll_tops.insert(menu.into(), top);
        self
    }

    /// Report that the host cannot animate
    pub fn without_transitions(mut self) -> Self {
        self.transitions = false;
        self
    }

    /// Snapshot of the calls so far
    pub fn log(&self) -> SurfaceLog {
        self.log.lock().map(|log| log.clone()).unwrap_or_default()
    }

    /// Text most recently pushed to the toggle control
    pub fn toggle_text(&self) -> Option<String> {
        self.log().toggle_texts.last().cloned()
    }

    /// Value most recently mirrored into the native control
    pub fn control_value(&self) -> Option<SelectionValue> {
        self.log().controls.last().cloned()
    }

    fn record(&self, f: impl FnOnce(&mut SurfaceLog)) {
        if let Ok(mut log) = self.log.lock() {
            f(&mut log);
        }
    }
}

impl Surface for FixedSurface {
    fn supports_transitions(&self) -> bool {
        self.transitions
    }

    fn measure(&mut self, menu: &Menu, _wrapper_open: bool) -> Measurements {
        self.record(|log| log.measured.push(menu.id.clone()));

        let mut measurements = self.measurements;
        if let Some((outer, list)) = self.menus.get(&menu.id) {
            measurements.menu = *outer;
            measurements.list = *list;
        } else if self.row_height > 0.0 {
            let chrome = measurements.menu.height - measurements.list.height;
            measurements.list.height = menu.items.len() as f64 * self.row_height;
            measurements.menu.height = measurements.list.height + chrome;
        }
        measurements
    }

    fn item_top(&self, menu: &Menu, item: &ItemId) -> Option<f64> {
        if self.row_height <= 0.0 {
            return None;
        }
        let index = menu.position(item)?;
        Some(index as f64 * self.row_height - self.list_scroll_top(&menu.id))
    }

    fn list_scroll_top(&self, menu: &MenuId) -> f64 {
        self.scroll_tops.get(menu).copied().unwrap_or(0.0)
    }

    fn scroll_list(&mut self, menu: &MenuId, offset: f64) {
        self.scroll_tops.insert(menu.clone(), offset);
        self.record(|log| log.scrolls.push((menu.clone(), offset)));
    }

    fn focus_item(&mut self, item: Option<&ItemId>) {
        self.record(|log| log.focus.push(item.cloned()));
    }

    fn focus_toggle(&mut self) {
        self.record(|log| log.toggle_focus += 1);
    }

    fn set_toggle_text(&mut self, text: &str) {
        self.record(|log| log.toggle_texts.push(text.to_string()));
    }

    fn sync_control(&mut self, value: &SelectionValue) {
        self.record(|log| log.controls.push(value.clone()));
    }

    fn navigate(&mut self, url: &str) {
        self.record(|log| log.navigations.push(url.to_string()));
    }
}
