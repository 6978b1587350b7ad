//! Terminal surface
//!
//! Lays a menu out on a character grid: one row per item plus a border and
//! title row above and a border row below. Geometry is reported in cells.
//! Clones share state, so the renderer reads what the widget pushed.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::entities::{ItemId, Menu, MenuId};
use crate::domain::ports::Surface;
use crate::domain::value_objects::{Measurements, Point, SelectionValue, Size};

/// Rows a menu panel spends outside its list
pub const CHROME_ROWS: f64 = 3.0;

#[derive(Debug, Default)]
struct TerminalState {
    width: u16,
    height: u16,
    anchor_row: u16,
    toggle_text: String,
    scroll: HashMap<MenuId, f64>,
    control: Option<SelectionValue>,
    navigations: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct TerminalSurface {
    state: Arc<Mutex<TerminalState>>,
}

impl TerminalSurface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            state: Arc::new(Mutex::new(TerminalState {
                width,
                height,
                ..TerminalState::default()
            })),
        }
    }

    /// Row the toggle control is drawn on
    pub fn with_anchor_row(self, row: u16) -> Self {
        self.update(|state| state.anchor_row = row);
        self
    }

    /// The terminal was resized
    pub fn set_size(&self, width: u16, height: u16) {
        self.update(|state| {
            state.width = width;
            state.height = height;
        });
    }

    pub fn size(&self) -> (u16, u16) {
        self.read(|state| (state.width, state.height))
    }

    pub fn toggle_text(&self) -> String {
        self.read(|state| state.toggle_text.clone())
    }

    /// First visible list row of `menu`
    pub fn scroll_top(&self, menu: &MenuId) -> usize {
        self.read(|state| state.scroll.get(menu).copied().unwrap_or(0.0))
            .max(0.0)
            .round() as usize
    }

    /// Value mirrored from the selection, when the source was a select
    pub fn control_value(&self) -> Option<SelectionValue> {
        self.read(|state| state.control.clone())
    }

    /// Links the widget asked to follow
    pub fn navigations(&self) -> Vec<String> {
        self.read(|state| state.navigations.clone())
    }

    fn read<T: Default>(&self, f: impl FnOnce(&TerminalState) -> T) -> T {
        self.state.lock().map(|state| f(&state)).unwrap_or_default()
    }

    fn update(&self, f: impl FnOnce(&mut TerminalState)) {
        if let Ok(mut state) = self.state.lock() {
            f(&mut state);
        }
    }
}

impl Surface for TerminalSurface {
    fn measure(&mut self, menu: &Menu, _wrapper_open: bool) -> Measurements {
        let (width, height, anchor) =
            self.read(|state| (state.width, state.height, state.anchor_row));
        let rows = menu.items.len() as f64;
        let panel = Size::new(f64::from(width), rows + CHROME_ROWS);

        Measurements {
            viewport: Size::new(f64::from(width), f64::from(height)),
            wrapper: panel,
            wrapper_diff: Size::default(),
            menu: panel,
            list: Size::new(f64::from(width), rows),
            scrolled: Point::default(),
            offset: Point::new(0.0, f64::from(anchor)),
            toggle_height: 1.0,
            mobile: false,
        }
    }

    fn item_top(&self, menu: &Menu, item: &ItemId) -> Option<f64> {
        let index = menu.position(item)? as f64;
        Some(index + CHROME_ROWS - self.list_scroll_top(&menu.id))
    }

    fn list_scroll_top(&self, menu: &MenuId) -> f64 {
        self.read(|state| state.scroll.get(menu).copied().unwrap_or(0.0))
    }

    fn scroll_list(&mut self, menu: &MenuId, offset: f64) {
        self.update(|state| {
            state.scroll.insert(menu.clone(), offset);
        });
    }

    fn set_toggle_text(&mut self, text: &str) {
        self.update(|state| state.toggle_text = text.to_string());
    }

    fn sync_control(&mut self, value: &SelectionValue) {
        self.update(|state| state.control = Some(value.clone()));
    }

    fn navigate(&mut self, url: &str) {
        self.update(|state| state.navigations.push(url.to_string()));
    }
}
