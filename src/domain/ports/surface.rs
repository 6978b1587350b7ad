//! Surface Port
//!
//! Everything the widget needs from the host presentation layer: layout
//! measurements, focus, the toggle label and the native control it mirrors.

use crate::domain::entities::{ItemId, Menu, MenuId};
use crate::domain::value_objects::{Measurements, SelectionValue};

/// Host presentation collaborator
///
/// Only `measure` is required. Everything else defaults to a no-op so simple
/// hosts stay small.
pub trait Surface: Send {
    /// Whether the host can animate at all; `false` forces zero-speed transitions
    fn supports_transitions(&self) -> bool {
        true
    }

    /// Measure a menu at its intrinsic size.
    ///
    /// `wrapper_open` tells whether the wrapper is currently shown; a host
    /// that needs visibility to measure must restore the prior state itself.
    fn measure(&mut self, menu: &Menu, wrapper_open: bool) -> Measurements;

    /// Offset of an item from the top of its menu's visible list
    fn item_top(&self, _menu: &Menu, _item: &ItemId) -> Option<f64> {
        None
    }

    /// Current scroll distance of a menu's list
    fn list_scroll_top(&self, _menu: &MenuId) -> f64 {
        0.0
    }

    fn scroll_list(&mut self, _menu: &MenuId, _offset: f64) {}

    /// Move input focus to an item, or drop item focus with `None`
    fn focus_item(&mut self, _item: Option<&ItemId>) {}

    /// Move input focus to the toggle control
    fn focus_toggle(&mut self) {}

    fn set_toggle_text(&mut self, _text: &str) {}

    /// Mirror the selection into the native control the widget was built from
    fn sync_control(&mut self, _value: &SelectionValue) {}

    /// Follow an item link
    fn navigate(&mut self, _url: &str) {}
}

/// Surface with no layout: every measurement is zero
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessSurface;

impl Surface for HeadlessSurface {
    fn measure(&mut self, _menu: &Menu, _wrapper_open: bool) -> Measurements {
        Measurements::default()
    }
}
