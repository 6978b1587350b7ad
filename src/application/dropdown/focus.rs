//! Focus marker and keyboard navigation

use serde::Serialize;

use crate::domain::entities::{ItemId, MenuId};
use crate::domain::value_objects::{ItemRef, MenuRef};

use super::{Dropdown, Phase};

/// Discrete keys the keyboard state machine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Key {
    Tab,
    Enter,
    Escape,
    Up,
    Down,
    Left,
    Right,
}

impl Dropdown {
    /// Move the focus marker to `item`.
    ///
    /// The previous marker is cleared first, even when `item` does not
    /// resolve.
    pub fn focus(&mut self, item: impl Into<ItemRef>) -> bool {
        self.drop_focus_marker();

        let Some(id) = self.resolve_item(&item.into()) else {
            return false;
        };
        if let Some(record) = self.store.item_mut(&id) {
            record.focused = true;
        }
        self.toggle_focused = false;
        self.surface.focus_item(Some(&id));
        self.focused = Some(id);
        true
    }

    /// Drop item focus
    pub fn clear_focus(&mut self) {
        if self.drop_focus_marker() {
            self.surface.focus_item(None);
        }
    }

    /// Host reports the toggle control gained or lost input focus
    pub fn set_toggle_focus(&mut self, focused: bool) {
        self.toggle_focused = focused;
    }

    fn drop_focus_marker(&mut self) -> bool {
        let Some(previous) = self.focused.take() else {
            return false;
        };
        if let Some(record) = self.store.item_mut(&previous) {
            record.focused = false;
        }
        true
    }

    fn focus_toggle(&mut self) {
        self.clear_focus();
        self.toggle_focused = true;
        self.surface.focus_toggle();
    }

    /// Feed one key to the keyboard state machine.
    ///
    /// Keys are ignored unless the widget is open or its toggle control has
    /// input focus. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if !self.options.keyboard {
            return false;
        }
        let open = self.nav.phase == Phase::Open;
        if !open && !self.toggle_focused {
            return false;
        }

        let focused = self.focused.clone();
        match key {
            Key::Tab => open && self.close(),
            Key::Enter => {
                if open {
                    if let Some(focused) = focused {
                        return self.enter_item(&focused);
                    }
                }
                if self.toggle_focused {
                    return self.toggle();
                }
                false
            }
            Key::Escape => open && self.close(),
            Key::Up => {
                if !open {
                    return false;
                }
                let Some(focused) = focused else {
                    return true;
                };
                match self.sibling(&focused, -1) {
                    Some(previous) => self.focus(previous),
                    None => {
                        self.focus_toggle();
                        true
                    }
                }
            }
            Key::Down => {
                let Some(menu) = self.resolve_menu(&MenuRef::Current) else {
                    return false;
                };
                if self.toggle_focused {
                    if !open {
                        self.open();
                    }
                    if let Some(first) = self.menu_items(&menu).first().cloned() {
                        self.focus(first);
                    }
                    return true;
                }
                match focused {
                    None => {
                        let items = self.menu_items(&menu);
                        let target = match self.first_selected(&menu) {
                            Some(selected) => self
                                .sibling(&selected, 1)
                                .unwrap_or(selected),
                            None => match items.first() {
                                Some(first) => first.clone(),
                                None => return true,
                            },
                        };
                        self.focus(target)
                    }
                    Some(focused) => {
                        if let Some(next) = self.sibling(&focused, 1) {
                            self.focus(next);
                        }
                        true
                    }
                }
            }
            Key::Left => {
                if !open || self.nav.current.as_ref() == self.store.main_menu() {
                    return false;
                }
                let Some(current) = self.nav.current.clone() else {
                    return false;
                };
                let parent_item = self.store.menu(&current).and_then(|m| m.parent.clone());
                self.close_menu(current);
                if let Some(parent_item) = parent_item {
                    self.focus(parent_item);
                }
                true
            }
            Key::Right => {
                let Some(focused) = focused.filter(|_| open) else {
                    return false;
                };
                let Some(submenu) = self.store.item(&focused).and_then(|i| i.submenu().cloned())
                else {
                    return false;
                };
                self.descend(&submenu)
            }
        }
    }

    /// Enter on a focused item: descend into its submenu or select it
    fn enter_item(&mut self, focused: &ItemId) -> bool {
        let submenu = self.store.item(focused).and_then(|i| i.submenu().cloned());
        match submenu {
            Some(submenu) => self.descend(&submenu),
            None => self.select(focused),
        }
    }

    /// Focus the pre-selected (or first) item of `submenu`, then open it
    fn descend(&mut self, submenu: &MenuId) -> bool {
        let target = self
            .first_selected(submenu)
            .or_else(|| self.menu_items(submenu).first().cloned());
        if let Some(target) = target {
            self.focus(target);
        }
        self.open_menu(submenu);
        true
    }

    fn menu_items(&self, menu: &MenuId) -> Vec<ItemId> {
        self.store
            .menu(menu)
            .map(|m| m.items.clone())
            .unwrap_or_default()
    }

    fn first_selected(&self, menu: &MenuId) -> Option<ItemId> {
        self.store.menu(menu)?.items.iter().find_map(|id| {
            self.store
                .item(id)
                .filter(|item| item.selected)
                .map(|item| item.id.clone())
        })
    }

    /// Neighbour of `item` within its own menu, `step` positions away
    fn sibling(&self, item: &ItemId, step: isize) -> Option<ItemId> {
        let menu = self.store.item(item)?.menu.as_ref()?;
        let items = &self.store.menu(menu)?.items;
        let index = items.iter().position(|i| i == item)?;
        let target = index.checked_add_signed(step)?;
        items.get(target).cloned()
    }
}
