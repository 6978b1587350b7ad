//! Selection engine
//!
//! Select/deselect over the entity store. Single-select keeps at most one
//! selected leaf; multi-select toggles. Every change propagates to ancestors
//! before the call returns.

use crate::domain::entities::ItemId;
use crate::domain::ports::DropdownEvent;
use crate::domain::services::propagate_selection;
use crate::domain::value_objects::{ItemRef, MenuRef, Values};

use super::{Dropdown, Motion};

impl Dropdown {
    /// Select an item.
    ///
    /// A parent item with a submenu opens it instead. In multi-select mode an
    /// already selected item is deselected. Returns `false` when the item does
    /// not resolve or cannot be selected.
    pub fn select(&mut self, item: impl Into<ItemRef>) -> bool {
        let Some(id) = self.resolve_item(&item.into()) else {
            return false;
        };
        self.select_item(&id, true)
    }

    pub(super) fn select_item(&mut self, id: &ItemId, follow: bool) -> bool {
        let Some(item) = self.store.item(id).cloned() else {
            return false;
        };

        if self.options.nested {
            if let Some(submenu) = item.submenu() {
                return self.open_menu_with(MenuRef::Resolved(submenu.clone()), Motion::Animated);
            }
        }
        if item.is_parent() && item.menu.is_none() {
            tracing::debug!(uid = %self.uid, item = %id, "flattened parent cannot be selected");
            return false;
        }
        if !item.selectable {
            tracing::debug!(uid = %self.uid, item = %id, "item is not selectable");
            return false;
        }

        let multi = self.selection.is_multi();
        if multi && item.selected {
            return self.deselect_item(id);
        }

        let previous = if multi {
            None
        } else {
            self.selection.current().filter(|cur| *cur != id).cloned()
        };

        self.emit(DropdownEvent::SelectBefore {
            item: id.clone(),
            previous: previous.clone(),
        });

        let has_link = item.url.is_some();
        if !has_link || self.options.select_links {
            if let Some(previous) = &previous {
                self.deselect_item(previous);
            }
            if let Some(record) = self.store.item_mut(id) {
                record.selected = true;
            }
            self.selection.insert(id.clone(), item.resolved_value());
            propagate_selection(&mut self.store, id);
        }

        if self.options.auto_toggle && (!has_link || self.options.auto_toggle_link != Some(false)) {
            let now_selected = self.store.item(id).is_some_and(|i| i.selected);
            if self.selection.is_empty() {
                self.toggle_label_reset();
            } else if !multi || now_selected {
                let label = item.toggle_label(self.options.auto_toggle_html).to_string();
                self.toggle_label_added(&label);
            }
        }

        if self.should_close_after_select(has_link) {
            self.close();
        }

        self.mirror_control();
        self.emit(DropdownEvent::Select {
            item: id.clone(),
            previous,
        });

        if follow && self.options.follow_links {
            if let Some(url) = &item.url {
                tracing::debug!(uid = %self.uid, url = url.as_str(), "following item link");
                self.surface.navigate(url);
            }
        }
        true
    }

    fn should_close_after_select(&self, has_link: bool) -> bool {
        let opt = &self.options;
        let multi = self.selection.is_multi();

        if !(opt.auto_close || (!multi && opt.auto_close_link == Some(true))) {
            return false;
        }

        if multi {
            opt.auto_close_max && opt.max_select.is_some_and(|max| max == self.selection.len())
        } else {
            !has_link
                || opt.auto_close_link == Some(true)
                || (opt.auto_close && opt.auto_close_link.is_none())
        }
    }

    /// Deselect one item.
    ///
    /// A parent marked selected by propagation deselects its selected
    /// descendants. Returns `false` when the item does not resolve or is not
    /// selected.
    pub fn deselect(&mut self, item: impl Into<ItemRef>) -> bool {
        let Some(id) = self.resolve_item(&item.into()) else {
            return false;
        };
        self.deselect_item(&id)
    }

    /// Deselect everything, iterating a snapshot of the selection
    pub fn deselect_all(&mut self) -> bool {
        let selected = self.selection.items().to_vec();
        if selected.is_empty() {
            return false;
        }
        for id in &selected {
            self.deselect_item(id);
        }
        true
    }

    pub(super) fn deselect_item(&mut self, id: &ItemId) -> bool {
        let Some(item) = self.store.item(id).cloned() else {
            return false;
        };
        if !item.selected {
            return false;
        }

        if item.is_parent() {
            let selected_children: Vec<ItemId> = item
                .child_ids()
                .iter()
                .filter(|c| self.store.item(c).is_some_and(|c| c.selected))
                .cloned()
                .collect();
            let mut any = false;
            for child in &selected_children {
                any |= self.deselect_item(child);
            }
            return any;
        }

        self.emit(DropdownEvent::DeselectBefore { item: id.clone() });

        if let Some(record) = self.store.item_mut(id) {
            record.selected = false;
        }
        self.selection.remove(id, item.resolved_value());

        if self.options.auto_toggle {
            let label = item.toggle_label(self.options.auto_toggle_html).to_string();
            self.toggle_label_removed(&label);
        }

        propagate_selection(&mut self.store, id);
        self.mirror_control();
        self.emit(DropdownEvent::Deselect { item: id.clone() });
        true
    }

    /// Select every leaf whose resolved value is one of `values`.
    ///
    /// Already selected leaves are skipped, so repeating a call leaves the
    /// state unchanged.
    pub fn select_by_value(&mut self, values: impl Into<Values>, clear: bool) -> bool {
        let values = values.into();
        if clear {
            self.deselect_all();
        }

        let candidates: Vec<ItemId> = self
            .store
            .items()
            .filter(|item| !item.is_parent() && values.contains(item.resolved_value()))
            .map(|item| item.id.clone())
            .collect();

        for id in candidates {
            let unselected = self.store.item(&id).is_some_and(|i| !i.selected);
            if unselected {
                self.select_item(&id, true);
            }
        }
        true
    }

    /// The native control's value changed; pull it into the engine
    pub fn control_changed(&mut self, values: impl Into<Values>) -> bool {
        self.select_by_value(values, true)
    }

    fn mirror_control(&mut self) {
        if self.mirrors_control {
            let value = self.selection.value();
            self.surface.sync_control(&value);
        }
    }
}
