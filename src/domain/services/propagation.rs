//! Selection Propagation Domain Service
//!
//! Keeps every parent's `selected` flag equal to "any child selected",
//! walking upward from a changed item.

use crate::domain::entities::ItemId;

use super::store::EntityStore;

/// Recompute `selected` on each ancestor of `from`.
///
/// A selected child marks its parent selected directly; otherwise the parent
/// is recomputed from all of its children. Iterative, so depth is unbounded.
pub fn propagate_selection(store: &mut EntityStore, from: &ItemId) {
    let mut cursor = from.clone();

    loop {
        let Some(item) = store.item(&cursor) else {
            return;
        };
        let Some(parent) = item.parent.clone() else {
            return;
        };
        let child_selected = item.selected;

        let selected = child_selected || any_child_selected(store, &parent);
        let Some(parent_item) = store.item_mut(&parent) else {
            return;
        };
        parent_item.selected = selected;

        cursor = parent;
    }
}

fn any_child_selected(store: &EntityStore, parent: &ItemId) -> bool {
    store.item(parent).is_some_and(|p| {
        p.child_ids()
            .iter()
            .any(|c| store.item(c).is_some_and(|c| c.selected))
    })
}
