//! Per-element item overrides

use serde::Deserialize;

use crate::domain::entities::{Divider, ItemSpec, MenuId};

/// Item fields a markup element can force through its `dropdown` table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ItemOverrides {
    pub label: Option<String>,
    pub divider: Option<Divider>,
    pub selectable: Option<bool>,
    pub url: Option<String>,
    pub html: Option<String>,
    /// Explicit submenu id for a parent
    pub menu: Option<MenuId>,
    /// Submenu title for a parent
    pub title: Option<String>,
}

impl ItemOverrides {
    pub(super) fn apply(&self, mut spec: ItemSpec) -> ItemSpec {
        if let Some(label) = &self.label {
            spec.label = Some(label.clone());
        }
        if self.divider.is_some() {
            spec.divider = self.divider;
        }
        if let Some(selectable) = self.selectable {
            spec.selectable = selectable;
        }
        if let Some(url) = &self.url {
            spec.url = Some(url.clone());
        }
        if let Some(html) = &self.html {
            spec.html = Some(html.clone());
        }
        if let Some(children) = spec.children.as_mut() {
            if self.menu.is_some() {
                children.menu = self.menu.clone();
            }
            if self.title.is_some() {
                children.title = self.title.clone();
            }
        }
        spec
    }
}
