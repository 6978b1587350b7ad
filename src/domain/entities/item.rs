//! Item entity - a selectable leaf or a parent node.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::menu::MenuId;

/// Identity of an item, unique across one dropdown instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a random v4 identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Where a divider is drawn relative to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Divider {
    Top,
    Bottom,
    Both,
}

impl Divider {
    pub fn above(self) -> bool {
        matches!(self, Divider::Top | Divider::Both)
    }

    pub fn below(self) -> bool {
        matches!(self, Divider::Bottom | Divider::Both)
    }
}

/// Children declared by an item specification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChildrenSpec {
    /// Explicit submenu id (nested mode)
    pub menu: Option<MenuId>,
    /// Submenu title
    pub title: Option<String>,
    /// Child item specifications, in display order
    pub items: Vec<ItemSpec>,
}

/// Input description of an item, as produced by markup population or
/// supplied programmatically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemSpec {
    pub id: Option<ItemId>,
    pub text: String,
    pub html: Option<String>,
    pub value: Option<String>,
    pub url: Option<String>,
    pub menu: Option<MenuId>,
    pub label: Option<String>,
    pub divider: Option<Divider>,
    pub children: Option<ChildrenSpec>,
    pub selected: bool,
    pub selectable: bool,
}

impl Default for ItemSpec {
    fn default() -> Self {
        Self {
            id: None,
            text: String::new(),
            html: None,
            value: None,
            url: None,
            menu: None,
            label: None,
            divider: None,
            children: None,
            selected: false,
            selectable: true,
        }
    }
}

impl ItemSpec {
    /// Create a leaf item with display text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Create a parent item whose children open a submenu (or are flattened)
    pub fn parent(text: impl Into<String>, items: Vec<ItemSpec>) -> Self {
        Self {
            text: text.into(),
            children: Some(ChildrenSpec {
                items,
                ..ChildrenSpec::default()
            }),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<ItemId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.children.get_or_insert_with(ChildrenSpec::default).title = Some(title.into());
        self
    }

    pub fn with_submenu(mut self, menu: impl Into<String>) -> Self {
        self.children.get_or_insert_with(ChildrenSpec::default).menu = Some(MenuId::new(menu));
        self
    }

    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }

    pub fn unselectable(mut self) -> Self {
        self.selectable = false;
        self
    }
}

/// Materialized children of a parent item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Children {
    /// Submenu opened by this item (nested mode only)
    pub menu: Option<MenuId>,
    pub title: Option<String>,
    /// Child ids in display order
    pub items: Vec<ItemId>,
}

/// A stored item record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    pub html: Option<String>,
    pub value: Option<String>,
    pub url: Option<String>,
    /// Menu the item is rendered in; `None` for flattened parents
    pub menu: Option<MenuId>,
    pub parent: Option<ItemId>,
    pub label: Option<String>,
    pub divider: Option<Divider>,
    pub children: Option<Children>,
    pub selected: bool,
    pub selectable: bool,
    pub focused: bool,
}

impl Item {
    /// The value used for selection and native control mirroring.
    ///
    /// Falls back to the text when the value is absent or empty. Any other
    /// literal, including `"0"`, is kept as is.
    pub fn resolved_value(&self) -> &str {
        match self.value.as_deref() {
            Some(value) if !value.is_empty() => value,
            _ => &self.text,
        }
    }

    /// Whether this item has materialized children
    pub fn is_parent(&self) -> bool {
        self.children.as_ref().is_some_and(|c| !c.items.is_empty())
    }

    /// The submenu this item opens, if any
    pub fn submenu(&self) -> Option<&MenuId> {
        self.children.as_ref().and_then(|c| c.menu.as_ref())
    }

    /// Child ids, empty for leaves
    pub fn child_ids(&self) -> &[ItemId] {
        self.children
            .as_ref()
            .map(|c| c.items.as_slice())
            .unwrap_or_default()
    }

    /// Label text shown on the toggle control when this item is chosen
    pub fn toggle_label(&self, prefer_html: bool) -> &str {
        match self.html.as_deref() {
            Some(html) if prefer_html => html,
            _ => &self.text,
        }
    }
}
