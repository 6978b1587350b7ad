//! Menu entity - one navigable level of the dropdown.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::item::{ItemId, ItemSpec};
use crate::domain::value_objects::Slide;

/// Identity of a menu, unique across one dropdown instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuId(String);

impl MenuId {
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

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MenuId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for MenuId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Input description of a menu.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuSpec {
    pub id: Option<MenuId>,
    /// Item whose children this menu shows
    pub parent: Option<ItemId>,
    pub title: Option<String>,
    pub items: Vec<ItemSpec>,
}

/// A stored menu record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Menu {
    pub id: MenuId,
    pub parent: Option<ItemId>,
    pub title: String,
    /// Item ids in display order
    pub items: Vec<ItemId>,
    /// Settled open state; transient opening/closing lives on the instance
    pub open: bool,
    /// Horizontal resting position
    pub slide: Slide,
    /// Height override applied to the inner list by the last resize
    pub list_height: Option<f64>,
}

impl Menu {
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Position of an item within this menu
    pub fn position(&self, item: &ItemId) -> Option<usize> {
        self.items.iter().position(|i| i == item)
    }
}
