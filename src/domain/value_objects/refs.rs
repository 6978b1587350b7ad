//! References to items and menus.
//!
//! Public operations accept anything convertible into a reference and resolve
//! it exactly once, at entry, through the entity store.

use crate::domain::entities::{Item, ItemId, Menu, MenuId};

/// Reference to an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemRef {
    /// Identifier supplied by the host, possibly unknown
    Id(String),
    /// Identifier taken from an already resolved record
    Resolved(ItemId),
}

impl ItemRef {
    pub fn as_str(&self) -> &str {
        match self {
            ItemRef::Id(id) => id,
            ItemRef::Resolved(id) => id.as_str(),
        }
    }
}

impl From<&str> for ItemRef {
    fn from(id: &str) -> Self {
        ItemRef::Id(id.to_string())
    }
}

impl From<String> for ItemRef {
    fn from(id: String) -> Self {
        ItemRef::Id(id)
    }
}

impl From<ItemId> for ItemRef {
    fn from(id: ItemId) -> Self {
        ItemRef::Resolved(id)
    }
}

impl From<&ItemId> for ItemRef {
    fn from(id: &ItemId) -> Self {
        ItemRef::Resolved(id.clone())
    }
}

impl From<&Item> for ItemRef {
    fn from(item: &Item) -> Self {
        ItemRef::Resolved(item.id.clone())
    }
}

/// Reference to a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuRef {
    /// The main (root) menu, also spelled `"main"`
    Main,
    /// The menu currently shown, falling back to main
    Current,
    /// Identifier supplied by the host, possibly unknown
    Id(String),
    /// Identifier taken from an already resolved record
    Resolved(MenuId),
    /// The menu an item is rendered in
    OfItem(ItemId),
}

impl From<&str> for MenuRef {
    fn from(id: &str) -> Self {
        match id {
            "main" => MenuRef::Main,
            _ => MenuRef::Id(id.to_string()),
        }
    }
}

impl From<String> for MenuRef {
    fn from(id: String) -> Self {
        MenuRef::from(id.as_str())
    }
}

impl From<MenuId> for MenuRef {
    fn from(id: MenuId) -> Self {
        MenuRef::Resolved(id)
    }
}

impl From<&MenuId> for MenuRef {
    fn from(id: &MenuId) -> Self {
        MenuRef::Resolved(id.clone())
    }
}

impl From<&Menu> for MenuRef {
    fn from(menu: &Menu) -> Self {
        MenuRef::Resolved(menu.id.clone())
    }
}

impl From<&Item> for MenuRef {
    fn from(item: &Item) -> Self {
        MenuRef::OfItem(item.id.clone())
    }
}

impl<T: Into<MenuRef>> From<Option<T>> for MenuRef {
    fn from(menu: Option<T>) -> Self {
        menu.map(Into::into).unwrap_or(MenuRef::Current)
    }
}
