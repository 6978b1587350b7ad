//! Entity store
//!
//! Arena of item and menu records keyed by id. Insertion order is kept and
//! is the display order. Parent/child relations are id fields only.

use std::collections::HashMap;

use crate::domain::entities::{
    Children, ChildrenSpec, Divider, Item, ItemId, ItemSpec, Menu, MenuId, MenuSpec,
};
use crate::domain::value_objects::{ItemRef, MenuRef, Slide};

/// Rules that shape how specifications are materialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRules {
    /// Parent items open a submenu instead of being flattened
    pub nested: bool,
    /// Always add a placeholder that selects the parent itself
    pub select_parents: bool,
    /// Derive submenu titles from the parent item text
    pub auto_title: bool,
    /// Title used when nothing else applies
    pub title_text: String,
}

impl Default for BuildRules {
    fn default() -> Self {
        Self {
            nested: true,
            select_parents: false,
            auto_title: true,
            title_text: "Please select".to_string(),
        }
    }
}

/// Authoritative mapping of ids to item and menu records.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    rules: BuildRules,
    items: Vec<Item>,
    item_index: HashMap<ItemId, usize>,
    menus: Vec<Menu>,
    menu_index: HashMap<MenuId, usize>,
    main: Option<MenuId>,
}

impl EntityStore {
    pub fn new(rules: BuildRules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    pub fn rules(&self) -> &BuildRules {
        &self.rules
    }

    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.item_index.get(id).map(|&i| &self.items[i])
    }

    pub fn item_mut(&mut self, id: &ItemId) -> Option<&mut Item> {
        self.item_index.get(id).map(|&i| &mut self.items[i])
    }

    pub fn menu(&self, id: &MenuId) -> Option<&Menu> {
        self.menu_index.get(id).map(|&i| &self.menus[i])
    }

    pub fn menu_mut(&mut self, id: &MenuId) -> Option<&mut Menu> {
        self.menu_index.get(id).map(|&i| &mut self.menus[i])
    }

    /// Items in insertion order
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Menus in insertion order
    pub fn menus(&self) -> impl Iterator<Item = &Menu> {
        self.menus.iter()
    }

    pub fn menus_mut(&mut self) -> impl Iterator<Item = &mut Menu> {
        self.menus.iter_mut()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn main_menu(&self) -> Option<&MenuId> {
        self.main.as_ref()
    }

    /// Resolve an item reference to a stored id.
    pub fn resolve_item(&self, item: &ItemRef) -> Option<ItemId> {
        match item {
            ItemRef::Id(id) => {
                let id = ItemId::new(id.as_str());
                self.item_index.contains_key(&id).then_some(id)
            }
            ItemRef::Resolved(id) => self.item_index.contains_key(id).then(|| id.clone()),
        }
    }

    /// Resolve a menu reference to a stored id.
    ///
    /// `current` is the menu currently shown; `MenuRef::Current` falls back to
    /// main when nothing is shown yet.
    pub fn resolve_menu(&self, menu: &MenuRef, current: Option<&MenuId>) -> Option<MenuId> {
        let id = match menu {
            MenuRef::Main => self.main.clone(),
            MenuRef::Current => current.cloned().or_else(|| self.main.clone()),
            MenuRef::Id(id) if id == "main" => self.main.clone(),
            MenuRef::Id(id) => {
                let menu = MenuId::new(id.as_str());
                if self.menu_index.contains_key(&menu) {
                    Some(menu)
                } else {
                    // An item id stands for the menu the item is shown in.
                    self.item(&ItemId::new(id.as_str()))
                        .and_then(|item| item.menu.clone())
                }
            }
            MenuRef::Resolved(id) => Some(id.clone()),
            MenuRef::OfItem(item) => self.item(item).and_then(|i| i.menu.clone()),
        }?;
        self.menu_index.contains_key(&id).then_some(id)
    }

    /// Register a menu and materialize its items.
    ///
    /// The first menu added becomes main. The title is the explicit title,
    /// else the parent item's text when auto titles are on, else the default.
    pub fn add_menu(&mut self, spec: MenuSpec) -> MenuId {
        let MenuSpec {
            id,
            parent,
            title,
            items,
        } = spec;

        let id = match id {
            Some(id) if !id.as_str().is_empty() && !self.menu_index.contains_key(&id) => id,
            Some(id) => {
                tracing::warn!(menu = %id, "menu id already registered, generating a new one");
                MenuId::generate()
            }
            None => MenuId::generate(),
        };

        let title = match title.filter(|t| !t.is_empty()) {
            Some(title) => title,
            None => parent
                .as_ref()
                .filter(|_| self.rules.auto_title)
                .and_then(|p| self.item(p))
                .map(|p| p.text.clone())
                .unwrap_or_else(|| self.rules.title_text.clone()),
        };

        self.menu_index.insert(id.clone(), self.menus.len());
        self.menus.push(Menu {
            id: id.clone(),
            parent,
            title,
            items: Vec::new(),
            open: false,
            slide: Slide::Right,
            list_height: None,
        });

        if self.main.is_none() {
            self.main = Some(id.clone());
        }

        self.add_items(items, &id);
        id
    }

    pub fn add_items(&mut self, specs: Vec<ItemSpec>, menu: &MenuId) -> Vec<ItemId> {
        specs
            .into_iter()
            .map(|spec| self.add_item(spec, menu))
            .collect()
    }

    /// Register an item in `menu`, recursively materializing its children.
    pub fn add_item(&mut self, spec: ItemSpec, menu: &MenuId) -> ItemId {
        let ItemSpec {
            id,
            text,
            html,
            value,
            url,
            menu: own_menu,
            label,
            divider,
            children,
            selected,
            selectable,
        } = spec;

        let id = self.claim_item_id(id);
        let host = own_menu
            .filter(|m| self.menu_index.contains_key(m))
            .unwrap_or_else(|| menu.clone());
        let children = children.filter(|c| !c.items.is_empty());
        // Flattened parents are replaced by their children in the host menu.
        let rendered = self.rules.nested || children.is_none();

        self.item_index.insert(id.clone(), self.items.len());
        self.items.push(Item {
            id: id.clone(),
            divider: divider.or_else(|| label.as_ref().map(|_| Divider::Top)),
            text,
            html,
            value,
            url,
            menu: rendered.then(|| host.clone()),
            parent: None,
            label,
            children: None,
            selected,
            selectable,
            focused: false,
        });
        if rendered {
            if let Some(host_menu) = self.menu_mut(&host) {
                host_menu.items.push(id.clone());
            }
        }

        if let Some(children) = children {
            self.add_children(&id, &host, children);
        }

        id
    }

    fn add_children(&mut self, parent: &ItemId, host: &MenuId, spec: ChildrenSpec) {
        let ChildrenSpec {
            menu,
            title,
            mut items,
        } = spec;

        let nested = self.rules.nested;
        let target = if nested {
            match menu {
                Some(existing) if self.menu_index.contains_key(&existing) => existing,
                requested => self.add_menu(MenuSpec {
                    id: requested,
                    parent: Some(parent.clone()),
                    title: title.clone(),
                    items: Vec::new(),
                }),
            }
        } else {
            host.clone()
        };

        let Some(owner) = self.item(parent).cloned() else {
            return;
        };
        let has_payload = owner.value.as_deref().is_some_and(|v| !v.is_empty()) || owner.url.is_some();

        if has_payload || self.rules.select_parents {
            // Placeholder standing for "select the parent itself".
            items.insert(
                0,
                ItemSpec {
                    text: owner.text.clone(),
                    html: owner.html.clone(),
                    value: owner.value.clone(),
                    url: owner.url.clone(),
                    ..ItemSpec::default()
                },
            );
        } else if !self.rules.nested {
            if let Some(first) = items.first_mut() {
                if first.label.as_deref().unwrap_or_default().is_empty() {
                    first.label = Some(owner.text.clone());
                }
            }
        }

        let child_ids = self.add_items(items, &target);

        let mut any_selected = false;
        for child in &child_ids {
            if let Some(child) = self.item_mut(child) {
                child.parent = Some(parent.clone());
                any_selected |= child.selected;
            }
        }

        if let Some(owner) = self.item_mut(parent) {
            owner.children = Some(Children {
                menu: nested.then(|| target.clone()),
                title,
                items: child_ids,
            });
            if any_selected {
                owner.selected = true;
            }
        }
    }

    fn claim_item_id(&self, id: Option<ItemId>) -> ItemId {
        match id {
            Some(id) if !id.as_str().is_empty() && !self.item_index.contains_key(&id) => id,
            Some(id) => {
                tracing::warn!(item = %id, "item id already registered, generating a new one");
                ItemId::generate()
            }
            None => ItemId::generate(),
        }
    }
}
