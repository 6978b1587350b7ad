//! Selection sequences.
//!
//! Single-select keeps at most one id and its value. Multi-select keeps two
//! parallel ordered sequences, each free of duplicates.

use serde::Serialize;

use crate::domain::entities::ItemId;

/// The selection held by one dropdown instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Single {
        item: Option<ItemId>,
        value: Option<String>,
    },
    Multi {
        items: Vec<ItemId>,
        values: Vec<String>,
    },
}

impl Selection {
    pub fn new(multi: bool) -> Self {
        if multi {
            Selection::Multi {
                items: Vec::new(),
                values: Vec::new(),
            }
        } else {
            Selection::Single {
                item: None,
                value: None,
            }
        }
    }

    pub fn is_multi(&self) -> bool {
        matches!(self, Selection::Multi { .. })
    }

    /// Selected ids in selection order
    pub fn items(&self) -> &[ItemId] {
        match self {
            Selection::Single { item, .. } => item.as_slice(),
            Selection::Multi { items, .. } => items,
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.items().contains(id)
    }

    /// The sole selected id in single-select mode
    pub fn current(&self) -> Option<&ItemId> {
        match self {
            Selection::Single { item, .. } => item.as_ref(),
            Selection::Multi { .. } => None,
        }
    }

    /// Record `id` as selected. Idempotent in multi-select mode.
    pub fn insert(&mut self, id: ItemId, value: &str) {
        match self {
            Selection::Single { item, value: v } => {
                *item = Some(id);
                *v = Some(value.to_string());
            }
            Selection::Multi { items, values } => {
                if !items.contains(&id) {
                    items.push(id);
                }
                if !values.iter().any(|v| v == value) {
                    values.push(value.to_string());
                }
            }
        }
    }

    /// Forget `id`. Values are removed by equality, not by position.
    pub fn remove(&mut self, id: &ItemId, value: &str) {
        match self {
            Selection::Single { item, value: v } => {
                if item.as_ref() == Some(id) {
                    *item = None;
                    if v.as_deref() == Some(value) {
                        *v = None;
                    }
                }
            }
            Selection::Multi { items, values } => {
                items.retain(|i| i != id);
                values.retain(|v| v != value);
            }
        }
    }

    pub fn value(&self) -> SelectionValue {
        match self {
            Selection::Single { value, .. } => SelectionValue::Single(value.clone()),
            Selection::Multi { values, .. } => SelectionValue::Multi(values.clone()),
        }
    }
}

/// Value reported by the facade and mirrored into a native control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SelectionValue {
    Single(Option<String>),
    Multi(Vec<String>),
}

impl SelectionValue {
    /// Values as a flat list
    pub fn as_vec(&self) -> Vec<String> {
        match self {
            SelectionValue::Single(value) => value.iter().cloned().collect(),
            SelectionValue::Multi(values) => values.clone(),
        }
    }
}

/// Values passed to `select_by_value`. A scalar is wrapped into a sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Values(Vec<String>);

impl Values {
    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| v == value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Values {
    fn from(value: &str) -> Self {
        Values(vec![value.to_string()])
    }
}

impl From<String> for Values {
    fn from(value: String) -> Self {
        Values(vec![value])
    }
}

impl From<Vec<String>> for Values {
    fn from(values: Vec<String>) -> Self {
        Values(values)
    }
}

impl From<&[&str]> for Values {
    fn from(values: &[&str]) -> Self {
        Values(values.iter().map(|v| v.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Values {
    fn from(values: [&str; N]) -> Self {
        Values(values.iter().map(|v| v.to_string()).collect())
    }
}

impl From<SelectionValue> for Values {
    fn from(value: SelectionValue) -> Self {
        Values(value.as_vec())
    }
}
