//! Native select control

use serde::Deserialize;

use crate::domain::entities::{ItemId, ItemSpec};

use super::{value_or_text, ItemOverrides};

/// A `<select>` element.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SelectElement {
    pub multiple: bool,
    pub options: Vec<SelectNode>,
}

/// Child of a select: a group of options or a single option.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SelectNode {
    Group(SelectGroup),
    Option(SelectOption),
}

/// An `<optgroup>`. Groups hold options only.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SelectGroup {
    pub label: String,
    #[serde(default)]
    pub id: Option<ItemId>,
    pub options: Vec<SelectOption>,
    #[serde(default)]
    pub dropdown: ItemOverrides,
}

/// An `<option>`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SelectOption {
    pub text: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub id: Option<ItemId>,
    #[serde(default)]
    pub dropdown: ItemOverrides,
}

impl SelectElement {
    /// Item specifications in document order
    pub fn items(&self) -> Vec<ItemSpec> {
        self.options.iter().map(SelectNode::to_spec).collect()
    }
}

impl SelectNode {
    fn to_spec(&self) -> ItemSpec {
        match self {
            SelectNode::Group(group) => group.to_spec(),
            SelectNode::Option(option) => option.to_spec(),
        }
    }
}

impl SelectGroup {
    fn to_spec(&self) -> ItemSpec {
        let children = self.options.iter().map(SelectOption::to_spec).collect();
        let mut spec = ItemSpec::parent(self.label.clone(), children);
        spec.id = self.id.clone();
        self.dropdown.apply(spec)
    }
}

impl SelectOption {
    fn to_spec(&self) -> ItemSpec {
        let mut spec = ItemSpec::new(self.text.clone())
            .with_value(value_or_text(self.value.clone(), &self.text));
        spec.id = self.id.clone();
        spec.selected = self.selected;
        self.dropdown.apply(spec)
    }
}
