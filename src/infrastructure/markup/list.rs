//! Nested list markup

use serde::Deserialize;

use crate::domain::entities::{ItemId, ItemSpec};

use super::{value_or_text, ItemOverrides};

/// Class marking a pre-selected list node
pub const SELECTED_CLASS: &str = "dropdown-selected";

/// A `<ul>` or `<ol>` element.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListElement {
    pub ordered: bool,
    pub items: Vec<ListNode>,
}

/// An `<a>` child.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListLink {
    pub text: String,
    pub href: Option<String>,
}

/// An `<li>` element.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListNode {
    pub id: Option<ItemId>,
    pub data_text: Option<String>,
    pub data_value: Option<String>,
    pub data_url: Option<String>,
    pub data_selected: bool,
    pub classes: Vec<String>,
    /// Own text, outside any child element
    pub text: Option<String>,
    pub link: Option<ListLink>,
    pub span: Option<String>,
    /// Inner markup, when given verbatim
    pub html: Option<String>,
    /// A nested list makes this node a parent
    pub children: Option<Vec<ListNode>>,
    pub dropdown: ItemOverrides,
}

impl ListElement {
    /// Item specifications in document order
    pub fn items(&self) -> Vec<ItemSpec> {
        self.items.iter().map(ListNode::to_spec).collect()
    }
}

impl ListNode {
    fn to_spec(&self) -> ItemSpec {
        let mut spec = match &self.children {
            Some(children) => {
                let children = children.iter().map(ListNode::to_spec).collect();
                ItemSpec::parent(self.parent_text(), children)
            }
            None => self.leaf(),
        };
        spec.id = self.id.clone();
        self.dropdown.apply(spec)
    }

    /// Parent text: explicit, else link, else span, else own text
    fn parent_text(&self) -> String {
        [
            self.data_text.as_deref(),
            self.link.as_ref().map(|link| link.text.as_str()),
            self.span.as_deref(),
            self.text.as_deref(),
        ]
        .into_iter()
        .flatten()
        .find(|text| !text.is_empty())
        .unwrap_or_default()
        .to_string()
    }

    fn leaf(&self) -> ItemSpec {
        let text = match self.data_text.as_deref() {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => self.full_text(),
        };
        let value = value_or_text(self.data_value.clone(), &text);

        let mut spec = ItemSpec::new(text).with_value(value);
        if self.has_elements() {
            spec.html = Some(self.inner_html());
            spec.url = self.link.as_ref().and_then(|link| link.href.clone());
        }
        if let Some(url) = &self.data_url {
            spec.url = Some(url.clone());
        }
        spec.selected = self.data_selected || self.classes.iter().any(|c| c == SELECTED_CLASS);
        spec
    }

    fn has_elements(&self) -> bool {
        self.html.is_some() || self.link.is_some() || self.span.is_some()
    }

    /// All text content, own text first
    fn full_text(&self) -> String {
        let parts = [
            self.text.as_deref(),
            self.span.as_deref(),
            self.link.as_ref().map(|link| link.text.as_str()),
        ];
        parts
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn inner_html(&self) -> String {
        if let Some(html) = &self.html {
            return html.clone();
        }
        let mut html = self.text.clone().unwrap_or_default();
        if let Some(span) = &self.span {
            html.push_str(&format!("<span>{span}</span>"));
        }
        if let Some(link) = &self.link {
            match &link.href {
                Some(href) => html.push_str(&format!("<a href=\"{href}\">{}</a>", link.text)),
                None => html.push_str(&format!("<a>{}</a>", link.text)),
            }
        }
        html
    }
}
