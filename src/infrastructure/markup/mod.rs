//! Population Adapter
//!
//! Markup is modelled as plain serde data instead of a DOM. A source
//! document carries per-element option overrides and exactly one markup
//! root, either a native select control or a nested list.
//!
//! ```toml
//! [options]
//! nested = true
//!
//! [select]
//! multiple = false
//!
//! [[select.options]]
//! text = "Apple"
//!
//! [[select.options]]
//! label = "Citrus"
//! options = [{ text = "Lemon" }, { text = "Lime", selected = true }]
//! ```

mod list;
mod overrides;
mod select;
mod source;

pub use list::{ListElement, ListLink, ListNode};
pub use overrides::ItemOverrides;
pub use select::{SelectElement, SelectGroup, SelectNode, SelectOption};
pub use source::{Population, SourceDocument};

/// Value falls back to text when absent or empty; `"0"` is kept
fn value_or_text(value: Option<String>, text: &str) -> String {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => text.to_string(),
    }
}
