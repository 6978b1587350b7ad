//! Option type definitions

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::services::BuildRules;
use crate::error::DropmenuResult;

use super::loader::{self, ConfigWarning};

/// Settled widget options.
///
/// Built once per instance from `Options::default()` and zero or more
/// `OptionsPatch` layers, then never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Options {
    /// Transition duration in milliseconds
    pub speed: u64,
    pub easing: String,
    /// Viewport margin subtracted from every collision space
    pub margin: f64,
    pub collision: bool,
    /// Debounce for window-resize driven resizes; `None` disables
    pub auto_resize: Option<u64>,
    pub scroll_selected: bool,
    pub keyboard: bool,
    pub nested: bool,
    pub select_parents: bool,
    /// `None` infers multi-select from the native control
    pub multi: Option<bool>,
    pub max_select: Option<usize>,
    pub min_select: Option<usize>,
    pub select_links: bool,
    pub follow_links: bool,
    pub auto_close: bool,
    pub auto_close_max: bool,
    /// `None` follows `auto_close` for link items
    pub auto_close_link: Option<bool>,
    pub close_reset: bool,
    pub auto_toggle: bool,
    /// `None` lets link items update the toggle text too
    pub auto_toggle_link: Option<bool>,
    pub auto_toggle_html: bool,
    pub auto_title: bool,
    pub toggle_text: String,
    pub title_text: String,
    pub close_text: String,
    pub back_text: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            speed: 200,
            easing: "easeInOutCirc".to_string(),
            margin: 20.0,
            collision: true,
            auto_resize: Some(200),
            scroll_selected: true,
            keyboard: true,
            nested: true,
            select_parents: false,
            multi: None,
            max_select: None,
            min_select: None,
            select_links: false,
            follow_links: true,
            auto_close: true,
            auto_close_max: true,
            auto_close_link: Some(true),
            close_reset: true,
            auto_toggle: true,
            auto_toggle_link: Some(false),
            auto_toggle_html: false,
            auto_title: true,
            toggle_text: "Please select".to_string(),
            title_text: "Please select".to_string(),
            close_text: "Close".to_string(),
            back_text: "Back".to_string(),
        }
    }
}

impl Options {
    /// Apply `patches` in order over the defaults
    pub fn layered<'a>(patches: impl IntoIterator<Item = &'a OptionsPatch>) -> Self {
        patches
            .into_iter()
            .fold(Self::default(), |options, patch| options.merge(patch))
    }

    /// Override every field `patch` sets
    pub fn merge(mut self, patch: &OptionsPatch) -> Self {
        macro_rules! take {
            ($($field:ident),* $(,)?) => {
                $(if let Some(value) = &patch.$field {
                    self.$field = value.clone();
                })*
            };
        }

        take!(
            speed,
            easing,
            margin,
            collision,
            auto_resize,
            scroll_selected,
            keyboard,
            nested,
            select_parents,
            multi,
            max_select,
            min_select,
            select_links,
            follow_links,
            auto_close,
            auto_close_max,
            auto_close_link,
            close_reset,
            auto_toggle,
            auto_toggle_link,
            auto_toggle_html,
            auto_title,
            toggle_text,
            title_text,
            close_text,
            back_text,
        );
        self
    }

    /// Multi-select; unset counts as single-select
    pub fn is_multi(&self) -> bool {
        self.multi.unwrap_or(false)
    }

    /// Rules the entity store materializes specifications with
    pub fn build_rules(&self) -> BuildRules {
        BuildRules {
            nested: self.nested,
            select_parents: self.select_parents,
            auto_title: self.auto_title,
            title_text: self.title_text.clone(),
        }
    }

    /// Load an options file as a patch, collecting unknown-key warnings.
    pub fn load_with_warnings(path: &Path) -> DropmenuResult<(OptionsPatch, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }
}

/// A partial option set, as read from an options file or a source
/// document's `[options]` table.
///
/// Nullable options use a nested `Option`: the outer level says whether the
/// key was present, the inner one carries the value. In TOML, which has no
/// null, `false` clears a number and `"auto"` clears a flag.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OptionsPatch {
    pub speed: Option<u64>,
    pub easing: Option<String>,
    pub margin: Option<f64>,
    pub collision: Option<bool>,
    #[serde(deserialize_with = "limit")]
    pub auto_resize: Option<Option<u64>>,
    pub scroll_selected: Option<bool>,
    pub keyboard: Option<bool>,
    pub nested: Option<bool>,
    pub select_parents: Option<bool>,
    #[serde(deserialize_with = "tri_state")]
    pub multi: Option<Option<bool>>,
    #[serde(deserialize_with = "limit")]
    pub max_select: Option<Option<usize>>,
    #[serde(deserialize_with = "limit")]
    pub min_select: Option<Option<usize>>,
    pub select_links: Option<bool>,
    pub follow_links: Option<bool>,
    pub auto_close: Option<bool>,
    pub auto_close_max: Option<bool>,
    #[serde(deserialize_with = "tri_state")]
    pub auto_close_link: Option<Option<bool>>,
    pub close_reset: Option<bool>,
    pub auto_toggle: Option<bool>,
    #[serde(deserialize_with = "tri_state")]
    pub auto_toggle_link: Option<Option<bool>>,
    pub auto_toggle_html: Option<bool>,
    pub auto_title: Option<bool>,
    pub toggle_text: Option<String>,
    pub title_text: Option<String>,
    pub close_text: Option<String>,
    pub back_text: Option<String>,
}

/// `true`/`false`, or `"auto"`/null to leave the choice to the widget
fn tri_state<'de, D>(deserializer: D) -> Result<Option<Option<bool>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Flag(bool),
        Word(String),
        Null(()),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Flag(flag) => Ok(Some(Some(flag))),
        Raw::Word(word) if word == "auto" => Ok(Some(None)),
        Raw::Word(word) => Err(serde::de::Error::custom(format!(
            "expected true, false or \"auto\", found \"{}\"",
            word
        ))),
        Raw::Null(()) => Ok(Some(None)),
    }
}

/// A number, or `false`/null for "no limit"
fn limit<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<T> {
        Value(T),
        Flag(bool),
        Null(()),
    }

    match Raw::<T>::deserialize(deserializer)? {
        Raw::Value(value) => Ok(Some(Some(value))),
        Raw::Flag(false) | Raw::Null(()) => Ok(Some(None)),
        Raw::Flag(true) => Err(serde::de::Error::custom("expected a number or false")),
    }
}
