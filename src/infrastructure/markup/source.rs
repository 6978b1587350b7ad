//! Source documents

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::application::DropdownBuilder;
use crate::config::{parse_with_warnings, ConfigWarning, Options, OptionsPatch};
use crate::domain::entities::{ItemSpec, MenuSpec};
use crate::error::{DropmenuError, DropmenuResult};

use super::{ListElement, SelectElement};

/// A file holding one markup root and its option overrides.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SourceDocument {
    /// Per-element overrides, layered over the user options
    pub options: OptionsPatch,
    /// Main menu title
    pub title: Option<String>,
    pub select: Option<SelectElement>,
    pub list: Option<ListElement>,
}

/// What a source document contributes to a new instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    pub items: Vec<ItemSpec>,
    pub options: OptionsPatch,
    pub title: Option<String>,
    /// Built from a native control that mirrors the selection
    pub native: bool,
    /// The native control allows several values
    pub multiple: bool,
}

impl SourceDocument {
    /// Read a TOML (or `.json`) source, collecting unknown-key warnings
    pub fn load(path: &Path) -> DropmenuResult<(Self, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path)?;
        Self::parse(path, &content)
    }

    pub fn parse(path: &Path, content: &str) -> DropmenuResult<(Self, Vec<ConfigWarning>)> {
        parse_with_warnings(path, content)
    }

    /// Turn the markup root into item specifications.
    ///
    /// Exactly one of `select` and `list` must be present.
    pub fn populate(self, path: &Path) -> DropmenuResult<Population> {
        let invalid = |reason: &str| DropmenuError::InvalidSource {
            file: path.to_path_buf(),
            reason: reason.to_string(),
        };

        let (items, native, multiple) = match (&self.select, &self.list) {
            (Some(select), None) => (select.items(), true, select.multiple),
            (None, Some(list)) => (list.items(), false, false),
            (Some(_), Some(_)) => return Err(invalid("both `select` and `list` are present")),
            (None, None) => return Err(invalid("expected a `select` or a `list` table")),
        };

        tracing::debug!(
            file = %path.display(),
            items = items.len(),
            native,
            multiple,
            "source populated"
        );

        Ok(Population {
            items,
            options: self.options,
            title: self.title,
            native,
            multiple,
        })
    }
}

impl Population {
    /// Settle options from `layers` (lowest precedence first) topped by
    /// this source's overrides and start a builder carrying the items.
    pub fn into_builder<'a>(self, layers: impl IntoIterator<Item = &'a OptionsPatch>) -> DropdownBuilder {
        let mut stack: Vec<&OptionsPatch> = layers.into_iter().collect();
        stack.push(&self.options);
        let options = Options::layered(stack);
        let main = MenuSpec {
            title: self.title,
            ..MenuSpec::default()
        };

        let builder = DropdownBuilder::new(options).main_menu(main).items(self.items);
        if self.native {
            builder.native_control(self.multiple)
        } else {
            builder
        }
    }
}
