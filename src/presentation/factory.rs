//! Instance Factory
//!
//! Wires a source document, the option layers and an event sink into a
//! `DropdownBuilder`. This is the dependency injection point for the binary.

use std::io;
use std::path::Path;
use std::sync::Arc;

use crate::application::DropdownBuilder;
use crate::config::{self, ConfigWarning, OptionsPatch};
use crate::domain::ports::DropdownEventSink;
use crate::error::DropmenuResult;
use crate::infrastructure::{JsonEventSink, SourceDocument};

/// Where `--events` notifications go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStream {
    Stdout,
    /// Used while stdout carries the interactive screen
    Stderr,
}

/// A builder ready for collaborators, plus everything worth telling the user
pub struct PreparedInstance {
    pub builder: DropdownBuilder,
    pub warnings: Vec<ConfigWarning>,
}

/// Options a character-grid host needs before any user layer.
///
/// The widget default margin is measured in pixels; a terminal counts rows.
pub fn terminal_defaults() -> OptionsPatch {
    OptionsPatch {
        margin: Some(1.0),
        ..OptionsPatch::default()
    }
}

/// Load the user options and `source`, and settle options in order:
/// `host` defaults, then the user file, then the source's own table.
pub fn prepare_instance(
    config: Option<&Path>,
    source: &Path,
    host: Option<&OptionsPatch>,
) -> DropmenuResult<PreparedInstance> {
    let (user, mut warnings) = config::load_user_options(config)?;
    let (document, source_warnings) = SourceDocument::load(source)?;
    warnings.extend(source_warnings);

    let population = document.populate(source)?;
    let builder = population.into_builder(host.into_iter().chain([&user]));

    Ok(PreparedInstance { builder, warnings })
}

/// NDJSON sink for `--events`
pub fn create_event_sink(stream: EventStream) -> Arc<dyn DropdownEventSink> {
    match stream {
        EventStream::Stdout => Arc::new(JsonEventSink::stdout()),
        EventStream::Stderr => Arc::new(JsonEventSink::with_writer(io::stderr())),
    }
}
