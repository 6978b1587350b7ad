//! Output Rendering
//!
//! Plain text and JSON printing shared by the commands. Warnings and
//! diagnostics go to stderr so stdout stays machine-readable.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::{json, Value};

use crate::application::Dropdown;
use crate::config::ConfigWarning;
use crate::ui::theme::colors;
use crate::ui::widgets::dropdown::SessionOutcome;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

/// Print config warnings to stderr
pub fn print_warnings(warnings: &[ConfigWarning], color: bool) {
    let mut stderr = io::stderr().lock();
    for warning in warnings {
        let _ = writeln!(stderr, "{}", format_warning(warning, color));
    }
}

fn format_warning(warning: &ConfigWarning, color: bool) -> String {
    use crossterm::style::Stylize;

    let label = if color {
        "warning:".with(colors::WARNING).to_string()
    } else {
        "warning:".to_string()
    };
    format!("{} {}", label, warning)
}

/// Pretty JSON, one document per call
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    writeln!(out, "{}", text)
}

/// Snapshot of an instance for `inspect --json`
pub fn inspect_json(dropdown: &Dropdown) -> Value {
    json!({
        "uid": dropdown.uid().to_string(),
        "multi": dropdown.is_multi(),
        "main_menu": dropdown.main_menu(),
        "toggle_text": dropdown.toggle_label(),
        "value": dropdown.value(),
        "menus": dropdown.store().menus().collect::<Vec<_>>(),
        "items": dropdown.store().items().collect::<Vec<_>>(),
    })
}

/// Final state of an interactive session
pub fn print_summary<W: Write>(out: &mut W, summary: &SessionOutcome, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, summary),
        OutputFormat::Text => {
            match summary.value.as_vec().as_slice() {
                [] => writeln!(out, "(nothing selected)")?,
                values => writeln!(out, "{}", values.join(", "))?,
            }
            for url in &summary.navigations {
                writeln!(out, "-> {}", url)?;
            }
            Ok(())
        }
    }
}
