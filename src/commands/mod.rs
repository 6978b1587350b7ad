//! Command handlers for the `dropmenu` binary

pub mod inspect;
pub mod query;
pub mod show;

use dropmenu::presentation::ColorWhen;
use dropmenu::ui::terminal::TerminalCapabilities;

/// Resolve `--color` against what the terminal supports
pub fn use_color(color: Option<ColorWhen>, caps: &TerminalCapabilities) -> bool {
    match color {
        Some(ColorWhen::Always) => true,
        Some(ColorWhen::Never) => false,
        Some(ColorWhen::Auto) | None => caps.supports_color,
    }
}
