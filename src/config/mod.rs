//! Options for dropmenu instances
//!
//! Options resolve through an explicit precedence chain:
//! 1. Per-element overrides (a source document's `[options]` table)
//! 2. User options file (`--config`, `$DROPMENU_CONFIG`, or
//!    `~/.config/dropmenu/options.toml`)
//! 3. Built-in defaults

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{
    load_user_options, load_with_warnings, parse_with_warnings, user_options_path, CONFIG_ENV,
};
pub use types::{Options, OptionsPatch};
