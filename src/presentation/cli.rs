//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--config, --events, --color, --verbose) are inherited by all subcommands
//! - Query arguments are JSON; anything that does not parse is taken as a string

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Dropmenu - multi-level dropdown menus in the terminal
#[derive(Parser, Debug)]
#[command(name = "dropmenu")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// User options file (defaults to $DROPMENU_CONFIG, then the config dir)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Stream widget notifications as NDJSON
    #[arg(long, global = true)]
    pub events: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open a source document as an interactive dropdown
    Show {
        /// Source document (TOML, or JSON by extension)
        source: PathBuf,

        /// Instance id (generated when omitted)
        #[arg(long)]
        uid: Option<String>,
    },

    /// Run one command by name against a fresh instance and print the result
    Query {
        /// Source document (TOML, or JSON by extension)
        source: PathBuf,

        /// Command name (e.g. selectByValue, getItem, toggleText)
        command: String,

        /// Positional arguments, parsed as JSON when possible
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Print the menu tree built from a source document
    Inspect {
        /// Source document (TOML, or JSON by extension)
        source: PathBuf,

        /// Print the store as JSON instead of a tree
        #[arg(long)]
        json: bool,
    },
}

/// Read one query argument: JSON when it parses, a plain string otherwise.
///
/// `apple` becomes `"apple"`, `'["a","b"]'` an array and `true` a flag.
pub fn parse_query_arg(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
