//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Wiring instances with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Builds instances from a source document and option layers
//! - `output` - Warning, summary and JSON printing
//!
//! ## Usage
//!
//! ```ignore
//! use dropmenu::presentation::factory;
//!
//! let prepared = factory::prepare_instance(None, &source, None)?;
//! let dropdown = prepared.builder.build();
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{parse_query_arg, Cli, ColorWhen, Commands};
pub use factory::{create_event_sink, prepare_instance, terminal_defaults, EventStream, PreparedInstance};
pub use output::OutputFormat;
