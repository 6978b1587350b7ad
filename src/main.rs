//! Dropmenu CLI - multi-level dropdown menus in the terminal
//!
//! Usage: dropmenu <COMMAND>
//!
//! Commands:
//!   show     Open a source document as an interactive dropdown
//!   query    Run one command by name and print the JSON result
//!   inspect  Print the menu tree

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dropmenu::presentation::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Show { source, uid } => {
            commands::show::cmd_show(&source, uid, config, cli.events, cli.color)
        }
        Commands::Query {
            source,
            command,
            args,
        } => commands::query::cmd_query(&source, &command, &args, config, cli.events, cli.color),
        Commands::Inspect { source, json } => {
            commands::inspect::cmd_inspect(&source, json, config, cli.events, cli.color)
        }
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
