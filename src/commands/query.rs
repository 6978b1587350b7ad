//! Query command handler

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;

use dropmenu::application::Dispatcher;
use dropmenu::presentation::output::print_warnings;
use dropmenu::presentation::{
    create_event_sink, parse_query_arg, prepare_instance, ColorWhen, EventStream,
};
use dropmenu::ui::terminal::detect_capabilities;

use super::use_color;

pub fn cmd_query(
    source: &Path,
    command: &str,
    args: &[String],
    config: Option<&Path>,
    events: bool,
    color: Option<ColorWhen>,
) -> Result<()> {
    let caps = detect_capabilities();
    let prepared = prepare_instance(config, source, None)?;
    print_warnings(&prepared.warnings, use_color(color, &caps));

    let mut builder = prepared.builder;
    if events {
        builder = builder.sink(create_event_sink(EventStream::Stdout));
    }

    let mut dispatcher = Dispatcher::new();
    let uid = dispatcher.register(builder.build());

    let args: Vec<_> = args.iter().map(|arg| parse_query_arg(arg)).collect();
    tracing::debug!(uid = %uid, command, args = args.len(), "running query");
    let result = dispatcher.query(&uid, command, &args)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", result)?;
    Ok(())
}
