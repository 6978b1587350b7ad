//! Inspect command handler

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;

use dropmenu::presentation::output::{inspect_json, print_warnings, write_json};
use dropmenu::presentation::{create_event_sink, prepare_instance, ColorWhen, EventStream};
use dropmenu::ui::terminal::detect_capabilities;
use dropmenu::ui::theme::Glyphs;
use dropmenu::ui::widgets::dropdown::render_tree;

use super::use_color;

pub fn cmd_inspect(
    source: &Path,
    json: bool,
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
    let dropdown = builder.build();

    let mut stdout = io::stdout().lock();
    if json {
        write_json(&mut stdout, &inspect_json(&dropdown))?;
    } else {
        writeln!(stdout, "{}", render_tree(&dropdown, Glyphs::new(caps.supports_unicode)))?;
    }
    Ok(())
}
