//! Show command handler

use std::io;
use std::path::Path;

use anyhow::{bail, Result};

use dropmenu::application::Dispatcher;
use dropmenu::infrastructure::ScheduledAnimator;
use dropmenu::presentation::output::{print_summary, print_warnings};
use dropmenu::presentation::{
    create_event_sink, prepare_instance, terminal_defaults, ColorWhen, EventStream, OutputFormat,
};
use dropmenu::ui::terminal::detect_capabilities;
use dropmenu::ui::widgets::dropdown::{run_interactive, TerminalSurface};

use super::use_color;

pub fn cmd_show(
    source: &Path,
    uid: Option<String>,
    config: Option<&Path>,
    events: bool,
    color: Option<ColorWhen>,
) -> Result<()> {
    let caps = detect_capabilities();
    if !caps.is_interactive() {
        bail!("`show` needs an interactive terminal; use `query` or `inspect` instead");
    }
    let color = use_color(color, &caps);

    let host = terminal_defaults();
    let prepared = prepare_instance(config, source, Some(&host))?;
    print_warnings(&prepared.warnings, color);

    let animator = ScheduledAnimator::new();
    let surface = TerminalSurface::new(caps.width, caps.height);
    let mut builder = prepared
        .builder
        .animator(animator.clone())
        .surface(surface.clone());
    if let Some(uid) = uid {
        builder = builder.uid(uid);
    }
    if events {
        // stdout belongs to the screen while the session runs
        builder = builder.sink(create_event_sink(EventStream::Stderr));
    }

    let mut dispatcher = Dispatcher::new();
    let uid = dispatcher.register(builder.build());
    tracing::info!(uid = %uid, source = %source.display(), "interactive session started");

    let caps = dropmenu::ui::terminal::TerminalCapabilities {
        supports_color: color,
        ..caps
    };
    let outcome = run_interactive(&mut dispatcher, &uid, &animator, &surface, caps)?;
    dispatcher.unregister(&uid);

    print_summary(&mut io::stdout().lock(), &outcome, OutputFormat::Text)?;
    Ok(())
}
