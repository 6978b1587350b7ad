//! Keyboard input handling and interactive loop.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::event::KeyEvent;
use serde::Serialize;

use crate::application::{Dispatcher, Key};
use crate::domain::value_objects::{InstanceId, SelectionValue};
use crate::infrastructure::ScheduledAnimator;
use crate::ui::terminal::TerminalCapabilities;
use crate::ui::theme::Glyphs;

use super::render::render;
use super::surface::TerminalSurface;

/// What a terminal key asks the host to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    /// Feed the widget's keyboard state machine
    Key(Key),
    /// Select the focused item
    Select,
    Quit,
}

/// Final state of an interactive session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionOutcome {
    pub value: SelectionValue,
    pub toggle_text: String,
    /// Links the widget followed
    pub navigations: Vec<String>,
}

/// Convert a keyboard event to a HostAction
pub fn key_to_action(key: KeyEvent) -> Option<HostAction> {
    use crossterm::event::KeyCode;

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(HostAction::Key(Key::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(HostAction::Key(Key::Down)),
        KeyCode::Right | KeyCode::Char('l') => Some(HostAction::Key(Key::Right)),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => {
            Some(HostAction::Key(Key::Left))
        }
        KeyCode::Enter => Some(HostAction::Key(Key::Enter)),
        KeyCode::Esc => Some(HostAction::Key(Key::Escape)),
        KeyCode::Tab => Some(HostAction::Key(Key::Tab)),
        KeyCode::Char(' ') => Some(HostAction::Select),
        KeyCode::Char('q') => Some(HostAction::Quit),
        _ => None,
    }
}

fn render_help_bar() -> &'static str {
    "[↑↓] Move  [→/Enter] Open  [←] Back  [Space] Select  [Esc] Close  [q] Quit"
}

/// Run one registered instance interactively until `q`.
///
/// The loop wakes for terminal events and for the earliest transition or
/// resize deadline, whichever comes first.
pub fn run_interactive(
    dispatcher: &mut Dispatcher,
    uid: &InstanceId,
    animator: &ScheduledAnimator,
    surface: &TerminalSurface,
    caps: TerminalCapabilities,
) -> io::Result<SessionOutcome> {
    use crossterm::{
        cursor,
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{self, ClearType},
    };

    let glyphs = Glyphs::new(caps.supports_unicode);
    let idle = Duration::from_millis(250);

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();

    let render_ui = |stdout: &mut io::Stdout, dispatcher: &Dispatcher| -> io::Result<()> {
        execute!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        if let Some(dropdown) = dispatcher.get(uid) {
            for line in render(dropdown, surface, glyphs, caps.supports_color).lines() {
                write!(stdout, "{}\r\n", line)?;
            }
        }
        write!(stdout, "\r\n{}\r\n", render_help_bar())?;
        stdout.flush()
    };

    execute!(stdout, cursor::Hide)?;
    if let Some(dropdown) = dispatcher.get_mut(uid) {
        dropdown.set_toggle_focus(true);
    }
    render_ui(&mut stdout, dispatcher)?;

    loop {
        let now = Instant::now();
        let deadline = [animator.next_deadline(), dispatcher.next_deadline()]
            .into_iter()
            .flatten()
            .min();
        let timeout = deadline.map_or(idle, |at| at.saturating_duration_since(now));

        let mut dirty = false;
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key_to_action(key) {
                    Some(HostAction::Quit) => break,
                    Some(HostAction::Select) => {
                        if let Some(dropdown) = dispatcher.get_mut(uid) {
                            if let Some(focused) = dropdown.focused().cloned() {
                                dropdown.select(focused);
                            }
                        }
                        dirty = true;
                    }
                    Some(HostAction::Key(key)) => {
                        if let Some(dropdown) = dispatcher.get_mut(uid) {
                            // The toggle is the only focusable control
                            if !dropdown.is_open() {
                                dropdown.set_toggle_focus(true);
                            }
                        }
                        dirty |= dispatcher.key(key);
                    }
                    None => {}
                },
                Event::Resize(width, height) => {
                    surface.set_size(width, height);
                    dispatcher.window_resized(Instant::now());
                    dirty = true;
                }
                _ => {}
            }
        }

        let now = Instant::now();
        if let Some(dropdown) = dispatcher.get_mut(uid) {
            for handle in animator.due(now) {
                dirty |= dropdown.complete_transition(handle);
            }
        }
        dirty |= !dispatcher.poll(now).is_empty();

        if dirty {
            render_ui(&mut stdout, dispatcher)?;
        }
    }

    execute!(
        stdout,
        cursor::Show,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    terminal::disable_raw_mode()?;

    let value = dispatcher
        .get(uid)
        .map(|dropdown| dropdown.value())
        .unwrap_or(SelectionValue::Single(None));
    let toggle_text = dispatcher
        .get(uid)
        .map(|dropdown| dropdown.toggle_label().to_string())
        .unwrap_or_default();

    Ok(SessionOutcome {
        value,
        toggle_text,
        navigations: surface.navigations(),
    })
}
