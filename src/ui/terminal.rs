//! Terminal capability detection

use is_terminal::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub width: u16,
    pub height: u16,
}

impl TerminalCapabilities {
    /// Interactive sessions need a terminal on both ends
    pub fn is_interactive(&self) -> bool {
        self.is_tty
    }
}

/// Smallest grid the dropdown host will lay out in
pub const MIN_SIZE: (u16, u16) = (20, 6);

pub fn detect_capabilities() -> TerminalCapabilities {
    probe(
        |key| std::env::var(key).ok(),
        std::io::stdout().is_terminal() && std::io::stdin().is_terminal(),
        crossterm::terminal::size().ok(),
    )
}

fn probe(
    env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
    size: Option<(u16, u16)>,
) -> TerminalCapabilities {
    let dumb = env("TERM").is_some_and(|term| term.eq_ignore_ascii_case("dumb"));
    let color = is_tty && !dumb && env("NO_COLOR").is_none();

    let (width, height) = size.unwrap_or((80, 24));
    TerminalCapabilities {
        is_tty,
        supports_color: color,
        supports_unicode: !dumb && locale_is_utf8(&env),
        width: width.max(MIN_SIZE.0),
        height: height.max(MIN_SIZE.1),
    }
}

/// First locale variable that is set decides; unset means UTF-8
fn locale_is_utf8(env: &impl Fn(&str) -> Option<String>) -> bool {
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .into_iter()
        .find_map(|key| env(key).filter(|value| !value.is_empty()))
        .map(|value| !(value.eq_ignore_ascii_case("c") || value.eq_ignore_ascii_case("posix")))
        .unwrap_or(true)
}
