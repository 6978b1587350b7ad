//! Colors and glyphs for the terminal host.
//!
//! Every icon and border the host draws comes from here, in a Unicode and
//! an ASCII variant.

use crossterm::style::Color;

/// Semantic colors: selection, focus, warnings and muted rows
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    // Selection states.
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = "○";
    /// Parent with a selected descendant
    pub const PARTIAL: &str = "◐";

    // Menu navigation.
    pub const SUBMENU: &str = "▶";
    pub const BACK: &str = "◀";
    pub const OPEN: &str = "▼";
    pub const CLOSED: &str = "▲";
    pub const MORE: &str = "⋯";
}

pub mod icons_ascii {
    pub const SELECTED: &str = "[x]";
    pub const UNSELECTED: &str = "[ ]";
    pub const PARTIAL: &str = "[-]";

    pub const SUBMENU: &str = ">";
    pub const BACK: &str = "<";
    pub const OPEN: &str = "v";
    pub const CLOSED: &str = "^";
    pub const MORE: &str = "...";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}

/// Icon set picked once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    unicode: bool,
}

impl Glyphs {
    pub fn new(unicode: bool) -> Self {
        Self { unicode }
    }

    fn pick(&self, unicode: &'static str, ascii: &'static str) -> &'static str {
        if self.unicode {
            unicode
        } else {
            ascii
        }
    }

    pub fn selected(&self) -> &'static str {
        self.pick(icons::SELECTED, icons_ascii::SELECTED)
    }

    pub fn unselected(&self) -> &'static str {
        self.pick(icons::UNSELECTED, icons_ascii::UNSELECTED)
    }

    pub fn partial(&self) -> &'static str {
        self.pick(icons::PARTIAL, icons_ascii::PARTIAL)
    }

    pub fn submenu(&self) -> &'static str {
        self.pick(icons::SUBMENU, icons_ascii::SUBMENU)
    }

    pub fn back(&self) -> &'static str {
        self.pick(icons::BACK, icons_ascii::BACK)
    }

    pub fn toggle(&self, open: bool) -> &'static str {
        if open {
            self.pick(icons::CLOSED, icons_ascii::CLOSED)
        } else {
            self.pick(icons::OPEN, icons_ascii::OPEN)
        }
    }

    pub fn more(&self) -> &'static str {
        self.pick(icons::MORE, icons_ascii::MORE)
    }

    pub fn horizontal(&self) -> &'static str {
        self.pick(borders::HORIZONTAL, borders_ascii::HORIZONTAL)
    }

    pub fn vertical(&self) -> &'static str {
        self.pick(borders::VERTICAL, borders_ascii::VERTICAL)
    }

    /// Top corners, left then right
    pub fn top(&self) -> (&'static str, &'static str) {
        (
            self.pick(borders::TOP_LEFT, borders_ascii::TOP_LEFT),
            self.pick(borders::TOP_RIGHT, borders_ascii::TOP_RIGHT),
        )
    }

    pub fn bottom(&self) -> (&'static str, &'static str) {
        (
            self.pick(borders::BOTTOM_LEFT, borders_ascii::BOTTOM_LEFT),
            self.pick(borders::BOTTOM_RIGHT, borders_ascii::BOTTOM_RIGHT),
        )
    }
}
