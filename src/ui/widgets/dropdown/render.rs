//! Rendering of the toggle line and the open menu panel.

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::application::{Dropdown, Phase};
use crate::domain::entities::{Item, Menu};
use crate::ui::theme::{colors, Glyphs};

use super::surface::TerminalSurface;

/// One panel row before padding and styling
struct Row {
    text: String,
    style: RowStyle,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum RowStyle {
    Plain,
    Title,
    Focused,
    Selected,
    Muted,
}

/// Render the widget as the terminal shows it.
///
/// The panel is drawn while the widget is opening or open, above the toggle
/// line when the collision pass placed it there.
pub fn render(dropdown: &Dropdown, surface: &TerminalSurface, glyphs: Glyphs, color: bool) -> String {
    let shown = matches!(dropdown.phase(), Phase::Opening | Phase::Open);
    let toggle = format!("{} {}", dropdown.toggle_label(), glyphs.toggle(shown));

    let panel = match dropdown.current_menu().and_then(|id| dropdown.store().menu(id)) {
        Some(menu) if shown => render_panel(dropdown, menu, surface, glyphs, color),
        _ => Vec::new(),
    };

    let mut lines = Vec::with_capacity(panel.len() + 1);
    if dropdown.is_above() {
        lines.extend(panel);
        lines.push(toggle);
    } else {
        lines.push(toggle);
        lines.extend(panel);
    }
    lines.join("\n")
}

fn render_panel(
    dropdown: &Dropdown,
    menu: &Menu,
    surface: &TerminalSurface,
    glyphs: Glyphs,
    color: bool,
) -> Vec<String> {
    let items: Vec<&Item> = menu
        .items
        .iter()
        .filter_map(|id| dropdown.store().item(id))
        .collect();

    let visible = menu
        .list_height
        .map(|height| height.max(0.0).floor() as usize)
        .unwrap_or(items.len())
        .min(items.len());
    let start = window_start(dropdown, &items, surface.scroll_top(&menu.id), visible);

    let title = if menu.is_root() {
        menu.title.clone()
    } else {
        format!("{} {}", glyphs.back(), menu.title)
    };
    let mut rows = vec![Row {
        text: title,
        style: RowStyle::Title,
    }];
    rows.extend(
        items[start..start + visible]
            .iter()
            .map(|item| item_row(item, glyphs)),
    );

    let inner = rows.iter().map(|r| r.text.width()).max().unwrap_or(0);
    let horizontal = glyphs.horizontal();
    let vertical = glyphs.vertical();
    let (top_left, top_right) = glyphs.top();
    let (bottom_left, bottom_right) = glyphs.bottom();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format!("{top_left}{}{top_right}", horizontal.repeat(inner + 2)));
    for row in rows {
        let padded = format!("{}{}", row.text, " ".repeat(inner - row.text.width()));
        lines.push(format!("{vertical} {} {vertical}", paint(padded, row.style, color)));
    }

    let hidden = start + visible < items.len();
    let bottom = if hidden {
        let more = glyphs.more();
        let rest = (inner + 2).saturating_sub(more.width() + 3);
        format!("{bottom_left}{horizontal} {more} {}{bottom_right}", horizontal.repeat(rest))
    } else {
        format!("{bottom_left}{}{bottom_right}", horizontal.repeat(inner + 2))
    };
    lines.push(bottom);
    lines
}

/// First visible item: the host's scroll position, moved just enough to
/// keep the focused item in view
fn window_start(dropdown: &Dropdown, items: &[&Item], scroll: usize, visible: usize) -> usize {
    let mut start = scroll.min(items.len() - visible);
    let focused = dropdown
        .focused()
        .and_then(|id| items.iter().position(|item| &item.id == id));
    if let Some(index) = focused {
        if index < start {
            start = index;
        } else if visible > 0 && index >= start + visible {
            start = index + 1 - visible;
        }
    }
    start
}

fn item_row(item: &Item, glyphs: Glyphs) -> Row {
    let cursor = if item.focused { "> " } else { "  " };
    let icon = if !item.selectable && !item.is_parent() {
        " ".repeat(glyphs.unselected().width())
    } else if item.selected && item.is_parent() {
        glyphs.partial().to_string()
    } else if item.selected {
        glyphs.selected().to_string()
    } else {
        glyphs.unselected().to_string()
    };

    let mut text = format!("{cursor}{icon} {}", item.text);
    if item.submenu().is_some() {
        text.push(' ');
        text.push_str(glyphs.submenu());
    }
    if let Some(label) = &item.label {
        text.push_str(&format!("  [{label}]"));
    }

    let style = if item.focused {
        RowStyle::Focused
    } else if item.selected {
        RowStyle::Selected
    } else if !item.selectable {
        RowStyle::Muted
    } else {
        RowStyle::Plain
    };
    Row { text, style }
}

fn paint(text: String, style: RowStyle, color: bool) -> String {
    if !color {
        return text;
    }
    match style {
        RowStyle::Plain => text,
        RowStyle::Title => text.bold().to_string(),
        RowStyle::Focused => text.with(colors::INFO).to_string(),
        RowStyle::Selected => text.with(colors::SUCCESS).to_string(),
        RowStyle::Muted => text.with(colors::DIM).to_string(),
    }
}
