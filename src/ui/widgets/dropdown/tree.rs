//! Whole-tree rendering for `dropmenu inspect`.

use crate::application::Dropdown;
use crate::domain::entities::{Item, MenuId};
use crate::ui::theme::Glyphs;

/// Render every menu reachable from main, submenus indented under the
/// item that opens them.
pub fn render_tree(dropdown: &Dropdown, glyphs: Glyphs) -> String {
    let mut lines = Vec::new();
    if let Some(main) = dropdown.main_menu() {
        if let Some(menu) = dropdown.store().menu(main) {
            lines.push(format!("{} ({})", menu.title, menu.id));
        }
        render_menu(dropdown, main, 1, glyphs, &mut lines);
    }
    lines.join("\n")
}

fn render_menu(
    dropdown: &Dropdown,
    menu: &MenuId,
    depth: usize,
    glyphs: Glyphs,
    lines: &mut Vec<String>,
) {
    let Some(menu) = dropdown.store().menu(menu) else {
        return;
    };
    let indent = "  ".repeat(depth);

    for item in menu.items.iter().filter_map(|id| dropdown.store().item(id)) {
        if item.divider.is_some_and(|d| d.above()) {
            lines.push(format!("{indent}{}", glyphs.horizontal().repeat(8)));
        }
        if let Some(label) = &item.label {
            lines.push(format!("{indent}# {label}"));
        }
        lines.push(format!("{indent}{}", node_line(item, glyphs)));

        if let Some(submenu) = item.submenu() {
            render_menu(dropdown, submenu, depth + 1, glyphs, lines);
        }
        if item.divider.is_some_and(|d| d.below()) {
            lines.push(format!("{indent}{}", glyphs.horizontal().repeat(8)));
        }
    }
}

fn node_line(item: &Item, glyphs: Glyphs) -> String {
    let icon = match (item.selected, item.is_parent()) {
        (true, true) => glyphs.partial(),
        (true, false) => glyphs.selected(),
        (false, _) => glyphs.unselected(),
    };

    let mut line = format!("{icon} {}", item.text);
    if let Some(submenu) = item.submenu() {
        line.push_str(&format!(" {} {submenu}", glyphs.submenu()));
    } else if item.resolved_value() != item.text {
        line.push_str(&format!(" = {}", item.resolved_value()));
    }
    if let Some(url) = &item.url {
        line.push_str(&format!(" -> {url}"));
    }
    if !item.selectable {
        line.push_str(" (disabled)");
    }
    line
}
