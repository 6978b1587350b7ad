//! Collision Domain Service
//!
//! Decides whether a menu fits below or above its anchor and how far it has
//! to shrink. Pure arithmetic over host measurements.

use crate::domain::value_objects::{Collision, Measurements, Placement, Space};

/// Fit a menu of the measured size into the viewport.
///
/// `above` is the side the menu is currently shown on. With `enabled` off the
/// placement never changes and no clamping happens (outside mobile layouts).
pub fn compute_collision(m: &Measurements, above: bool, margin: f64, enabled: bool) -> Collision {
    let space = Space {
        top: m.offset.y - m.scrolled.y - margin,
        bottom: m.viewport.height + m.scrolled.y - m.offset.y - m.toggle_height - margin,
        left: m.offset.x - m.scrolled.x - margin,
        right: m.viewport.width + m.scrolled.x - m.offset.x - margin,
    };

    let required_height = m.menu.height + m.wrapper_diff.height;
    let mut placement = if above {
        Placement::Above
    } else {
        Placement::Below
    };
    let mut menu_height = m.menu.height;

    if m.mobile {
        if m.menu.height > m.wrapper.height {
            menu_height = m.wrapper.height - m.wrapper_diff.height;
        }
    } else if enabled {
        let mut available = 0.0;

        if above {
            if required_height > space.top {
                available = space.top;
                if space.bottom > space.top {
                    placement = Placement::Below;
                    available = space.bottom;
                }
            }
        } else if required_height > space.bottom {
            available = space.bottom;
            if space.top > space.bottom {
                placement = Placement::Above;
                available = space.top;
            }
        }

        if available != 0.0 && required_height > available {
            menu_height = available - m.wrapper_diff.height;
        }
    }

    Collision {
        placement,
        space,
        required_height,
        menu_height,
        list_height: menu_height - (m.menu.height - m.list.height),
    }
}

/// Scroll position that brings a selected item into view.
///
/// `item_top` is the item offset within the visible list, `list_scroll_top`
/// the list's current scroll distance.
pub fn scroll_offset(item_top: f64, list_scroll_top: f64, collision: &Collision) -> f64 {
    let mut offset = item_top;
    if offset < 0.0 || offset > collision.list_height {
        offset += list_scroll_top;
    }
    offset - (collision.menu_height - collision.list_height)
}
