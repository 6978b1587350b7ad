//! Reset to the main menu

use crate::domain::ports::DropdownEvent;
use crate::domain::value_objects::{AnimTarget, Dimension, Slide, Style};

use super::Dropdown;

impl Dropdown {
    /// Snap back to the main menu, optionally clearing the selection.
    ///
    /// In-flight menu transitions are dropped; completing their handles later
    /// is a no-op. The widget phase is left alone.
    pub fn reset(&mut self, clear: bool) {
        let Some(target) = self.store.main_menu().cloned() else {
            return;
        };
        let current = self.nav.current.clone().unwrap_or_else(|| target.clone());

        self.emit(DropdownEvent::ResetBefore {
            clear,
            target: target.clone(),
            current: current.clone(),
        });

        if clear {
            self.deselect_all();
        }

        self.pending.retain(|_, pending| !pending.is_menu());
        self.nav.menu_transition = None;

        for menu in self.store.menus_mut() {
            if menu.id == target {
                menu.open = true;
                menu.slide = Slide::Rest;
            } else {
                menu.open = false;
                if menu.id == current {
                    menu.slide = Slide::Left;
                    menu.list_height = None;
                }
            }
        }

        self.animator.snap(
            &AnimTarget::Wrapper,
            &Style::default().y(0.0).height(Dimension::Auto),
        );
        if current != target {
            self.animator
                .snap(&AnimTarget::Menu(current.clone()), &Style::default().x(Slide::Left));
            self.animator.snap(
                &AnimTarget::List(current.clone()),
                &Style::default().height(Dimension::Auto),
            );
        }
        self.animator
            .snap(&AnimTarget::Menu(target.clone()), &Style::default().x(Slide::Rest));

        self.nav.current = Some(target.clone());
        self.nav.wrapper_height = None;

        tracing::trace!(uid = %self.uid, clear, "reset");
        self.emit(DropdownEvent::Reset {
            clear,
            target,
            current,
        });
    }
}
