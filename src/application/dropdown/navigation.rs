//! Navigation controller
//!
//! Open/close of the widget and of individual menus, and resizing. Every
//! operation sets its re-entrancy marker before starting motion; a call that
//! conflicts with a marker still set is rejected and returns `false`/`None`.

use crate::domain::entities::MenuId;
use crate::domain::ports::DropdownEvent;
use crate::domain::services::{compute_collision, scroll_offset};
use crate::domain::value_objects::{
    AnimTarget, Dimension, MenuRef, Placement, Resize, Slide, Style,
};

use super::transition::Pending;
use super::{Dropdown, MenuTransition, Motion, Phase};

impl Dropdown {
    /// Open the widget. Only a settled closed widget can open.
    pub fn open(&mut self) -> bool {
        if self.nav.phase != Phase::Closed {
            tracing::debug!(uid = %self.uid, phase = ?self.nav.phase, "open rejected");
            return false;
        }
        let Some(current) = self.resolve_menu(&MenuRef::Current) else {
            return false;
        };

        self.nav.phase = Phase::Opening;
        self.emit(DropdownEvent::OpenBefore);

        if let Some(resize) = self.resize_menu(&current, Motion::Instant) {
            if self.options.collision {
                self.nav.above = resize.collision.placement == Placement::Above;
            }
            if self.options.scroll_selected {
                self.scroll_selected(&current, &resize);
            }
        }

        let offset = self.nav.toggle_height / 2.0;
        let start = if self.nav.above { offset } else { -offset };
        let transition = self.transition(Motion::Animated).track(
            AnimTarget::Wrapper,
            Style::default().visible(true).opacity(0.0).y(start),
            Style::default().opacity(1.0).y(0.0),
        );
        self.begin(Pending::Open, transition);
        true
    }

    /// Close the widget. Only a settled open widget can close.
    pub fn close(&mut self) -> bool {
        if self.nav.phase != Phase::Open {
            tracing::debug!(uid = %self.uid, phase = ?self.nav.phase, "close rejected");
            return false;
        }

        self.nav.phase = Phase::Closing;
        self.clear_focus();
        self.emit(DropdownEvent::CloseBefore);

        let offset = self.nav.toggle_height / 2.0;
        let end = if self.nav.above { offset } else { -offset };
        let transition = self.transition(Motion::Animated).track(
            AnimTarget::Wrapper,
            Style::default().visible(true).opacity(1.0).y(0.0),
            Style::default().opacity(0.0).y(end),
        );
        self.begin(Pending::Close, transition);
        true
    }

    /// Open when closed, close when open
    pub fn toggle(&mut self) -> bool {
        match self.nav.phase {
            Phase::Closed => self.open(),
            Phase::Open => self.close(),
            Phase::Opening | Phase::Closing => false,
        }
    }

    /// Slide `menu` in and the current menu out
    pub fn open_menu(&mut self, menu: impl Into<MenuRef>) -> bool {
        self.open_menu_with(menu.into(), Motion::Animated)
    }

    pub fn open_menu_with(&mut self, menu: MenuRef, motion: Motion) -> bool {
        if let Some(active) = &self.nav.menu_transition {
            tracing::debug!(uid = %self.uid, active = ?active, "open menu rejected");
            return false;
        }
        if self.nav.phase == Phase::Opening {
            tracing::debug!(uid = %self.uid, "open menu rejected while the widget opens");
            return false;
        }
        let Some(target) = self.resolve_menu(&menu) else {
            return false;
        };
        let current = self.nav.current.clone();
        if current.as_ref() == Some(&target) {
            return false;
        }

        self.nav.menu_transition = Some(MenuTransition::Opening(target.clone()));
        self.emit(DropdownEvent::OpenMenuBefore {
            menu: target.clone(),
            current: current.clone(),
        });

        if let Some(resize) = self.resize_menu(&target, motion) {
            if self.options.scroll_selected {
                self.scroll_selected(&target, &resize);
            }
        }

        let mut transition = self.transition(motion).track(
            AnimTarget::Menu(target.clone()),
            Style::default().visible(true).x(Slide::Right),
            Style::default().x(Slide::Rest),
        );
        if let Some(current) = &current {
            transition = transition.track(
                AnimTarget::Menu(current.clone()),
                Style::default().x(Slide::Rest),
                Style::default().x(Slide::Left),
            );
        }

        self.begin(
            Pending::OpenMenu {
                menu: target,
                current,
            },
            transition,
        );
        true
    }

    /// Slide `menu` out and its parent menu back in.
    ///
    /// A menu without a parent closes the whole widget instead.
    pub fn close_menu(&mut self, menu: impl Into<MenuRef>) -> bool {
        self.close_menu_with(menu.into(), Motion::Animated)
    }

    pub fn close_menu_with(&mut self, menu: MenuRef, motion: Motion) -> bool {
        if let Some(active) = &self.nav.menu_transition {
            tracing::debug!(uid = %self.uid, active = ?active, "close menu rejected");
            return false;
        }
        if self.nav.phase == Phase::Closing {
            tracing::debug!(uid = %self.uid, "close menu rejected while the widget closes");
            return false;
        }
        let Some(menu) = self.resolve_menu(&menu) else {
            return false;
        };
        let Some(target) = self.parent_menu(&menu) else {
            return self.close();
        };
        if target == menu {
            return false;
        }

        self.nav.menu_transition = Some(MenuTransition::Closing(menu.clone()));
        self.emit(DropdownEvent::CloseMenuBefore {
            menu: menu.clone(),
            target: target.clone(),
        });

        self.resize_menu(&target, motion);

        let transition = self
            .transition(motion)
            .track(
                AnimTarget::Menu(target.clone()),
                Style::default().visible(true).x(Slide::Left),
                Style::default().x(Slide::Rest),
            )
            .track(
                AnimTarget::Menu(menu.clone()),
                Style::default().x(Slide::Rest),
                Style::default().x(Slide::Right),
            );
        self.begin(Pending::CloseMenu { menu, target }, transition);
        true
    }

    /// Menu the parent item of `menu` is rendered in
    fn parent_menu(&self, menu: &MenuId) -> Option<MenuId> {
        let parent = self.store.menu(menu)?.parent.as_ref()?;
        self.store.item(parent)?.menu.clone()
    }

    /// Measure `menu`, fit it into the viewport and animate the wrapper.
    ///
    /// Returns the layout decided, or `None` when a resize is in flight or
    /// the menu does not resolve.
    pub fn resize(&mut self, menu: impl Into<MenuRef>) -> Option<Resize> {
        let menu = self.resolve_menu(&menu.into())?;
        self.resize_menu(&menu, Motion::Animated)
    }

    pub(super) fn resize_menu(&mut self, menu: &MenuId, motion: Motion) -> Option<Resize> {
        if self.nav.resizing {
            tracing::debug!(uid = %self.uid, menu = %menu, "resize rejected");
            return None;
        }
        let record = self.store.menu(menu)?.clone();

        self.nav.resizing = true;
        self.emit(DropdownEvent::ResizeBefore { menu: menu.clone() });

        let wrapper_open = self.nav.phase != Phase::Closed;
        let measurements = self.surface.measure(&record, wrapper_open);
        let collision = compute_collision(
            &measurements,
            self.nav.above,
            self.options.margin,
            self.options.collision,
        );
        self.nav.toggle_height = measurements.toggle_height;

        if let Some(record) = self.store.menu_mut(menu) {
            record.list_height = Some(collision.list_height);
        }
        self.animator.snap(
            &AnimTarget::List(menu.clone()),
            &Style::default().height(Dimension::Px(collision.list_height)),
        );

        let resize = Resize {
            menu: menu.clone(),
            measurements,
            collision,
        };
        let from = self
            .nav
            .wrapper_height
            .map(Dimension::Px)
            .unwrap_or(Dimension::Auto);
        let transition = self.transition(motion).track(
            AnimTarget::Wrapper,
            Style::default().height(from),
            Style::default().height(Dimension::Px(collision.menu_height)),
        );
        self.begin(Pending::Resize(resize.clone()), transition);
        Some(resize)
    }

    /// Window size changed; refit the open widget without motion
    pub fn auto_resize(&mut self) -> Option<Resize> {
        if self.nav.phase != Phase::Open {
            return None;
        }
        let current = self.resolve_menu(&MenuRef::Current)?;
        self.resize_menu(&current, Motion::Instant)
    }

    /// Scroll the first selected item of `menu` into view
    fn scroll_selected(&mut self, menu: &MenuId, resize: &Resize) {
        let Some(record) = self.store.menu(menu) else {
            return;
        };
        let selected = record
            .items
            .iter()
            .find(|id| self.store.item(id).is_some_and(|i| i.selected));

        let offset = selected
            .and_then(|id| self.surface.item_top(record, id))
            .map(|top| {
                let scrolled = self.surface.list_scroll_top(menu);
                scroll_offset(top, scrolled, &resize.collision)
            })
            .unwrap_or(0.0);

        self.surface.scroll_list(menu, offset.max(0.0));
    }
}
