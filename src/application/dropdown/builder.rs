//! Dropdown construction and the init sequence

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::Options;
use crate::domain::entities::{ItemId, ItemSpec, MenuSpec};
use crate::domain::ports::{
    Animator, DropdownEvent, DropdownEventSink, HeadlessSurface, NoopAnimator, Surface,
};
use crate::domain::services::EntityStore;
use crate::domain::value_objects::{InstanceId, MenuRef, Selection};

use super::toggle::ToggleLabel;
use super::{Dropdown, Motion, NavState};

/// Collects collaborators and initial content, then runs init.
pub struct DropdownBuilder {
    options: Options,
    uid: Option<InstanceId>,
    main: MenuSpec,
    items: Vec<ItemSpec>,
    multiple: bool,
    mirrors_control: bool,
    animator: Box<dyn Animator>,
    surface: Box<dyn Surface>,
    sinks: Vec<Arc<dyn DropdownEventSink>>,
}

impl DropdownBuilder {
    pub fn new(options: Options) -> Self {
        Self {
            options,
            uid: None,
            main: MenuSpec::default(),
            items: Vec::new(),
            multiple: false,
            mirrors_control: false,
            animator: Box::new(NoopAnimator),
            surface: Box::new(HeadlessSurface),
            sinks: Vec::new(),
        }
    }

    pub fn uid(mut self, uid: impl Into<InstanceId>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    /// Explicit main menu id or title
    pub fn main_menu(mut self, spec: MenuSpec) -> Self {
        self.main = spec;
        self
    }

    /// Top-level items, in display order
    pub fn items(mut self, items: Vec<ItemSpec>) -> Self {
        self.items.extend(items);
        self
    }

    /// The source is a native select control; `multiple` is its attribute
    pub fn native_control(mut self, multiple: bool) -> Self {
        self.mirrors_control = true;
        self.multiple = multiple;
        self
    }

    pub fn animator(mut self, animator: impl Animator + 'static) -> Self {
        self.animator = Box::new(animator);
        self
    }

    pub fn surface(mut self, surface: impl Surface + 'static) -> Self {
        self.surface = Box::new(surface);
        self
    }

    pub fn sink(mut self, sink: Arc<dyn DropdownEventSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Build the instance and run init.
    ///
    /// Init probes transition support, shows the main menu, materializes the
    /// items, selects pre-selected leaves in insertion order and finally
    /// emits `dropdown.init`.
    pub fn build(self) -> Dropdown {
        let DropdownBuilder {
            mut options,
            uid,
            main,
            items,
            multiple,
            mirrors_control,
            animator,
            surface,
            sinks,
        } = self;

        if !surface.supports_transitions() {
            options.speed = 0;
        }
        if options.multi.is_none() {
            options.multi = Some(multiple);
        }

        let multi = options.is_multi();
        let mut dropdown = Dropdown {
            uid: uid.unwrap_or_else(InstanceId::generate),
            store: EntityStore::new(options.build_rules()),
            selection: Selection::new(multi),
            nav: NavState::default(),
            focused: None,
            toggle_focused: false,
            toggle: ToggleLabel::new(options.toggle_text.clone()),
            mirrors_control,
            pending: BTreeMap::new(),
            next_handle: 0,
            animator,
            surface,
            sinks,
            options,
        };

        let main = dropdown.store.add_menu(main);
        dropdown.open_menu_with(MenuRef::Resolved(main.clone()), Motion::Instant);
        dropdown.store.add_items(items, &main);
        dropdown.apply_initial_selection();

        tracing::debug!(
            uid = %dropdown.uid,
            items = dropdown.store.item_count(),
            multi,
            "dropdown initialised"
        );
        dropdown.emit(DropdownEvent::Init);
        dropdown
    }
}

impl Dropdown {
    /// Run pre-selected leaves through the selection engine.
    ///
    /// Flags set by the source are cleared first so multi-select does not
    /// read them as "already selected" and toggle them off.
    fn apply_initial_selection(&mut self) {
        let preselected: Vec<ItemId> = self
            .store
            .items()
            .filter(|item| item.selected && !item.is_parent())
            .map(|item| item.id.clone())
            .collect();

        let flagged: Vec<ItemId> = self
            .store
            .items()
            .filter(|item| item.selected)
            .map(|item| item.id.clone())
            .collect();
        for id in &flagged {
            if let Some(item) = self.store.item_mut(id) {
                item.selected = false;
            }
        }

        for id in preselected {
            self.select_item(&id, false);
        }
    }
}
