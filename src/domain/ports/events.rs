//! Notification Port
//!
//! Lifecycle notifications emitted by a dropdown instance. `:before`
//! variants fire synchronously before any motion starts; the plain variants
//! fire once the transition has settled.

use serde::Serialize;

use crate::domain::entities::{ItemId, MenuId};
use crate::domain::value_objects::{Collision, InstanceId};

/// Event emitted by a dropdown instance
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event")]
pub enum DropdownEvent {
    #[serde(rename = "dropdown.init")]
    Init,

    #[serde(rename = "dropdown.open:before")]
    OpenBefore,

    #[serde(rename = "dropdown.open")]
    Open,

    #[serde(rename = "dropdown.close:before")]
    CloseBefore,

    #[serde(rename = "dropdown.close")]
    Close,

    #[serde(rename = "dropdown.open.menu:before")]
    OpenMenuBefore {
        menu: MenuId,
        current: Option<MenuId>,
    },

    #[serde(rename = "dropdown.open.menu")]
    OpenMenu {
        menu: MenuId,
        current: Option<MenuId>,
    },

    #[serde(rename = "dropdown.close.menu:before")]
    CloseMenuBefore { menu: MenuId, target: MenuId },

    #[serde(rename = "dropdown.close.menu")]
    CloseMenu { menu: MenuId, target: MenuId },

    #[serde(rename = "dropdown.resize:before")]
    ResizeBefore { menu: MenuId },

    #[serde(rename = "dropdown.resize")]
    Resize { menu: MenuId, collision: Collision },

    #[serde(rename = "dropdown.select:before")]
    SelectBefore {
        item: ItemId,
        previous: Option<ItemId>,
    },

    #[serde(rename = "dropdown.select")]
    Select {
        item: ItemId,
        previous: Option<ItemId>,
    },

    #[serde(rename = "dropdown.deselect:before")]
    DeselectBefore { item: ItemId },

    #[serde(rename = "dropdown.deselect")]
    Deselect { item: ItemId },

    #[serde(rename = "dropdown.reset:before")]
    ResetBefore {
        clear: bool,
        target: MenuId,
        current: MenuId,
    },

    #[serde(rename = "dropdown.reset")]
    Reset {
        clear: bool,
        target: MenuId,
        current: MenuId,
    },
}

impl DropdownEvent {
    /// Notification name as seen by listeners
    pub fn name(&self) -> &'static str {
        match self {
            DropdownEvent::Init => "dropdown.init",
            DropdownEvent::OpenBefore => "dropdown.open:before",
            DropdownEvent::Open => "dropdown.open",
            DropdownEvent::CloseBefore => "dropdown.close:before",
            DropdownEvent::Close => "dropdown.close",
            DropdownEvent::OpenMenuBefore { .. } => "dropdown.open.menu:before",
            DropdownEvent::OpenMenu { .. } => "dropdown.open.menu",
            DropdownEvent::CloseMenuBefore { .. } => "dropdown.close.menu:before",
            DropdownEvent::CloseMenu { .. } => "dropdown.close.menu",
            DropdownEvent::ResizeBefore { .. } => "dropdown.resize:before",
            DropdownEvent::Resize { .. } => "dropdown.resize",
            DropdownEvent::SelectBefore { .. } => "dropdown.select:before",
            DropdownEvent::Select { .. } => "dropdown.select",
            DropdownEvent::DeselectBefore { .. } => "dropdown.deselect:before",
            DropdownEvent::Deselect { .. } => "dropdown.deselect",
            DropdownEvent::ResetBefore { .. } => "dropdown.reset:before",
            DropdownEvent::Reset { .. } => "dropdown.reset",
        }
    }

    /// Whether this is a `:before` notification
    pub fn is_before(&self) -> bool {
        self.name().ends_with(":before")
    }
}

/// Trait for receiving dropdown notifications
///
/// Implementations can be:
/// - JsonEventSink: NDJSON stream for host integration
/// - RecordingEventSink: in-memory log for tests
pub trait DropdownEventSink: Send + Sync {
    /// Handle one notification from `instance`
    fn on_event(&self, instance: &InstanceId, event: &DropdownEvent);
}
