//! Geometry records exchanged with the host surface.

use serde::Serialize;

use crate::domain::entities::MenuId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Intrinsic dimensions measured by the host for one menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Measurements {
    pub viewport: Size,
    /// Wrapper outer size, margins included
    pub wrapper: Size,
    /// Wrapper outer size minus inner size
    pub wrapper_diff: Size,
    /// Menu panel outer size
    pub menu: Size,
    /// Inner list size
    pub list: Size,
    /// Document scroll distances
    pub scrolled: Point,
    /// Dropdown anchor offset in the document
    pub offset: Point,
    /// Toggle control outer height
    pub toggle_height: f64,
    /// Wrapper is viewport-fixed (narrow layouts)
    pub mobile: bool,
}

/// Vertical side the menu opens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Above,
    #[default]
    Below,
}

/// Space available around the anchor after the margin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Space {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

/// Result of the viewport collision adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Collision {
    pub placement: Placement,
    pub space: Space,
    /// Menu height plus wrapper chrome
    pub required_height: f64,
    /// Displayed menu height after clamping
    pub menu_height: f64,
    /// Inner list height after clamping
    pub list_height: f64,
}

/// Outcome of one resize pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resize {
    pub menu: MenuId,
    pub measurements: Measurements,
    pub collision: Collision,
}
