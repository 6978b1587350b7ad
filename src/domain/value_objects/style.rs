//! Animation vocabulary shared by the widget and the animator port.

use serde::Serialize;

use crate::domain::entities::MenuId;

/// Horizontal position of a menu panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Slide {
    /// Off-screen to the left (`x: -100%`)
    Left,
    /// Resting in view (`x: 0`)
    Rest,
    /// Off-screen to the right (`x: 100%`)
    #[default]
    Right,
}

impl Slide {
    /// Offset as a percentage of the panel width
    pub fn percent(self) -> f64 {
        match self {
            Slide::Left => -100.0,
            Slide::Rest => 0.0,
            Slide::Right => 100.0,
        }
    }
}

/// A height that can be cleared back to intrinsic size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Auto,
    Px(f64),
}

/// Element an animation or style snap applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimTarget {
    /// Outer menu wrapper
    Wrapper,
    /// A menu panel
    Menu(MenuId),
    /// The scrolling list inside a menu panel
    List(MenuId),
}

/// Partial style. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Style {
    pub visible: Option<bool>,
    pub opacity: Option<f64>,
    pub x: Option<Slide>,
    pub y: Option<f64>,
    pub height: Option<Dimension>,
}

impl Style {
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn x(mut self, slide: Slide) -> Self {
        self.x = Some(slide);
        self
    }

    pub fn y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    pub fn height(mut self, height: Dimension) -> Self {
        self.height = Some(height);
        self
    }
}

/// One element moving from one style to another.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Track {
    pub target: AnimTarget,
    pub from: Style,
    pub to: Style,
}

/// A group of tracks sharing duration and easing that settles atomically.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transition {
    pub tracks: Vec<Track>,
    pub duration_ms: u64,
    pub easing: String,
}

impl Transition {
    pub fn new(duration_ms: u64, easing: impl Into<String>) -> Self {
        Self {
            tracks: Vec::new(),
            duration_ms,
            easing: easing.into(),
        }
    }

    pub fn track(mut self, target: AnimTarget, from: Style, to: Style) -> Self {
        self.tracks.push(Track { target, from, to });
        self
    }

    pub fn is_instant(&self) -> bool {
        self.duration_ms == 0
    }
}

/// Handle identifying one in-flight transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TransitionHandle(pub u64);
