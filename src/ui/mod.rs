//! Terminal host
//!
//! Everything that draws to or reads from a terminal lives here.
//!
//! - `terminal` - Capability detection
//! - `theme` - Colors, icons and borders
//! - `widgets` - The dropdown widget host

pub mod terminal;
pub mod theme;
pub mod widgets;
