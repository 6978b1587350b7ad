//! Dropdown Widget
//!
//! Terminal host for a dropdown instance.
//!
//! # Module Structure
//!
//! - `surface` - TerminalSurface, the `Surface` port over a character grid
//! - `render` - Toggle line and open menu panel
//! - `tree` - Whole menu tree for inspection
//! - `input` - Keyboard mapping and the interactive loop

mod input;
mod render;
mod surface;
mod tree;

pub use input::{key_to_action, run_interactive, HostAction, SessionOutcome};
pub use render::render;
pub use surface::{TerminalSurface, CHROME_ROWS};
pub use tree::render_tree;
