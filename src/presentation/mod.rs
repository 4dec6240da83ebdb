//! Presentation layer handling terminal UI and user input.
//!
//! This module renders the counter with ratatui, maps key presses onto
//! session actions, and formats amounts for display.

pub mod ui;
pub mod input;
pub mod format;

pub use ui::*;
pub use input::*;
pub use format::*;
