//! Application layer managing session state.
//!
//! This module sits between the counter engine and the presentation layer,
//! holding the selection, theme, mode and status of the running session.

pub mod state;

pub use state::*;
