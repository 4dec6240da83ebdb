//! Infrastructure layer providing external service integrations.
//!
//! Configuration files, CSV reports and the system clipboard live here.

pub mod config;
pub mod export;
pub mod clipboard;

pub use config::*;
pub use export::*;
pub use clipboard::*;
