//! Ang Pao Counter Library
//!
//! A terminal tally for red packets: tap fixed denominations, watch the
//! running total and distribution, undo mis-taps.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
