//! Line rules for Gomoku
//!
//! This module holds the scanning primitives the rule engine composes:
//! run length along a half-direction and whether the run ends open.

pub mod line;

// Re-exports for convenient access
pub use line::{has_open_end, length_in_direction, LineScan};
