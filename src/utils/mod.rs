//! Shared utilities: numerical constants and grid helpers.

pub mod constants;
pub mod grid_ops;
