//! Shared helpers for histogram filter integration tests
//!
//! Tolerance assertions and deterministic world generators.

pub mod assertions;
pub mod fixtures;
