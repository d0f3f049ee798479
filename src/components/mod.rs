//! Core algorithmic components
//!
//! This module provides the two belief updates every filter step is made of:
//!
//! - [`motion`] - Motion update (stochastic shift on a torus)
//! - [`measurement`] - Measurement update (hit/miss reweighting + normalization)

pub mod measurement;
pub mod motion;

pub use measurement::{sense, sense_with_model};
pub use motion::{move_belief, move_with_model};
