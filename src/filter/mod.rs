//! Filter implementations
//!
//! This module provides the filter trait, the stateful histogram filter and
//! the one-shot `localize` entry point:
//!
//! - [`Filter`] - Core trait implemented by stateful filters
//! - [`HistogramFilter`] - Discrete Bayes filter over a labelled grid
//! - [`localize`] - Uniform prior, then `N` (move, sense) cycles
//! - [`FilterError`] - Configuration and numerical errors

pub mod errors;
pub mod histogram;
pub mod localize;
pub mod traits;

pub use errors::FilterError;
pub use histogram::HistogramFilter;
pub use localize::{localize, localize_with_reporter};
pub use traits::Filter;
