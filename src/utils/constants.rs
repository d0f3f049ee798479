//! Numerical constants used throughout the filter
//!
//! These are separate from [`FilterParams`](crate::types::FilterParams),
//! which holds the user-configurable probabilities.

/// Tolerance for "sums to one" and conservation checks
///
/// Motion updates conserve mass and measurement updates renormalize; both
/// are exact up to accumulated rounding, well inside this bound for grids of
/// practical size.
pub const PROBABILITY_TOLERANCE: f64 = 1e-9;

/// Default sensor correctness probability (red/green sample world)
pub const DEFAULT_SENSOR_RIGHT: f64 = 0.7;

/// Default move success probability (red/green sample world)
pub const DEFAULT_P_MOVE: f64 = 0.8;

/// Decimal places used when rendering a belief grid
pub const DEFAULT_DISPLAY_PRECISION: usize = 5;
