//! Error types for filters and components
//!
//! This module provides proper error handling instead of panics. Errors fall
//! into two families: configuration errors (bad shapes or parameters, detected
//! before any update runs) and numerical errors (raised by the measurement
//! update when normalization is impossible).

use std::fmt;

/// Errors that can occur while building or running a histogram filter
#[derive(Debug, Clone, PartialEq)]
pub enum FilterError {
    /// Grid has no rows or no columns
    EmptyGrid,

    /// Grid rows have different lengths
    RaggedRows {
        /// Index of the first offending row
        row: usize,
        /// Width of the first row
        expected: usize,
        /// Width of the offending row
        actual: usize,
    },

    /// Dimension mismatch between two grids
    DimensionMismatch {
        /// Expected (rows, cols)
        expected: (usize, usize),
        /// Received (rows, cols)
        actual: (usize, usize),
        /// Context (e.g., "belief vs label map")
        context: String,
    },

    /// Observation and displacement sequences cannot be paired
    SequenceLengthMismatch {
        /// Number of observations supplied
        observations: usize,
        /// Number of displacements supplied
        displacements: usize,
    },

    /// A probability parameter lies outside [0, 1] (or is NaN)
    ProbabilityOutOfRange {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// Measurement weights summed to zero, so the posterior is undefined
    DegenerateNormalization {
        /// The weight sum that could not be normalized by
        weight_sum: f64,
    },

    /// Malformed configuration input (JSON, label text)
    Configuration {
        /// Description of the configuration issue
        description: String,
    },
}

impl FilterError {
    /// True for errors caused by bad shapes, sequences or parameters.
    pub fn is_configuration(&self) -> bool {
        !self.is_numerical()
    }

    /// True for errors raised during the update arithmetic itself.
    pub fn is_numerical(&self) -> bool {
        matches!(self, FilterError::DegenerateNormalization { .. })
    }
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::EmptyGrid => {
                write!(f, "Grid must have at least one row and one column")
            }
            FilterError::RaggedRows {
                row,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Grid row {} has {} columns, expected {}",
                    row, actual, expected
                )
            }
            FilterError::DimensionMismatch {
                expected,
                actual,
                context,
            } => {
                write!(
                    f,
                    "Dimension mismatch for {}: expected {}x{}, got {}x{}",
                    context, expected.0, expected.1, actual.0, actual.1
                )
            }
            FilterError::SequenceLengthMismatch {
                observations,
                displacements,
            } => {
                write!(
                    f,
                    "Sequence length mismatch: {} observations but {} displacements",
                    observations, displacements
                )
            }
            FilterError::ProbabilityOutOfRange { name, value } => {
                write!(f, "Probability {} = {} is outside [0, 1]", name, value)
            }
            FilterError::DegenerateNormalization { weight_sum } => {
                write!(
                    f,
                    "Numerical instability: measurement weights sum to {}, cannot normalize",
                    weight_sum
                )
            }
            FilterError::Configuration { description } => {
                write!(f, "Configuration error: {}", description)
            }
        }
    }
}

impl std::error::Error for FilterError {}

impl From<serde_json::Error> for FilterError {
    fn from(e: serde_json::Error) -> Self {
        FilterError::Configuration {
            description: e.to_string(),
        }
    }
}
