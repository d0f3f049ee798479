//! Core traits for filters
//!
//! This module defines the trait implemented by stateful filters.

use crate::types::{Displacement, StepEstimate};

use super::errors::FilterError;

/// Core filter trait implemented by stateful Bayes filters
///
/// A filter owns its current belief and advances it one (move, sense)
/// cycle per call to [`Filter::step`].
///
/// # Type Parameters
/// - `State` - Internal belief representation (e.g., [`BeliefGrid`](crate::types::BeliefGrid))
/// - `Observation` - Sensor reading consumed per step
pub trait Filter {
    /// Type of internal filter state
    type State;

    /// Type of a single sensor reading
    type Observation;

    /// Process one timestep and return the point estimate
    ///
    /// # Arguments
    /// * `displacement` - Commanded move, applied first
    /// * `observation` - Sensor reading, applied after the move
    ///
    /// # Returns
    /// Estimate for this step, or an error. On error the state is unchanged.
    fn step(
        &mut self,
        displacement: Displacement,
        observation: &Self::Observation,
    ) -> Result<StepEstimate, FilterError>;

    /// Get current internal state (read-only)
    fn state(&self) -> &Self::State;

    /// Reset filter to its prior
    fn reset(&mut self);

    /// Number of completed steps since construction or the last reset
    fn timestep(&self) -> usize;
}
