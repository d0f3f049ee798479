//! Output types for filter results
//!
//! This module defines the output types returned by filters.

use serde::Serialize;

use super::BeliefGrid;

/// Point estimate after one (move, sense) cycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepEstimate {
    /// Zero-based step index
    pub step: usize,
    /// Most likely cell `(row, col)`
    pub cell: (usize, usize),
    /// Posterior probability of that cell
    pub probability: f64,
}

impl StepEstimate {
    /// Summarize a posterior belief
    pub fn from_belief(step: usize, belief: &BeliefGrid) -> Self {
        let (cell, probability) = belief.most_likely_cell();
        Self {
            step,
            cell,
            probability,
        }
    }
}

/// Complete output from a filter run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOutput {
    /// Posterior after the last step (the prior if no steps ran)
    pub belief: BeliefGrid,
    /// One estimate per step
    pub estimates: Vec<StepEstimate>,
}

impl FilterOutput {
    /// Create a new filter output
    pub fn new(belief: BeliefGrid, estimates: Vec<StepEstimate>) -> Self {
        Self { belief, estimates }
    }

    /// Number of timesteps
    #[inline]
    pub fn num_timesteps(&self) -> usize {
        self.estimates.len()
    }

    /// Estimate of the final step, if any step ran
    pub fn last_estimate(&self) -> Option<&StepEstimate> {
        self.estimates.last()
    }

    /// Serialize to pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
