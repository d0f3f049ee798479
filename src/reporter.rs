//! Observability for histogram filter execution.
//!
//! This module provides the [`StepReporter`] trait for debugging and research
//! instrumentation. Reporters receive callbacks at key points during filter
//! execution without polluting the core update logic.
//!
//! # Zero-Cost Abstraction
//!
//! The default [`NoOpReporter`] compiles to zero overhead - all callback
//! methods are empty and will be optimized away by the compiler.
//!
//! # Example
//!
//! ```
//! use histogram_filter_rs::{localize_with_reporter, Color, DebugReporter, Displacement, LabelMap};
//!
//! let labels = LabelMap::parse_rows(&["RG", "GR"]).unwrap();
//! let mut reporter = DebugReporter::new();
//!
//! localize_with_reporter(
//!     &labels,
//!     &[Color::Green],
//!     &[Displacement::RIGHT],
//!     0.7,
//!     0.8,
//!     &mut reporter,
//! )
//! .unwrap();
//!
//! assert_eq!(reporter.motion_events().len(), 1);
//! assert_eq!(reporter.measurement_events().len(), 1);
//! ```

use std::fmt;

use crate::types::{BeliefGrid, Displacement, StepEstimate};

// ============================================================================
// StepReporter Trait
// ============================================================================

/// Observability trait for filter step execution.
///
/// All methods have default empty implementations, so you only need
/// to override the events you care about.
///
/// Reporters use `&mut self` for callbacks, so they are NOT required
/// to be `Send + Sync`. Callbacks receive references; clone inside the
/// callback if the data must outlive it.
pub trait StepReporter {
    /// Called once with the uniform prior before the first step.
    fn on_prior(&mut self, _belief: &BeliefGrid) {}

    /// Called after the motion update of `step`.
    fn on_motion(&mut self, _step: usize, _displacement: Displacement, _belief: &BeliefGrid) {}

    /// Called after the measurement update of `step` (belief is normalized).
    fn on_measurement(&mut self, _step: usize, _observation: &dyn fmt::Debug, _belief: &BeliefGrid) {
    }

    /// Called once the (move, sense) cycle of a step is complete.
    fn on_step_complete(&mut self, _estimate: &StepEstimate) {}
}

// ============================================================================
// NoOpReporter
// ============================================================================

/// Zero-cost reporter that does nothing.
///
/// This is the default reporter used when no observability is needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpReporter;

impl NoOpReporter {
    /// Create a new no-op reporter.
    pub fn new() -> Self {
        Self
    }
}

impl StepReporter for NoOpReporter {
    // All methods use default empty implementations
}

// ============================================================================
// DebugReporter
// ============================================================================

/// Reporter that captures all events for debugging.
///
/// Every intermediate grid is cloned, so memory grows with `steps × H × W`.
#[derive(Debug, Clone, Default)]
pub struct DebugReporter {
    /// Captured prior
    prior: Option<BeliefGrid>,

    /// Captured motion events (step, displacement, belief after motion)
    motions: Vec<(usize, Displacement, BeliefGrid)>,

    /// Captured measurement events (step, observation as text, posterior)
    measurements: Vec<(usize, String, BeliefGrid)>,

    /// Captured per-step estimates
    estimates: Vec<StepEstimate>,
}

impl DebugReporter {
    /// Create a new debug reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all captured events.
    pub fn clear(&mut self) {
        self.prior = None;
        self.motions.clear();
        self.measurements.clear();
        self.estimates.clear();
    }

    /// Captured prior, if the filter reported one.
    pub fn prior(&self) -> Option<&BeliefGrid> {
        self.prior.as_ref()
    }

    /// Get captured motion events.
    pub fn motion_events(&self) -> &[(usize, Displacement, BeliefGrid)] {
        &self.motions
    }

    /// Get captured measurement events.
    pub fn measurement_events(&self) -> &[(usize, String, BeliefGrid)] {
        &self.measurements
    }

    /// Get captured step estimates.
    pub fn step_estimates(&self) -> &[StepEstimate] {
        &self.estimates
    }

    /// Total number of captured events across all types.
    pub fn total_events(&self) -> usize {
        usize::from(self.prior.is_some())
            + self.motions.len()
            + self.measurements.len()
            + self.estimates.len()
    }
}

impl StepReporter for DebugReporter {
    fn on_prior(&mut self, belief: &BeliefGrid) {
        self.prior = Some(belief.clone());
    }

    fn on_motion(&mut self, step: usize, displacement: Displacement, belief: &BeliefGrid) {
        self.motions.push((step, displacement, belief.clone()));
    }

    fn on_measurement(&mut self, step: usize, observation: &dyn fmt::Debug, belief: &BeliefGrid) {
        self.measurements
            .push((step, format!("{:?}", observation), belief.clone()));
    }

    fn on_step_complete(&mut self, estimate: &StepEstimate) {
        self.estimates.push(*estimate);
    }
}

// ============================================================================
// LoggingReporter
// ============================================================================

/// Reporter that logs events using the log crate.
///
/// # Log Levels
///
/// - `on_step_complete`: INFO
/// - `on_prior`, `on_motion`, `on_measurement`: DEBUG
/// - full grids (verbose only): TRACE
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingReporter {
    /// Whether to dump whole grids at trace level
    verbose: bool,
}

impl LoggingReporter {
    /// Create a new logging reporter.
    pub fn new() -> Self {
        Self { verbose: false }
    }

    /// Create a verbose logging reporter that includes full grids.
    pub fn verbose() -> Self {
        Self { verbose: true }
    }
}

impl StepReporter for LoggingReporter {
    fn on_prior(&mut self, belief: &BeliefGrid) {
        log::debug!(
            "Uniform prior over {}x{} cells",
            belief.height(),
            belief.width()
        );
    }

    fn on_motion(&mut self, step: usize, displacement: Displacement, belief: &BeliefGrid) {
        log::debug!(
            "Step {}: motion {} applied, mass={:.6}",
            step,
            displacement,
            belief.sum()
        );
        if self.verbose {
            log::trace!("Step {} after motion:\n{}", step, belief);
        }
    }

    fn on_measurement(&mut self, step: usize, observation: &dyn fmt::Debug, belief: &BeliefGrid) {
        log::debug!("Step {}: measurement {:?} applied", step, observation);
        if self.verbose {
            log::trace!("Step {} posterior:\n{}", step, belief);
        }
    }

    fn on_step_complete(&mut self, estimate: &StepEstimate) {
        log::info!(
            "Step {} complete: most likely cell ({}, {}) p={:.5}",
            estimate.step,
            estimate.cell.0,
            estimate.cell.1,
            estimate.probability
        );
    }
}

// ============================================================================
// CompositeReporter
// ============================================================================

/// Reporter that forwards events to two child reporters.
#[derive(Debug, Clone)]
pub struct CompositeReporter<A: StepReporter, B: StepReporter> {
    first: A,
    second: B,
}

impl<A: StepReporter, B: StepReporter> CompositeReporter<A, B> {
    /// Create a new composite reporter.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Get a reference to the first reporter.
    pub fn first(&self) -> &A {
        &self.first
    }

    /// Get a reference to the second reporter.
    pub fn second(&self) -> &B {
        &self.second
    }

    /// Consume and return both reporters.
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: StepReporter, B: StepReporter> StepReporter for CompositeReporter<A, B> {
    fn on_prior(&mut self, belief: &BeliefGrid) {
        self.first.on_prior(belief);
        self.second.on_prior(belief);
    }

    fn on_motion(&mut self, step: usize, displacement: Displacement, belief: &BeliefGrid) {
        self.first.on_motion(step, displacement, belief);
        self.second.on_motion(step, displacement, belief);
    }

    fn on_measurement(&mut self, step: usize, observation: &dyn fmt::Debug, belief: &BeliefGrid) {
        self.first.on_measurement(step, observation, belief);
        self.second.on_measurement(step, observation, belief);
    }

    fn on_step_complete(&mut self, estimate: &StepEstimate) {
        self.first.on_step_complete(estimate);
        self.second.on_step_complete(estimate);
    }
}

// ============================================================================
// Tests
// ============================================================================
