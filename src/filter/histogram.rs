//! Stateful histogram filter over a labelled grid.
//!
//! [`HistogramFilter`] holds the label map, the motion/sensor parameters and
//! the current belief. Each step runs the motion update followed by the
//! measurement update; the belief is replaced only when both succeed.

use crate::components::{move_with_model, sense_with_model};
use crate::reporter::{NoOpReporter, StepReporter};
use crate::types::{
    BeliefGrid, Color, Displacement, FilterOutput, FilterParams, Label, LabelMap, StepEstimate,
};
use crate::utils::constants::PROBABILITY_TOLERANCE;
use crate::utils::grid_ops::is_distribution;

use super::errors::FilterError;
use super::traits::Filter;

/// Discrete Bayes filter on a fixed label map.
///
/// Starts from the uniform prior over all cells.
#[derive(Debug, Clone)]
pub struct HistogramFilter<L: Label = Color> {
    /// Static map of cell labels
    labels: LabelMap<L>,
    /// Motion and sensor parameters
    params: FilterParams,
    /// Current belief
    belief: BeliefGrid,
    /// Completed steps
    timestep: usize,
}

impl<L: Label> HistogramFilter<L> {
    /// Create a filter, validating the parameters.
    pub fn new(labels: LabelMap<L>, params: FilterParams) -> Result<Self, FilterError> {
        params.validate()?;
        let (height, width) = labels.shape();
        let belief = BeliefGrid::uniform(height, width)?;

        Ok(Self {
            labels,
            params,
            belief,
            timestep: 0,
        })
    }

    /// Label map the filter localizes against
    pub fn labels(&self) -> &LabelMap<L> {
        &self.labels
    }

    /// Filter parameters
    pub fn params(&self) -> &FilterParams {
        &self.params
    }

    /// Current belief
    pub fn belief(&self) -> &BeliefGrid {
        &self.belief
    }

    /// Run one (move, sense) cycle, reporting intermediate grids.
    pub fn step_with_reporter<R: StepReporter>(
        &mut self,
        displacement: Displacement,
        observation: &L,
        reporter: &mut R,
    ) -> Result<StepEstimate, FilterError> {
        let step = self.timestep;

        let moved = move_with_model(&self.belief, displacement, &self.params.motion)?;
        reporter.on_motion(step, displacement, &moved);

        let posterior = sense_with_model(&moved, &self.labels, observation, &self.params.sensor)?;
        debug_assert!(is_distribution(posterior.matrix(), PROBABILITY_TOLERANCE));
        reporter.on_measurement(step, observation, &posterior);

        let estimate = StepEstimate::from_belief(step, &posterior);
        reporter.on_step_complete(&estimate);

        self.belief = posterior;
        self.timestep += 1;
        Ok(estimate)
    }

    /// Run every step of a scenario from the current belief.
    ///
    /// Sequence lengths are checked before any step runs.
    pub fn run(
        &mut self,
        observations: &[L],
        displacements: &[Displacement],
    ) -> Result<FilterOutput, FilterError> {
        self.run_with_reporter(observations, displacements, &mut NoOpReporter)
    }

    /// [`HistogramFilter::run`] with a reporter.
    pub fn run_with_reporter<R: StepReporter>(
        &mut self,
        observations: &[L],
        displacements: &[Displacement],
        reporter: &mut R,
    ) -> Result<FilterOutput, FilterError> {
        check_sequence_lengths(observations.len(), displacements.len())?;

        if self.timestep == 0 {
            reporter.on_prior(&self.belief);
        }

        let estimates = displacements
            .iter()
            .zip(observations)
            .map(|(&d, z)| self.step_with_reporter(d, z, reporter))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FilterOutput::new(self.belief.clone(), estimates))
    }
}

impl<L: Label> Filter for HistogramFilter<L> {
    type State = BeliefGrid;
    type Observation = L;

    fn step(
        &mut self,
        displacement: Displacement,
        observation: &L,
    ) -> Result<StepEstimate, FilterError> {
        self.step_with_reporter(displacement, observation, &mut NoOpReporter)
    }

    fn state(&self) -> &BeliefGrid {
        &self.belief
    }

    fn reset(&mut self) {
        let (height, width) = self.labels.shape();
        // LabelMap guarantees a non-empty shape
        if let Ok(prior) = BeliefGrid::uniform(height, width) {
            self.belief = prior;
        }
        self.timestep = 0;
    }

    fn timestep(&self) -> usize {
        self.timestep
    }
}

/// Observations and displacements pair one-to-one.
pub(crate) fn check_sequence_lengths(
    observations: usize,
    displacements: usize,
) -> Result<(), FilterError> {
    if observations != displacements {
        return Err(FilterError::SequenceLengthMismatch {
            observations,
            displacements,
        });
    }
    Ok(())
}
