//! One-shot localization over a full observation/motion history.

use crate::reporter::{NoOpReporter, StepReporter};
use crate::types::{BeliefGrid, Displacement, FilterParams, Label, LabelMap};

use super::errors::FilterError;
use super::histogram::{check_sequence_lengths, HistogramFilter};

/// Posterior over the grid after `N` (move, sense) cycles from a uniform prior.
///
/// Every input is validated before the first update runs:
/// probabilities must lie in [0, 1] and both sequences must have length `N`.
/// The label map shape is guaranteed by [`LabelMap`] itself.
///
/// # Example
///
/// ```
/// use histogram_filter_rs::{localize, Color, Displacement, LabelMap};
///
/// let labels = LabelMap::parse_rows(&["RGR"]).unwrap();
/// let belief = localize(&labels, &[Color::Green], &[Displacement::STAY], 0.9, 1.0).unwrap();
/// assert_eq!(belief.most_likely_cell().0, (0, 1));
/// ```
pub fn localize<L: Label>(
    labels: &LabelMap<L>,
    observations: &[L],
    displacements: &[Displacement],
    sensor_right: f64,
    p_move: f64,
) -> Result<BeliefGrid, FilterError> {
    localize_with_reporter(
        labels,
        observations,
        displacements,
        sensor_right,
        p_move,
        &mut NoOpReporter,
    )
}

/// [`localize`] forwarding every intermediate grid to `reporter`.
pub fn localize_with_reporter<L: Label, R: StepReporter>(
    labels: &LabelMap<L>,
    observations: &[L],
    displacements: &[Displacement],
    sensor_right: f64,
    p_move: f64,
    reporter: &mut R,
) -> Result<BeliefGrid, FilterError> {
    let params = FilterParams::new(sensor_right, p_move)?;
    check_sequence_lengths(observations.len(), displacements.len())?;

    let mut filter = HistogramFilter::new(labels.clone(), params)?;
    let output = filter.run_with_reporter(observations, displacements, reporter)?;
    Ok(output.belief)
}
