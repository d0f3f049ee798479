//! Measurement update for the histogram filter
//!
//! The sensor reports one label per step. A reading that matches the cell's
//! label is a hit (likelihood `sensor_right`), anything else is a miss
//! (likelihood `1 − sensor_right`). The reweighted grid is renormalized.

use crate::filter::errors::FilterError;
use crate::types::{BeliefGrid, Label, LabelMap, SensorModel};
use crate::utils::grid_ops::{map_cells, normalize};

/// Apply one measurement step.
///
/// ```text
/// w[i][j] = P[i][j] · (sensor_right        if labels[i][j] == observation
///                      1 − sensor_right    otherwise)
/// P'[i][j] = w[i][j] / Σ w
/// ```
///
/// # Errors
/// - [`FilterError::ProbabilityOutOfRange`] if `sensor_right` is outside [0, 1] or NaN
/// - [`FilterError::DimensionMismatch`] if belief and label map differ in shape
/// - [`FilterError::DegenerateNormalization`] if every weight is zero, i.e.
///   the prior gives no mass to any cell the reading can be explained by
pub fn sense<L: Label>(
    belief: &BeliefGrid,
    labels: &LabelMap<L>,
    observation: &L,
    sensor_right: f64,
) -> Result<BeliefGrid, FilterError> {
    sense_with_model(belief, labels, observation, &SensorModel { sensor_right })
}

/// [`sense`] with parameters taken from a [`SensorModel`].
pub fn sense_with_model<L: Label>(
    belief: &BeliefGrid,
    labels: &LabelMap<L>,
    observation: &L,
    sensor: &SensorModel,
) -> Result<BeliefGrid, FilterError> {
    sensor.validate()?;

    if belief.shape() != labels.shape() {
        return Err(FilterError::DimensionMismatch {
            expected: labels.shape(),
            actual: belief.shape(),
            context: "belief vs label map".to_string(),
        });
    }

    let (height, width) = belief.shape();
    let sensor_right = sensor.sensor_right;
    let sensor_wrong = sensor.sensor_wrong();
    let prior = belief.matrix();
    let label_matrix = labels.matrix();

    let weights = map_cells(height, width, |i, j| {
        let likelihood = if label_matrix[(i, j)] == *observation {
            sensor_right
        } else {
            sensor_wrong
        };
        prior[(i, j)] * likelihood
    });

    Ok(BeliefGrid::from_matrix_unchecked(normalize(weights)?))
}
