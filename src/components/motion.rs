//! Motion update for the histogram filter
//!
//! The agent is commanded to move by a [`Displacement`]. With probability
//! `p_move` the move happens; otherwise the agent stays where it was. The
//! grid is treated as a torus when looking up the source cell.

use crate::filter::errors::FilterError;
use crate::types::{BeliefGrid, Displacement, MotionModel};
use crate::utils::grid_ops::map_cells;

/// Apply one motion step.
///
/// Each destination cell mixes two hypotheses:
/// ```text
/// P'[i][j] = p_move · P[(i − dy) mod H][(j − dx) mod W] + (1 − p_move) · P[i][j]
/// ```
///
/// The result has the same shape and the same total mass as the input, so no
/// renormalization is needed. Any integer displacement is accepted.
///
/// # Errors
/// - [`FilterError::ProbabilityOutOfRange`] if `p_move` is outside [0, 1] or NaN
pub fn move_belief(
    belief: &BeliefGrid,
    displacement: Displacement,
    p_move: f64,
) -> Result<BeliefGrid, FilterError> {
    move_with_model(belief, displacement, &MotionModel { p_move })
}

/// [`move_belief`] with parameters taken from a [`MotionModel`].
pub fn move_with_model(
    belief: &BeliefGrid,
    displacement: Displacement,
    motion: &MotionModel,
) -> Result<BeliefGrid, FilterError> {
    motion.validate()?;

    if displacement.is_stay() {
        return Ok(belief.clone());
    }

    let (height, width) = belief.shape();
    let p_move = motion.p_move;
    let p_stay = motion.p_stay();
    let prior = belief.matrix();

    let moved = map_cells(height, width, |i, j| {
        let source = displacement.source_of(i, j, height, width);
        p_move * prior[source] + p_stay * prior[(i, j)]
    });

    Ok(BeliefGrid::from_matrix_unchecked(moved))
}
