//! Cell-wise grid construction and normalization
//!
//! Both update steps compute every output cell from the prior grid alone, so
//! cells can be evaluated in any order. With the `rayon` feature enabled the
//! evaluation runs on the rayon thread pool.

use nalgebra::DMatrix;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::filter::errors::FilterError;

/// Build an `height × width` matrix from a per-cell function of `(row, col)`.
#[cfg(not(feature = "rayon"))]
pub fn map_cells<F>(height: usize, width: usize, f: F) -> DMatrix<f64>
where
    F: Fn(usize, usize) -> f64 + Sync,
{
    DMatrix::from_fn(height, width, f)
}

/// Build an `height × width` matrix from a per-cell function of `(row, col)`.
#[cfg(feature = "rayon")]
pub fn map_cells<F>(height: usize, width: usize, f: F) -> DMatrix<f64>
where
    F: Fn(usize, usize) -> f64 + Sync,
{
    // DMatrix storage is column-major: linear index k = col * height + row
    let data: Vec<f64> = (0..height * width)
        .into_par_iter()
        .map(|k| f(k % height, k / height))
        .collect();
    DMatrix::from_vec(height, width, data)
}

/// Divide every entry by the total.
///
/// Fails with [`FilterError::DegenerateNormalization`] when the total is zero
/// or not finite.
pub fn normalize(weights: DMatrix<f64>) -> Result<DMatrix<f64>, FilterError> {
    let total = weights.sum();
    if !(total.is_finite() && total > 0.0) {
        return Err(FilterError::DegenerateNormalization { weight_sum: total });
    }
    Ok(weights / total)
}

/// True when every entry is non-negative and the total is within `tol` of one.
pub fn is_distribution(matrix: &DMatrix<f64>, tol: f64) -> bool {
    matrix.iter().all(|&p| p >= 0.0) && (matrix.sum() - 1.0).abs() <= tol
}
