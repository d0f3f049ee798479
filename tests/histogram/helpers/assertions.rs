//! Assertion functions for belief grid comparisons with tolerance

use histogram_filter_rs::BeliefGrid;

/// Compare scalar values with tolerance
pub fn assert_scalar_close(actual: f64, expected: f64, tolerance: f64, field_name: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {}, got {} (diff: {}, tolerance: {})",
        field_name,
        expected,
        actual,
        diff,
        tolerance
    );
}

/// Compare two belief grids cell by cell with tolerance
pub fn assert_grid_close(
    actual: &BeliefGrid,
    expected: &BeliefGrid,
    tolerance: f64,
    field_name: &str,
) {
    assert_eq!(
        actual.shape(),
        expected.shape(),
        "{}: shape mismatch (actual: {:?}, expected: {:?})",
        field_name,
        actual.shape(),
        expected.shape()
    );

    for i in 0..actual.height() {
        for j in 0..actual.width() {
            let a = actual.get(i, j);
            let e = expected.get(i, j);
            let diff = (a - e).abs();
            assert!(
                diff <= tolerance,
                "{}[{}][{}]: expected {}, got {} (diff: {}, tolerance: {})",
                field_name,
                i,
                j,
                e,
                a,
                diff,
                tolerance
            );
        }
    }
}

/// Assert that a grid is a probability distribution
pub fn assert_distribution(belief: &BeliefGrid, tolerance: f64, field_name: &str) {
    for &p in belief.matrix().iter() {
        assert!(p >= 0.0, "{}: negative cell {}", field_name, p);
    }
    assert_scalar_close(belief.sum(), 1.0, tolerance, field_name);
}
