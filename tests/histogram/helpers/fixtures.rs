//! Deterministic test worlds and random scenario generators

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use histogram_filter_rs::{BeliefGrid, Color, Displacement, LabelMap, Scenario};

/// Path to the JSON copy of the sample scenario
pub const SAMPLE_SCENARIO_PATH: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/sample_scenario.json");

/// Seeds used by randomized property tests
pub const SEEDS: &[u64] = &[1, 7, 42, 1000, 31337];

/// Load the sample scenario from its JSON fixture
pub fn load_sample_scenario() -> Scenario {
    Scenario::load(SAMPLE_SCENARIO_PATH).expect("Failed to load sample scenario fixture")
}

/// Random red/green world with the given shape
pub fn random_world(rng: &mut StdRng, height: usize, width: usize) -> LabelMap {
    let rows: Vec<Vec<Color>> = (0..height)
        .map(|_| {
            (0..width)
                .map(|_| if rng.gen_bool(0.5) { Color::Green } else { Color::Red })
                .collect()
        })
        .collect();
    LabelMap::from_rows(&rows).expect("random world is rectangular")
}

/// Random non-negative grid normalized to sum 1
pub fn random_belief(rng: &mut StdRng, height: usize, width: usize) -> BeliefGrid {
    let raw: Vec<Vec<f64>> = (0..height)
        .map(|_| (0..width).map(|_| rng.gen_range(0.0..1.0) + 1e-3).collect())
        .collect();
    let total: f64 = raw.iter().flatten().sum();
    let rows: Vec<Vec<f64>> = raw
        .into_iter()
        .map(|row| row.into_iter().map(|p| p / total).collect())
        .collect();
    BeliefGrid::from_rows(&rows).expect("random belief is valid")
}

/// Random displacement, possibly larger than the grid
pub fn random_displacement(rng: &mut StdRng) -> Displacement {
    Displacement::new(rng.gen_range(-7..=7), rng.gen_range(-7..=7))
}

/// Random grid shape, at most 8×8
pub fn random_shape(rng: &mut StdRng) -> (usize, usize) {
    (rng.gen_range(1..=8), rng.gen_range(1..=8))
}

/// Seeded rng for a property test case
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
