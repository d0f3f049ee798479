//! Scenario files shared by the demos, benchmarks and regression tests.
//!
//! This module provides:
//! - the JSON schema for a red/green localization scenario
//! - the built-in sample scenario (4×5 world, five green readings)
//! - helpers to run a scenario and compare against an expected posterior

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::filter::{FilterError, HistogramFilter};
use crate::reporter::{NoOpReporter, StepReporter};
use crate::types::{BeliefGrid, Color, Displacement, FilterOutput, FilterParams, LabelMap};

/// Per-cell tolerance of the sample scenario's expected posterior
pub const SAMPLE_TOLERANCE: f64 = 1e-3;

/// Complete localization scenario
///
/// ```json
/// {
///   "name": "sample",
///   "labels": ["RGGRR", "RRGRR", "RRGGR", "RRRRR"],
///   "observations": ["G", "G", "G", "G", "G"],
///   "motions": [[0, 0], [0, 1], [1, 0], [1, 0], [0, 1]],
///   "sensor_right": 0.7,
///   "p_move": 0.8
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Human-readable name
    #[serde(default)]
    pub name: String,
    /// Label map rows as colour codes
    pub labels: Vec<String>,
    /// One reading per step
    pub observations: Vec<Color>,
    /// One commanded move per step, `[dy, dx]`
    pub motions: Vec<Displacement>,
    /// Sensor correctness probability
    pub sensor_right: f64,
    /// Move success probability
    pub p_move: f64,
    /// Expected posterior, for regression checks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<BeliefGrid>,
}

impl Scenario {
    /// The 4×5 red/green world with five green readings.
    pub fn sample() -> Self {
        let expected = BeliefGrid::from_rows(&[
            [0.01105, 0.02464, 0.06799, 0.04472, 0.02465],
            [0.00715, 0.01017, 0.08696, 0.07988, 0.00935],
            [0.00739, 0.00894, 0.11272, 0.35350, 0.04065],
            [0.00910, 0.00715, 0.01434, 0.04313, 0.03642],
        ])
        .ok();

        Self {
            name: "sample".to_string(),
            labels: ["RGGRR", "RRGRR", "RRGGR", "RRRRR"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            observations: vec![Color::Green; 5],
            motions: vec![
                Displacement::STAY,
                Displacement::RIGHT,
                Displacement::DOWN,
                Displacement::DOWN,
                Displacement::RIGHT,
            ],
            sensor_right: 0.7,
            p_move: 0.8,
            expected,
        }
    }

    /// Parse a scenario from JSON.
    pub fn from_json(json: &str) -> Result<Self, FilterError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a scenario from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, FilterError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| FilterError::Configuration {
            description: format!("cannot read scenario {}: {}", path.display(), e),
        })?;
        Self::from_json(&content)
    }

    /// Serialize to pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Parsed label map
    pub fn label_map(&self) -> Result<LabelMap, FilterError> {
        LabelMap::parse_rows(&self.labels)
    }

    /// Validated filter parameters
    pub fn params(&self) -> Result<FilterParams, FilterError> {
        FilterParams::new(self.sensor_right, self.p_move)
    }

    /// Run the scenario from a uniform prior.
    pub fn run(&self) -> Result<FilterOutput, FilterError> {
        self.run_with_reporter(&mut NoOpReporter)
    }

    /// [`Scenario::run`] with a reporter.
    pub fn run_with_reporter<R: StepReporter>(
        &self,
        reporter: &mut R,
    ) -> Result<FilterOutput, FilterError> {
        let mut filter = HistogramFilter::new(self.label_map()?, self.params()?)?;
        filter.run_with_reporter(&self.observations, &self.motions, reporter)
    }

    /// Largest per-cell deviation from the expected posterior, if one is given.
    pub fn deviation_from_expected(&self, belief: &BeliefGrid) -> Option<f64> {
        self.expected
            .as_ref()
            .map(|expected| expected.max_abs_diff(belief))
    }
}
