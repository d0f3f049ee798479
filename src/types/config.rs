//! Configuration types for filters
//!
//! The motion and sensor parameters are split into focused models and
//! bundled by [`FilterParams`], which validates both probabilities once.

use serde::{Deserialize, Serialize};

use crate::filter::errors::FilterError;

/// Reject probabilities outside [0, 1]. NaN is rejected too.
pub(crate) fn check_probability(name: &'static str, value: f64) -> Result<f64, FilterError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(FilterError::ProbabilityOutOfRange { name, value })
    }
}

/// Motion model parameters for the prediction step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionModel {
    /// Probability the commanded displacement is executed; otherwise the
    /// agent stays put
    pub p_move: f64,
}

impl MotionModel {
    /// Create a motion model, validating `p_move ∈ [0, 1]`
    pub fn new(p_move: f64) -> Result<Self, FilterError> {
        Ok(Self {
            p_move: check_probability("p_move", p_move)?,
        })
    }

    /// Re-check `p_move` (needed after field edits or deserializing)
    pub fn validate(&self) -> Result<(), FilterError> {
        check_probability("p_move", self.p_move).map(|_| ())
    }

    /// Probability the move fails and the agent stays
    #[inline]
    pub fn p_stay(&self) -> f64 {
        1.0 - self.p_move
    }
}

/// Binary hit/miss sensor model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorModel {
    /// Probability a reading matches the true cell label
    pub sensor_right: f64,
}

impl SensorModel {
    /// Create a sensor model, validating `sensor_right ∈ [0, 1]`
    pub fn new(sensor_right: f64) -> Result<Self, FilterError> {
        Ok(Self {
            sensor_right: check_probability("sensor_right", sensor_right)?,
        })
    }

    /// Re-check `sensor_right` (needed after field edits or deserializing)
    pub fn validate(&self) -> Result<(), FilterError> {
        check_probability("sensor_right", self.sensor_right).map(|_| ())
    }

    /// Probability a reading is wrong
    #[inline]
    pub fn sensor_wrong(&self) -> f64 {
        1.0 - self.sensor_right
    }
}

/// Complete filter parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterParams {
    /// Motion model
    pub motion: MotionModel,
    /// Sensor model
    pub sensor: SensorModel,
}

impl FilterParams {
    /// Create validated parameters
    pub fn new(sensor_right: f64, p_move: f64) -> Result<Self, FilterError> {
        Ok(Self {
            sensor: SensorModel::new(sensor_right)?,
            motion: MotionModel::new(p_move)?,
        })
    }

    /// Start a builder with the defaults of the red/green world
    pub fn builder() -> FilterParamsBuilder {
        FilterParamsBuilder::default()
    }

    /// Re-check both probabilities (needed after deserializing or field edits)
    pub fn validate(&self) -> Result<(), FilterError> {
        self.sensor.validate()?;
        self.motion.validate()
    }

    /// Parse and validate from JSON.
    pub fn from_json(json: &str) -> Result<Self, FilterError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Serialize to pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Builder for [`FilterParams`]
///
/// Defaults: `sensor_right = 0.7`, `p_move = 0.8`.
#[derive(Debug, Clone, Copy)]
pub struct FilterParamsBuilder {
    sensor_right: f64,
    p_move: f64,
}

impl Default for FilterParamsBuilder {
    fn default() -> Self {
        Self {
            sensor_right: crate::utils::constants::DEFAULT_SENSOR_RIGHT,
            p_move: crate::utils::constants::DEFAULT_P_MOVE,
        }
    }
}

impl FilterParamsBuilder {
    /// Set the sensor correctness probability
    pub fn sensor_right(mut self, sensor_right: f64) -> Self {
        self.sensor_right = sensor_right;
        self
    }

    /// Set the move success probability
    pub fn p_move(mut self, p_move: f64) -> Self {
        self.p_move = p_move;
        self
    }

    /// Validate and build
    pub fn build(self) -> Result<FilterParams, FilterError> {
        FilterParams::new(self.sensor_right, self.p_move)
    }
}
