//! Core types for the localization library
//!
//! This module provides the unified type system used throughout the library.
//!
//! # Types
//!
//! - [`BeliefGrid`] - Probability distribution over grid cells
//! - [`LabelMap`] - Static map of cell labels
//! - [`Color`] - Red/green cell label
//! - [`Displacement`] - Commanded `(dy, dx)` move
//! - [`FilterParams`] - Motion and sensor parameters
//! - [`StepEstimate`] - Output estimate at a timestep
//! - [`FilterOutput`] - Complete filter run output

pub mod config;
pub mod displacement;
pub mod grid;
pub mod output;

// Re-export all public types
pub use grid::{
    initialize_uniform,
    BeliefGrid,
    Color,
    Label,
    LabelMap,
};

pub use displacement::Displacement;

pub use config::{
    FilterParams,
    FilterParamsBuilder,
    MotionModel,
    SensorModel,
};

pub use output::{
    FilterOutput,
    StepEstimate,
};
