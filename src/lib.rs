/*!
# Histogram filter - Discrete Bayes localization on grid worlds

Rust implementation of the histogram filter: a Bayes filter over the cells of
a 2D grid whose cells carry known labels. An agent issues movement commands
that succeed with probability `p_move` and reads its cell's label with a
sensor that is right with probability `sensor_right`. The filter maintains a
probability for every cell, alternating a motion update and a measurement
update.

## Features

- Motion update with toroidal wraparound on both axes
- Binary hit/miss measurement update with checked normalization
- One-shot [`localize`] and a stateful [`HistogramFilter`]
- Step reporters for logging and debugging
- JSON scenarios and parameter snapshots
- Optional `rayon` feature for per-cell parallel updates

## Modules

- [`filter`] - Filter trait, histogram filter, `localize`, errors
- [`components`] - Motion and measurement updates
- [`types`] - Grids, labels, displacements, parameters, outputs
- [`reporter`] - Observability hooks
- [`scenario`] - Scenario files and the sample world
- [`utils`] - Constants and grid helpers

## Example

```rust
use histogram_filter_rs::{localize, Color, Displacement, LabelMap};

let labels = LabelMap::parse_rows(&["RGGRR", "RRGRR", "RRGGR", "RRRRR"]).unwrap();
let observations = [Color::Green; 5];
let motions = [
    Displacement::STAY,
    Displacement::RIGHT,
    Displacement::DOWN,
    Displacement::DOWN,
    Displacement::RIGHT,
];

let belief = localize(&labels, &observations, &motions, 0.7, 0.8).unwrap();
assert_eq!(belief.most_likely_cell().0, (2, 3));
println!("{}", belief.show());
```
*/

// ============================================================================
// Core modules
// ============================================================================

/// Filter trait, stateful histogram filter and the `localize` entry point
pub mod filter;

/// Motion and measurement updates
pub mod components;

/// Grids, labels, displacements, parameters and outputs
pub mod types;

/// Step reporters for logging and debugging
pub mod reporter;

/// Scenario loading and the built-in sample world
pub mod scenario;

/// Numerical constants and grid helpers
pub mod utils;

// ============================================================================
// Re-exports for convenience
// ============================================================================

// Core types
pub use types::{
    initialize_uniform, BeliefGrid, Color, Displacement, FilterOutput, FilterParams,
    FilterParamsBuilder, Label, LabelMap, MotionModel, SensorModel, StepEstimate,
};

// Updates
pub use components::{move_belief, sense};

// Filters
pub use filter::{localize, localize_with_reporter, Filter, FilterError, HistogramFilter};

// Reporters
pub use reporter::{CompositeReporter, DebugReporter, LoggingReporter, NoOpReporter, StepReporter};

// Scenarios
pub use scenario::Scenario;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
