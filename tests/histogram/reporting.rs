//! Reporter callbacks during filter runs

use histogram_filter_rs::{
    localize_with_reporter, Color, CompositeReporter, DebugReporter, Displacement,
    LoggingReporter, NoOpReporter, Scenario, StepReporter,
};

use crate::helpers::assertions::{assert_distribution, assert_grid_close};

#[test]
fn test_debug_reporter_captures_every_stage() {
    let scenario = Scenario::sample();
    let mut reporter = DebugReporter::new();
    let output = scenario.run_with_reporter(&mut reporter).unwrap();

    let prior = reporter.prior().unwrap();
    assert!(prior.matrix().iter().all(|&p| p == 1.0 / 20.0));

    assert_eq!(reporter.motion_events().len(), 5);
    assert_eq!(reporter.measurement_events().len(), 5);
    assert_eq!(reporter.step_estimates().len(), 5);
    // prior + 5 × (motion, measurement, estimate)
    assert_eq!(reporter.total_events(), 16);

    for (k, (step, displacement, moved)) in reporter.motion_events().iter().enumerate() {
        assert_eq!(*step, k);
        assert_eq!(*displacement, scenario.motions[k]);
        assert_distribution(moved, 1e-9, "moved");
    }
    for (step, observation, _) in reporter.measurement_events() {
        assert_eq!(observation, "Green", "step {}", step);
    }

    let (_, _, last) = reporter.measurement_events().last().unwrap();
    assert_grid_close(last, &output.belief, 0.0, "last posterior");
}

#[test]
fn test_composite_reporter_forwards_to_both() {
    let labels = Scenario::sample().label_map().unwrap();
    let mut reporter = CompositeReporter::new(DebugReporter::new(), DebugReporter::new());

    localize_with_reporter(
        &labels,
        &[Color::Red, Color::Green],
        &[Displacement::DOWN, Displacement::LEFT],
        0.7,
        0.8,
        &mut reporter,
    )
    .unwrap();

    let (first, second) = reporter.into_parts();
    assert_eq!(first.total_events(), 7);
    assert_eq!(first.total_events(), second.total_events());
    assert_eq!(first.step_estimates(), second.step_estimates());
}

#[test]
fn test_logging_and_noop_reporters_do_not_change_result() {
    let scenario = Scenario::sample();
    let plain = scenario.run_with_reporter(&mut NoOpReporter::new()).unwrap();
    let logged = scenario
        .run_with_reporter(&mut LoggingReporter::verbose())
        .unwrap();
    assert_eq!(plain.belief, logged.belief);
    assert_eq!(plain.estimates, logged.estimates);
}

#[test]
fn test_custom_reporter() {
    #[derive(Default)]
    struct PeakTracker {
        peaks: Vec<f64>,
    }

    impl StepReporter for PeakTracker {
        fn on_step_complete(&mut self, estimate: &histogram_filter_rs::StepEstimate) {
            self.peaks.push(estimate.probability);
        }
    }

    let mut tracker = PeakTracker::default();
    Scenario::sample().run_with_reporter(&mut tracker).unwrap();

    assert_eq!(tracker.peaks.len(), 5);
    // Five consistent green readings sharpen the belief overall
    assert!(tracker.peaks[4] > tracker.peaks[0]);
}
