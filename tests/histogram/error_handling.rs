//! Error reporting for malformed inputs and degenerate posteriors

use histogram_filter_rs::{
    localize, sense, BeliefGrid, Color, Displacement, FilterError, FilterParams, HistogramFilter,
    LabelMap, Scenario,
};

#[test]
fn test_empty_inputs_rejected() {
    let no_rows: [&str; 0] = [];
    assert_eq!(LabelMap::parse_rows(&no_rows).unwrap_err(), FilterError::EmptyGrid);
    assert_eq!(LabelMap::parse_rows(&[""]).unwrap_err(), FilterError::EmptyGrid);
    assert_eq!(BeliefGrid::uniform(0, 3).unwrap_err(), FilterError::EmptyGrid);
    assert_eq!(BeliefGrid::uniform(3, 0).unwrap_err(), FilterError::EmptyGrid);
}

#[test]
fn test_ragged_label_map_rejected() {
    let err = LabelMap::parse_rows(&["RGG", "RG", "GGG"]).unwrap_err();
    assert_eq!(
        err,
        FilterError::RaggedRows {
            row: 1,
            expected: 3,
            actual: 2
        }
    );
    assert!(err.is_configuration());
    assert!(err.to_string().contains("row 1"));
}

#[test]
fn test_unknown_colour_rejected() {
    let err = LabelMap::parse_rows(&["RGB"]).unwrap_err();
    assert!(matches!(err, FilterError::Configuration { .. }));
    assert!(err.to_string().contains('B'));
}

#[test]
fn test_sequence_length_mismatch() {
    let labels = LabelMap::parse_rows(&["RG", "GR"]).unwrap();
    let err = localize(
        &labels,
        &[Color::Green, Color::Red],
        &[Displacement::STAY],
        0.7,
        0.8,
    )
    .unwrap_err();

    assert_eq!(
        err,
        FilterError::SequenceLengthMismatch {
            observations: 2,
            displacements: 1
        }
    );
    assert!(err.is_configuration());
}

#[test]
fn test_probabilities_out_of_range() {
    let labels = LabelMap::parse_rows(&["RG"]).unwrap();
    let z = [Color::Green];
    let d = [Displacement::STAY];

    for bad in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
        let err = localize(&labels, &z, &d, bad, 0.8).unwrap_err();
        assert!(
            matches!(err, FilterError::ProbabilityOutOfRange { name: "sensor_right", .. }),
            "sensor_right = {} gave {:?}",
            bad,
            err
        );

        let err = localize(&labels, &z, &d, 0.7, bad).unwrap_err();
        assert!(
            matches!(err, FilterError::ProbabilityOutOfRange { name: "p_move", .. }),
            "p_move = {} gave {:?}",
            bad,
            err
        );
    }

    // Boundary values are legal
    assert!(localize(&labels, &z, &d, 0.0, 1.0).is_ok());
    assert!(FilterParams::new(1.0, 0.0).is_ok());
}

#[test]
fn test_shape_mismatch_in_sense() {
    let labels = LabelMap::parse_rows(&["RGR", "GRG"]).unwrap();
    let belief = BeliefGrid::uniform(3, 2).unwrap();

    let err = sense(&belief, &labels, &Color::Red, 0.7).unwrap_err();
    match err {
        FilterError::DimensionMismatch {
            expected, actual, ..
        } => {
            assert_eq!(expected, (2, 3));
            assert_eq!(actual, (3, 2));
        }
        other => panic!("expected DimensionMismatch, got {:?}", other),
    }
}

#[test]
fn test_contradicting_perfect_sensor_is_degenerate() {
    // A perfect sensor that first pins the agent on red cells, then reports
    // green without any motion: no cell can explain both readings.
    let labels = LabelMap::parse_rows(&["RRG"]).unwrap();
    let err = localize(
        &labels,
        &[Color::Red, Color::Green],
        &[Displacement::STAY, Displacement::STAY],
        1.0,
        0.5,
    )
    .unwrap_err();

    assert!(matches!(err, FilterError::DegenerateNormalization { .. }));
    assert!(err.is_numerical());
    assert!(!err.is_configuration());
}

#[test]
fn test_filter_state_survives_degenerate_step() {
    let labels = LabelMap::parse_rows(&["RRG"]).unwrap();
    let mut filter =
        HistogramFilter::new(labels, FilterParams::new(1.0, 0.0).unwrap()).unwrap();

    filter
        .run(&[Color::Red], &[Displacement::RIGHT])
        .unwrap();
    let before = filter.belief().clone();

    let err = filter.run(&[Color::Green], &[Displacement::STAY]).unwrap_err();
    assert!(err.is_numerical());
    assert_eq!(filter.belief(), &before);
}

#[test]
fn test_invalid_scenario_parameters() {
    let json = r#"{
        "labels": ["RG"],
        "observations": ["G"],
        "motions": [[0, 1]],
        "sensor_right": 1.2,
        "p_move": 0.8
    }"#;
    let scenario = Scenario::from_json(json).unwrap();
    let err = scenario.run().unwrap_err();
    assert!(matches!(err, FilterError::ProbabilityOutOfRange { .. }));

    let err = Scenario::from_json(r#"{"labels": ["RG"], "observations": ["X"]}"#).unwrap_err();
    assert!(err.is_configuration());
}
