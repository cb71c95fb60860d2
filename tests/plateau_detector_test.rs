// ABOUTME: Tests for multi-signal plateau detection
// ABOUTME: Indicator evaluation, weighted confidence, thresholding and recommended actions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use common::{compound_history, default_engine, full_session, scored_set, session, week};
use fitforge::intelligence::config::intelligence::PlateauConfig;
use fitforge::intelligence::{PlateauAction, PlateauDetector, PlateauIndicator, PlateauSignal};
use fitforge::models::SessionRecord;

const INCREMENT: f64 = 0.25;

fn detect(sessions: &[SessionRecord]) -> PlateauSignal {
    let window: Vec<&SessionRecord> = sessions.iter().collect();
    PlateauDetector::new(PlateauConfig::default()).detect(&window, INCREMENT)
}

fn form_session(weeks: i64, weight: f64, form: f64) -> SessionRecord {
    SessionRecord {
        sets: (0..3).map(|_| scored_set(weight, 8, None, form)).collect(),
        ..session(week(weeks), weight, 8, 3, 8, None)
    }
}

#[test]
fn test_short_history_evaluates_nothing() {
    let signal = detect(&[
        full_session(week(0), 80.0, 8.0),
        full_session(week(1), 80.0, 8.0),
    ]);
    assert_eq!(signal, PlateauSignal::none());
}

#[test]
fn test_progressing_lifter_is_not_on_plateau() {
    let signal = detect(&[
        full_session(week(0), 75.0, 8.0),
        full_session(week(1), 77.5, 8.0),
        full_session(week(2), 80.0, 8.0),
    ]);

    assert!(!signal.is_plateau);
    assert_eq!(signal.confidence, 0.0);
    assert_eq!(signal.recommended_action, PlateauAction::None);
    assert!(signal.evaluated_indicators.contains(&PlateauIndicator::WeightStagnation));
    assert!(signal.fired_indicators.is_empty());
}

#[test]
fn test_stagnation_alone_stays_below_threshold() {
    let signal = detect(&[
        full_session(week(0), 80.0, 8.0),
        full_session(week(1), 80.0, 8.0),
        full_session(week(2), 80.0, 8.0),
    ]);

    assert!(signal.fired(PlateauIndicator::WeightStagnation));
    // 25 fired of 25 + 35 + 40 evaluated
    assert_eq!(signal.confidence, 25.0);
    assert!(!signal.is_plateau);
    assert!(!signal.recommends_deload());
}

#[test]
fn test_loads_within_half_increment_count_as_stagnant() {
    let signal = detect(&[
        full_session(week(0), 80.0, 8.0),
        full_session(week(1), 80.1, 8.0),
        full_session(week(2), 80.0, 8.0),
    ]);
    assert!(signal.fired(PlateauIndicator::WeightStagnation));
}

#[test]
fn test_rising_rpe_on_flat_load_recommends_deload() {
    let signal = detect(&[
        full_session(week(0), 100.0, 7.0),
        full_session(week(1), 100.0, 8.0),
        full_session(week(2), 100.0, 9.0),
    ]);

    assert!(signal.fired(PlateauIndicator::RpeElevation));
    assert!(signal.fired(PlateauIndicator::WeightStagnation));
    assert!(!signal.fired(PlateauIndicator::CompletionDecline));
    assert_eq!(signal.confidence, 60.0);
    assert!(signal.is_plateau);
    assert!(signal.recommends_deload());
}

#[test]
fn test_rising_rpe_with_rising_load_is_expected() {
    let signal = detect(&[
        full_session(week(0), 100.0, 7.0),
        full_session(week(1), 102.5, 8.0),
        full_session(week(2), 105.0, 9.0),
    ]);
    assert!(!signal.fired(PlateauIndicator::RpeElevation));
    assert!(!signal.is_plateau);
}

#[test]
fn test_completion_decline_recommends_technique_focus() {
    let signal = detect(&[
        session(week(0), 80.0, 8, 3, 8, None),
        session(week(1), 82.5, 7, 3, 8, None),
        session(week(2), 85.0, 6, 3, 8, None),
    ]);

    assert!(signal.fired(PlateauIndicator::CompletionDecline));
    assert!(!signal.evaluated_indicators.contains(&PlateauIndicator::RpeElevation));
    // 40 fired of 25 + 40 evaluated
    assert!((signal.confidence - 61.538).abs() < 1e-2);
    assert_eq!(signal.recommended_action, PlateauAction::TechniqueFocus);
    assert!(!signal.recommends_deload());
}

#[test]
fn test_form_degradation_is_evaluated_only_with_scores() {
    let without = detect(&[
        session(week(0), 60.0, 8, 3, 8, None),
        session(week(1), 62.5, 8, 3, 8, None),
        session(week(2), 65.0, 8, 3, 8, None),
    ]);
    assert!(!without.evaluated_indicators.contains(&PlateauIndicator::FormDegradation));

    let with = detect(&[
        form_session(0, 60.0, 9.0),
        form_session(1, 62.5, 8.0),
        form_session(2, 65.0, 6.5),
    ]);
    assert!(with.fired(PlateauIndicator::FormDegradation));
    // 20 fired of 25 + 40 + 20 evaluated
    assert!(!with.is_plateau);
}

#[test]
fn test_mixed_signals_recommend_periodization_change() {
    let signal = detect(&[
        form_session(0, 60.0, 9.0),
        form_session(1, 60.0, 8.0),
        form_session(2, 60.0, 6.5),
    ]);

    assert!(signal.fired(PlateauIndicator::WeightStagnation));
    assert!(signal.fired(PlateauIndicator::FormDegradation));
    assert!(signal.is_plateau);
    assert_eq!(signal.recommended_action, PlateauAction::PeriodizationChange);
}

#[test]
fn test_threshold_is_configurable() {
    let config = PlateauConfig {
        confidence_threshold: 20.0,
        ..PlateauConfig::default()
    };
    let sessions = [
        full_session(week(0), 80.0, 8.0),
        full_session(week(1), 80.0, 8.0),
        full_session(week(2), 80.0, 8.0),
    ];
    let window: Vec<&SessionRecord> = sessions.iter().collect();

    let signal = PlateauDetector::new(config).detect(&window, INCREMENT);

    assert!(signal.is_plateau);
    assert_eq!(signal.recommended_action, PlateauAction::PeriodizationChange);
}

#[test]
fn test_engine_detects_plateau_for_history() {
    let history = compound_history(
        "Squat",
        vec![
            full_session(week(0), 100.0, 7.0),
            full_session(week(1), 100.0, 8.0),
            full_session(week(2), 100.0, 9.0),
        ],
    );
    let signal = default_engine().detect_plateau(&history).unwrap();
    assert!(signal.recommends_deload());
}

#[test]
fn test_signal_serializes_indicator_names() {
    let signal = detect(&[
        full_session(week(0), 80.0, 8.0),
        full_session(week(1), 80.0, 8.0),
        full_session(week(2), 80.0, 8.0),
    ]);
    let json = serde_json::to_value(&signal).unwrap();
    assert_eq!(json["fired_indicators"][0], "weight_stagnation");
    assert_eq!(json["recommended_action"], "none");
}
