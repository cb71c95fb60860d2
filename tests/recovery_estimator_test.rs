// ABOUTME: Tests for the per-muscle fatigue model and workout log aggregation
// ABOUTME: Decay endpoints, status boundaries, input rejection and engagement-weighted intensity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use chrono::Duration;
use common::{approx_eq, catalog_engine, day, sample_catalog, set, workout};
use fitforge::errors::ErrorCode;
use fitforge::intelligence::config::intelligence::RecoveryConfig;
use fitforge::intelligence::{ExerciseCatalog, RecoveryEstimator, RecoveryStatus};
use fitforge::models::{ExerciseLogEntry, MuscleGroup};

fn estimator() -> RecoveryEstimator {
    RecoveryEstimator::new(RecoveryConfig::default())
}

#[test]
fn test_fresh_workout_is_fully_fatigued() {
    let state = estimator()
        .estimate(MuscleGroup::Chest, day(0), 1.0, day(0))
        .unwrap();

    assert_eq!(state.current_fatigue_percentage, 100.0);
    assert_eq!(state.recovery_status, RecoveryStatus::Overworked);
    // 30% of the 5-day window must pass before leaving the overworked band
    assert!(approx_eq(state.days_until_optimal, 1.5));
}

#[test]
fn test_light_session_clears_within_window() {
    let state = estimator()
        .estimate(MuscleGroup::Biceps, day(0), 0.2, day(5))
        .unwrap();

    assert_eq!(state.current_fatigue_percentage, 0.0);
    assert_eq!(state.recovery_status, RecoveryStatus::Undertrained);
    assert_eq!(state.days_until_optimal, 0.0);
}

#[test]
fn test_fatigue_decays_linearly_over_effective_window() {
    let now = day(2) + Duration::hours(12);
    let state = estimator()
        .estimate(MuscleGroup::Quadriceps, day(0), 1.0, now)
        .unwrap();

    assert!(approx_eq(state.current_fatigue_percentage, 50.0));
    assert_eq!(state.recovery_status, RecoveryStatus::Optimal);
    assert_eq!(state.days_until_optimal, 0.0);
}

#[test]
fn test_higher_intensity_recovers_slower() {
    let light = estimator()
        .estimate(MuscleGroup::Glutes, day(0), 0.3, day(1))
        .unwrap();
    let heavy = estimator()
        .estimate(MuscleGroup::Glutes, day(0), 0.9, day(1))
        .unwrap();
    assert!(heavy.current_fatigue_percentage > light.current_fatigue_percentage);
}

#[test]
fn test_every_intensity_fully_recovers_within_recovery_window() {
    let estimator = estimator();
    for intensity in [0.0, 0.5, 1.0] {
        let state = estimator
            .estimate(MuscleGroup::Hamstrings, day(0), intensity, day(5))
            .unwrap();
        assert_eq!(state.current_fatigue_percentage, 0.0, "intensity {intensity}");
    }

    // intensity 0 halves the window to 2.5 days
    let light = estimator
        .estimate(
            MuscleGroup::Hamstrings,
            day(0),
            0.0,
            day(2) + Duration::hours(12),
        )
        .unwrap();
    assert_eq!(light.current_fatigue_percentage, 0.0);
}

#[test]
fn test_fatigue_stays_within_bounds() {
    let estimator = estimator();
    for hours in (0..=24 * 10).step_by(7) {
        for intensity in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let state = estimator
                .estimate(
                    MuscleGroup::Lats,
                    day(0),
                    intensity,
                    day(0) + Duration::hours(hours),
                )
                .unwrap();
            assert!((0.0..=100.0).contains(&state.current_fatigue_percentage));
            assert!(state.days_until_optimal >= 0.0);
        }
    }
}

#[test]
fn test_status_boundaries() {
    let estimator = estimator();
    assert_eq!(estimator.classify(70.0), RecoveryStatus::Overworked);
    assert_eq!(estimator.classify(69.99), RecoveryStatus::Optimal);
    assert_eq!(estimator.classify(30.0), RecoveryStatus::Optimal);
    assert_eq!(estimator.classify(29.99), RecoveryStatus::Undertrained);
    assert_eq!(estimator.classify(100.0), RecoveryStatus::Overworked);
    assert_eq!(estimator.classify(0.0), RecoveryStatus::Undertrained);
}

#[test]
fn test_future_workout_is_rejected() {
    let error = estimator()
        .estimate(MuscleGroup::Chest, day(2), 0.5, day(1))
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(error.context.resource_id.as_deref(), Some("chest"));
}

#[test]
fn test_intensity_outside_unit_range_is_rejected() {
    let estimator = estimator();
    for intensity in [-0.1, 1.5, f64::NAN] {
        let error = estimator
            .estimate(MuscleGroup::Chest, day(0), intensity, day(1))
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
    }
}

#[test]
fn test_engine_aggregates_workouts_per_muscle() {
    let workouts = vec![
        workout(day(0), &[("bench_press", 1.0)]),
        workout(day(2), &[("barbell_curl", 0.8)]),
    ];

    let states = catalog_engine().estimate_recovery(&workouts, day(3)).unwrap();

    let muscles: Vec<MuscleGroup> = states.iter().map(|s| s.muscle_group).collect();
    assert_eq!(
        muscles,
        vec![
            MuscleGroup::Chest,
            MuscleGroup::Shoulders,
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
            MuscleGroup::Forearms,
        ]
    );

    // chest: intensity 1.0 × 60% share, window 5 × 0.8 = 4 days, 3 days elapsed
    let chest = &states[0];
    assert!(approx_eq(chest.workout_intensity, 0.6));
    assert!(approx_eq(chest.current_fatigue_percentage, 25.0));
    assert_eq!(chest.recovery_status, RecoveryStatus::Undertrained);

    // biceps: intensity 0.8 × 90% share, one day into a 4.3-day window
    let biceps = &states[2];
    assert!(approx_eq(biceps.workout_intensity, 0.72));
    assert!((biceps.current_fatigue_percentage - 76.744).abs() < 1e-3);
    assert_eq!(biceps.recovery_status, RecoveryStatus::Overworked);
}

#[test]
fn test_latest_workout_replaces_earlier_load() {
    let workouts = vec![
        workout(day(1), &[("bench_press", 0.5)]),
        workout(day(0), &[("bench_press", 1.0)]),
    ];

    let states = catalog_engine().estimate_recovery(&workouts, day(1)).unwrap();
    let chest = states
        .iter()
        .find(|s| s.muscle_group == MuscleGroup::Chest)
        .unwrap();

    assert_eq!(chest.last_workout_date, day(1));
    assert!(approx_eq(chest.workout_intensity, 0.3));
}

#[test]
fn test_unknown_exercises_are_skipped() {
    let workouts = vec![workout(day(0), &[("zercher_squat", 0.9), ("barbell_curl", 0.5)])];

    let states = catalog_engine().estimate_recovery(&workouts, day(1)).unwrap();

    assert_eq!(states.len(), 2);
    assert!(states
        .iter()
        .all(|s| matches!(s.muscle_group, MuscleGroup::Biceps | MuscleGroup::Forearms)));
}

#[test]
fn test_intensity_derived_from_set_rpe() {
    let mut log = workout(day(0), &[]);
    log.exercises.push(ExerciseLogEntry {
        exercise_id: "barbell_curl".to_owned(),
        sets: vec![set(30.0, 10, Some(8.0)), set(30.0, 10, Some(8.0))],
        intensity: None,
    });
    let engagements = sample_catalog().muscle_engagements();

    let states = estimator()
        .estimate_all(&[log], &engagements, day(1))
        .unwrap();

    let biceps = states
        .iter()
        .find(|s| s.muscle_group == MuscleGroup::Biceps)
        .unwrap();
    assert!(approx_eq(biceps.workout_intensity, 0.8 * 0.9));
}

#[test]
fn test_invalid_workout_entry_is_rejected() {
    let workouts = vec![workout(day(0), &[("bench_press", 1.2)])];
    let error = catalog_engine()
        .estimate_recovery(&workouts, day(1))
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_no_workouts_yields_no_states() {
    let states = catalog_engine().estimate_recovery(&[], day(0)).unwrap();
    assert!(states.is_empty());
}

#[test]
fn test_future_workout_in_log_is_rejected() {
    let workouts = vec![workout(day(5), &[("bench_press", 0.5)])];
    let error = catalog_engine()
        .estimate_recovery(&workouts, day(1))
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}
