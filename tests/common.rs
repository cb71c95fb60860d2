// ABOUTME: Shared fixtures for integration tests
// ABOUTME: Builders for sets, sessions, histories, workouts and catalog entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::too_many_arguments
)]
//! Shared test utilities for `fitforge`
//!
//! Sessions are dated one week apart from a fixed anchor so the weekly
//! increase budget never spans two sessions unless a test asks for it.

use std::sync::{Arc, Once};

use chrono::{DateTime, Duration, TimeZone, Utc};
use fitforge::intelligence::{EngineConfig, InMemoryExerciseCatalog, ProgressionEngine};
use fitforge::models::{
    ExerciseHistory, ExerciseLogEntry, ExerciseMetadata, ExerciseType, MuscleEngagement,
    MuscleGroup, SessionRecord, SetRecord, WorkoutLog,
};
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

/// Fixed anchor date for deterministic fixtures
pub fn anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 6, 18, 0, 0).unwrap()
}

/// Anchor plus `weeks` weeks
pub fn week(weeks: i64) -> DateTime<Utc> {
    anchor() + Duration::weeks(weeks)
}

/// Anchor plus `days` days
pub fn day(days: i64) -> DateTime<Utc> {
    anchor() + Duration::days(days)
}

/// A completed set
pub fn set(weight: f64, reps: u32, rpe: Option<f64>) -> SetRecord {
    SetRecord {
        weight,
        reps,
        completed: true,
        rpe,
        form_score: None,
        timestamp: anchor(),
    }
}

/// A completed set with a form score
pub fn scored_set(weight: f64, reps: u32, rpe: Option<f64>, form_score: f64) -> SetRecord {
    SetRecord {
        form_score: Some(form_score),
        ..set(weight, reps, rpe)
    }
}

/// A session of `sets` completed sets at the same load, reps and RPE
pub fn session(
    date: DateTime<Utc>,
    weight: f64,
    reps: u32,
    sets: u32,
    target_reps: u32,
    rpe: Option<f64>,
) -> SessionRecord {
    SessionRecord {
        date,
        sets: (0..sets).map(|_| set(weight, reps, rpe)).collect(),
        target_reps,
        target_sets: sets,
        average_rpe: None,
        target_reps_max: None,
    }
}

/// 3×8 at `weight` hitting every rep at `rpe`
pub fn full_session(date: DateTime<Utc>, weight: f64, rpe: f64) -> SessionRecord {
    session(date, weight, 8, 3, 8, Some(rpe))
}

/// Compound history from sessions
pub fn compound_history(name: &str, sessions: Vec<SessionRecord>) -> ExerciseHistory {
    history(name, ExerciseType::Compound, sessions)
}

/// Isolation history from sessions
pub fn isolation_history(name: &str, sessions: Vec<SessionRecord>) -> ExerciseHistory {
    history(name, ExerciseType::Isolation, sessions)
}

/// History with an id derived from the name
pub fn history(
    name: &str,
    exercise_type: ExerciseType,
    sessions: Vec<SessionRecord>,
) -> ExerciseHistory {
    let id = name.to_lowercase().replace(' ', "_");
    ExerciseHistory {
        sessions,
        ..ExerciseHistory::new(id, name, exercise_type)
    }
}

/// Bench press history progressing 75 → 80 kg over three weekly sessions at RPE 8
pub fn bench_press_ready() -> ExerciseHistory {
    compound_history(
        "Bench Press",
        vec![
            full_session(week(0), 75.0, 8.0),
            full_session(week(1), 77.5, 8.0),
            full_session(week(2), 80.0, 8.0),
        ],
    )
}

/// Catalog entry with muscle shares
pub fn exercise_metadata(
    id: &str,
    name: &str,
    exercise_type: ExerciseType,
    shares: &[(MuscleGroup, f64)],
) -> ExerciseMetadata {
    ExerciseMetadata {
        id: id.to_owned(),
        name: name.to_owned(),
        exercise_type,
        category: String::new(),
        equipment: Vec::new(),
        muscle_engagements: shares
            .iter()
            .map(|&(muscle_group, percentage)| MuscleEngagement {
                muscle_group,
                percentage,
            })
            .collect(),
        is_bodyweight: None,
    }
}

/// Catalog with a bench press and a barbell curl
pub fn sample_catalog() -> InMemoryExerciseCatalog {
    InMemoryExerciseCatalog::from_exercises([
        exercise_metadata(
            "bench_press",
            "Bench Press",
            ExerciseType::Compound,
            &[
                (MuscleGroup::Chest, 60.0),
                (MuscleGroup::Triceps, 25.0),
                (MuscleGroup::Shoulders, 15.0),
            ],
        ),
        exercise_metadata(
            "barbell_curl",
            "Barbell Curl",
            ExerciseType::Isolation,
            &[(MuscleGroup::Biceps, 90.0), (MuscleGroup::Forearms, 10.0)],
        ),
    ])
    .unwrap()
}

/// Workout with explicit intensities per exercise
pub fn workout(date: DateTime<Utc>, entries: &[(&str, f64)]) -> WorkoutLog {
    WorkoutLog {
        id: Uuid::new_v4(),
        date,
        exercises: entries
            .iter()
            .map(|&(exercise_id, intensity)| ExerciseLogEntry {
                exercise_id: exercise_id.to_owned(),
                sets: Vec::new(),
                intensity: Some(intensity),
            })
            .collect(),
    }
}

/// Engine with default configuration and an empty catalog
pub fn default_engine() -> ProgressionEngine {
    ProgressionEngine::new(
        EngineConfig::default(),
        Arc::new(InMemoryExerciseCatalog::new()),
    )
}

/// Engine with default configuration and the sample catalog
pub fn catalog_engine() -> ProgressionEngine {
    ProgressionEngine::new(EngineConfig::default(), Arc::new(sample_catalog()))
}

/// Float equality within 1e-9
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
