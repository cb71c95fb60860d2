// ABOUTME: Benchmark fixtures generating deterministic training histories and workout logs
// ABOUTME: Provides reproducible inputs for progression and recovery performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for generating realistic strength training data.
//!
//! Every generator is a pure function of its index so runs are comparable.

use chrono::{DateTime, Duration, TimeZone, Utc};
use fitforge::intelligence::InMemoryExerciseCatalog;
use fitforge::models::{
    ExerciseHistory, ExerciseLogEntry, ExerciseMetadata, ExerciseType, MuscleEngagement,
    MuscleGroup, SessionRecord, SetRecord, WorkoutLog,
};
use uuid::Uuid;

/// Predefined history sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// A few weeks of logging
    Short,
    /// A typical year of weekly sessions
    Typical,
    /// Several years of logging
    Long,
}

impl HistorySize {
    #[must_use]
    pub const fn sessions(self) -> usize {
        match self {
            Self::Short => 6,
            Self::Typical => 52,
            Self::Long => 250,
        }
    }
}

/// Exercise ids shared by the catalog and the workout generator
const EXERCISES: [(&str, ExerciseType, &[(MuscleGroup, f64)]); 4] = [
    (
        "bench_press",
        ExerciseType::Compound,
        &[
            (MuscleGroup::Chest, 60.0),
            (MuscleGroup::Triceps, 25.0),
            (MuscleGroup::Shoulders, 15.0),
        ],
    ),
    (
        "back_squat",
        ExerciseType::Compound,
        &[
            (MuscleGroup::Quadriceps, 55.0),
            (MuscleGroup::Glutes, 30.0),
            (MuscleGroup::LowerBack, 15.0),
        ],
    ),
    (
        "barbell_row",
        ExerciseType::Compound,
        &[
            (MuscleGroup::Lats, 50.0),
            (MuscleGroup::UpperBack, 35.0),
            (MuscleGroup::Biceps, 15.0),
        ],
    ),
    (
        "dumbbell_curl",
        ExerciseType::Isolation,
        &[(MuscleGroup::Biceps, 85.0), (MuscleGroup::Forearms, 15.0)],
    ),
];

fn base_date() -> DateTime<Utc> {
    Utc.timestamp_opt(1_735_689_600, 0)
        .single()
        .unwrap_or_default()
}

/// Generate one session; load climbs with periodic stalls and RPE cycles 6.5-9.5
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap
)]
fn generate_session(index: usize, exercise_type: ExerciseType) -> SessionRecord {
    let date = base_date() + Duration::weeks(index as i64);
    let step = match exercise_type {
        ExerciseType::Compound => 2.5_f64,
        ExerciseType::Isolation => 1.25_f64,
    };
    let weight = step.mul_add((index / 2) as f64, 40.0);
    let rpe = 0.5_f64.mul_add((index % 7) as f64, 6.5);
    let missed = u32::from(index % 5 == 4);

    let sets = (0..3)
        .map(|set_index| SetRecord {
            weight,
            reps: if set_index == 2 { 8 - missed * 2 } else { 8 },
            completed: true,
            rpe: Some(rpe),
            form_score: Some((-0.5_f64).mul_add((index % 3) as f64, 8.0)),
            timestamp: date + Duration::minutes(set_index * 4),
        })
        .collect();

    SessionRecord {
        date,
        sets,
        target_reps: 8,
        target_sets: 3,
        average_rpe: None,
        target_reps_max: (exercise_type == ExerciseType::Isolation).then_some(12),
    }
}

/// Generate a history of the given size for an exercise
#[must_use]
pub fn generate_history(exercise_index: usize, size: HistorySize) -> ExerciseHistory {
    let (id, exercise_type, _) = EXERCISES[exercise_index % EXERCISES.len()];
    ExerciseHistory {
        sessions: (0..size.sessions())
            .map(|index| generate_session(index + exercise_index, exercise_type))
            .collect(),
        ..ExerciseHistory::new(id, id.replace('_', " "), exercise_type)
    }
}

/// Generate `count` histories cycling through the fixture exercises
#[must_use]
pub fn generate_histories(count: usize, size: HistorySize) -> Vec<ExerciseHistory> {
    (0..count)
        .map(|index| generate_history(index, size))
        .collect()
}

/// Catalog with muscle engagement shares for every fixture exercise
#[must_use]
pub fn generate_catalog() -> InMemoryExerciseCatalog {
    let mut catalog = InMemoryExerciseCatalog::new();
    for (id, exercise_type, shares) in EXERCISES {
        catalog.insert(ExerciseMetadata {
            id: id.to_owned(),
            name: id.replace('_', " "),
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
        });
    }
    catalog
}

/// Generate `count` daily workouts each touching two fixture exercises
#[allow(clippy::cast_possible_wrap, clippy::cast_precision_loss)]
#[must_use]
pub fn generate_workouts(count: usize) -> Vec<WorkoutLog> {
    (0..count)
        .map(|index| WorkoutLog {
            id: Uuid::new_v4(),
            date: base_date() + Duration::days(index as i64),
            exercises: (0..2)
                .map(|offset| ExerciseLogEntry {
                    exercise_id: EXERCISES[(index + offset) % EXERCISES.len()].0.to_owned(),
                    sets: Vec::new(),
                    intensity: Some(0.1_f64.mul_add((index % 5) as f64, 0.5)),
                })
                .collect(),
        })
        .collect()
}

/// Evaluation time after the last generated workout
#[allow(clippy::cast_possible_wrap)]
#[must_use]
pub fn recovery_now(workout_count: usize) -> DateTime<Utc> {
    base_date() + Duration::days(workout_count as i64 + 1)
}
