// ABOUTME: Workout log model consumed by the muscle recovery estimator
// ABOUTME: Each entry names an exercise and either an explicit or RPE-derived intensity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::session::SetRecord;
use crate::constants::rpe::{DEFAULT_RPE, MAX_RPE};
use crate::errors::{AppError, AppResult};

/// A completed workout touching one or more exercises
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutLog {
    /// Workout identifier
    pub id: Uuid,
    /// When the workout took place
    pub date: DateTime<Utc>,
    /// Exercises performed
    pub exercises: Vec<ExerciseLogEntry>,
}

/// One exercise inside a workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLogEntry {
    /// Exercise identifier (key into the engagement map)
    pub exercise_id: String,
    /// Sets performed, used to derive intensity when none is given
    #[serde(default)]
    pub sets: Vec<SetRecord>,
    /// Explicit intensity (0-1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f64>,
}

impl ExerciseLogEntry {
    /// Intensity: explicit value, else mean set RPE / 10, else the RPE-7 default
    #[must_use]
    pub fn resolved_intensity(&self) -> f64 {
        if let Some(intensity) = self.intensity {
            return intensity;
        }
        let (sum, count) = self
            .sets
            .iter()
            .filter_map(|set| set.rpe)
            .fold((0.0, 0_u32), |(sum, count), rpe| (sum + rpe, count + 1));
        let rpe = if count > 0 {
            sum / f64::from(count)
        } else {
            DEFAULT_RPE
        };
        rpe / MAX_RPE
    }

    /// Validate the entry
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an intensity outside 0-1 or an invalid set
    pub fn validate(&self) -> AppResult<()> {
        if let Some(intensity) = self.intensity {
            if !intensity.is_finite() || !(0.0..=1.0).contains(&intensity) {
                return Err(AppError::invalid_input(format!(
                    "intensity must be between 0 and 1, got {intensity}"
                ))
                .with_resource_id(self.exercise_id.clone()));
            }
        }
        for set in &self.sets {
            set.validate()
                .map_err(|e| e.with_resource_id(self.exercise_id.clone()))?;
        }
        Ok(())
    }
}

impl WorkoutLog {
    /// Validate every entry
    ///
    /// # Errors
    ///
    /// Returns the first entry validation failure
    pub fn validate(&self) -> AppResult<()> {
        self.exercises.iter().try_for_each(ExerciseLogEntry::validate)
    }
}
