// ABOUTME: Per-muscle fatigue model from elapsed time since training and workout intensity
// ABOUTME: Classifies muscles as overworked, optimal or undertrained and aggregates workout logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recovery Estimator
//!
//! Fatigue decays linearly to zero over an effective recovery window that
//! scales with intensity:
//!
//! ```text
//! effective_window = recovery_window_days × (0.5 + 0.5 × intensity)
//! fatigue          = max(0, 100 − min(days_elapsed / effective_window, 1) × 100)
//! ```
//!
//! At maximal intensity a muscle needs the full window; a light session
//! clears in half of it. The current time is always supplied by the caller.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use fitforge_core::constants::time_constants::SECONDS_PER_DAY_F64;
use fitforge_core::errors::{AppError, AppResult};
use fitforge_core::models::{MuscleEngagementMap, MuscleGroup, WorkoutLog};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::intelligence::RecoveryConfig;

/// Share of the recovery window that is intensity-independent
const BASE_WINDOW_SHARE: f64 = 0.5;

/// Recovery classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryStatus {
    /// Fatigue at or above the overworked threshold
    Overworked,
    /// Between the two thresholds
    Optimal,
    /// Fatigue below the undertrained threshold
    Undertrained,
}

/// Recovery state of one muscle group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuscleRecoveryState {
    /// Muscle group
    pub muscle_group: MuscleGroup,
    /// Most recent workout that loaded the muscle
    pub last_workout_date: DateTime<Utc>,
    /// Intensity of that workout (0-1)
    pub workout_intensity: f64,
    /// Remaining fatigue (0-100)
    pub current_fatigue_percentage: f64,
    /// Classification of the fatigue
    pub recovery_status: RecoveryStatus,
    /// Days until fatigue falls to the overworked boundary (0 if already there)
    pub days_until_optimal: f64,
}

/// Estimates muscle fatigue
#[derive(Debug, Clone, Default)]
pub struct RecoveryEstimator {
    config: RecoveryConfig,
}

impl RecoveryEstimator {
    /// Create an estimator
    #[must_use]
    pub const fn new(config: RecoveryConfig) -> Self {
        Self { config }
    }

    /// Recovery state for one muscle group
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the intensity is outside 0-1 or the workout
    /// date lies after `now`
    pub fn estimate(
        &self,
        muscle_group: MuscleGroup,
        last_workout_date: DateTime<Utc>,
        workout_intensity: f64,
        now: DateTime<Utc>,
    ) -> AppResult<MuscleRecoveryState> {
        if !workout_intensity.is_finite() || !(0.0..=1.0).contains(&workout_intensity) {
            return Err(AppError::invalid_input(format!(
                "workout intensity must be between 0 and 1, got {workout_intensity}"
            ))
            .with_resource_id(muscle_group.as_str()));
        }
        if last_workout_date > now {
            return Err(AppError::invalid_input(format!(
                "workout date {last_workout_date} is in the future relative to {now}"
            ))
            .with_resource_id(muscle_group.as_str()));
        }

        let days_elapsed = elapsed_days(last_workout_date, now);
        let window = self.effective_window(workout_intensity);
        let fatigue = fatigue_after(days_elapsed, window);
        let recovery_status = self.classify(fatigue);

        let boundary_days = (1.0 - self.config.overworked_threshold / 100.0) * window;
        let days_until_optimal = (boundary_days - days_elapsed).max(0.0);

        Ok(MuscleRecoveryState {
            muscle_group,
            last_workout_date,
            workout_intensity,
            current_fatigue_percentage: fatigue,
            recovery_status,
            days_until_optimal,
        })
    }

    /// Recovery state for every muscle loaded by the given workouts
    ///
    /// Each muscle uses its most recent workout date. The intensity is the
    /// engagement-weighted mean of the entries on that date, scaled by the
    /// peak engagement share. Exercises missing from the engagement map are
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an invalid workout, intensity or future date
    pub fn estimate_all(
        &self,
        workouts: &[WorkoutLog],
        engagements: &MuscleEngagementMap,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<MuscleRecoveryState>> {
        let mut latest: BTreeMap<MuscleGroup, MuscleLoad> = BTreeMap::new();

        for workout in workouts {
            workout
                .validate()
                .map_err(|e| e.with_resource_id(workout.id.to_string()))?;
            for entry in &workout.exercises {
                let Some(shares) = engagements.get(&entry.exercise_id) else {
                    warn!(
                        exercise_id = %entry.exercise_id,
                        "No muscle engagement data, skipping exercise"
                    );
                    continue;
                };
                let intensity = entry.resolved_intensity();
                for share in shares {
                    latest
                        .entry(share.muscle_group)
                        .and_modify(|load| load.record(workout.date, intensity, share.percentage))
                        .or_insert_with(|| {
                            MuscleLoad::new(workout.date, intensity, share.percentage)
                        });
                }
            }
        }

        let states = latest
            .into_iter()
            .map(|(muscle, load)| self.estimate(muscle, load.date, load.intensity(), now))
            .collect::<AppResult<Vec<_>>>()?;

        debug!(
            workouts = workouts.len(),
            muscles = states.len(),
            "Estimated muscle recovery"
        );
        Ok(states)
    }

    fn effective_window(&self, intensity: f64) -> f64 {
        let factor = BASE_WINDOW_SHARE.mul_add(intensity, BASE_WINDOW_SHARE);
        self.config.recovery_window_days * factor
    }

    /// Classify a fatigue percentage against the configured thresholds
    #[must_use]
    pub fn classify(&self, fatigue: f64) -> RecoveryStatus {
        if fatigue >= self.config.overworked_threshold {
            RecoveryStatus::Overworked
        } else if fatigue >= self.config.undertrained_threshold {
            RecoveryStatus::Optimal
        } else {
            RecoveryStatus::Undertrained
        }
    }
}

/// Loading of one muscle on its most recent training date
struct MuscleLoad {
    date: DateTime<Utc>,
    weighted_intensity: f64,
    total_share: f64,
    peak_share: f64,
}

impl MuscleLoad {
    fn new(date: DateTime<Utc>, intensity: f64, share: f64) -> Self {
        Self {
            date,
            weighted_intensity: intensity * share,
            total_share: share,
            peak_share: share,
        }
    }

    fn record(&mut self, date: DateTime<Utc>, intensity: f64, share: f64) {
        if date > self.date {
            *self = Self::new(date, intensity, share);
        } else if date == self.date {
            self.weighted_intensity += intensity * share;
            self.total_share += share;
            self.peak_share = self.peak_share.max(share);
        }
    }

    fn intensity(&self) -> f64 {
        if self.total_share <= 0.0 {
            return 0.0;
        }
        let mean = self.weighted_intensity / self.total_share;
        (mean * self.peak_share / 100.0).clamp(0.0, 1.0)
    }
}

fn fatigue_after(days_elapsed: f64, window: f64) -> f64 {
    let recovered = if window > 0.0 {
        (days_elapsed / window).min(1.0)
    } else {
        1.0
    };
    recovered.mul_add(-100.0, 100.0).clamp(0.0, 100.0)
}

fn elapsed_days(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    let duration = to - from;
    duration.num_milliseconds() as f64 / 1000.0 / SECONDS_PER_DAY_F64
}
