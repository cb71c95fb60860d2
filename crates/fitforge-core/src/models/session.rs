// ABOUTME: Set and session records logged by the lifter
// ABOUTME: Boundary validation plus derived views (representative weight, volume, completion)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::form::{MAX_FORM_SCORE, MIN_FORM_SCORE};
use crate::constants::load::MAX_SET_WEIGHT_KG;
use crate::constants::rpe::{MAX_RPE, MIN_RPE};
use crate::errors::{AppError, AppResult};

/// A single logged set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetRecord {
    /// Load lifted (kg), zero for unloaded bodyweight sets
    pub weight: f64,
    /// Repetitions performed
    pub reps: u32,
    /// Whether the set was completed as prescribed
    pub completed: bool,
    /// Rate of perceived exertion (1-10)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpe: Option<f64>,
    /// Technique quality score (0-10) when the client records one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_score: Option<f64>,
    /// When the set was logged
    pub timestamp: DateTime<Utc>,
}

impl SetRecord {
    /// Load × reps for this set
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.weight * f64::from(self.reps)
    }

    /// Validate the set at the system boundary
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for negative, non-finite or implausibly large
    /// weight, an RPE outside 1-10, or a form score outside 0-10
    pub fn validate(&self) -> AppResult<()> {
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(AppError::invalid_input(format!(
                "weight must be a non-negative number, got {}",
                self.weight
            ))
            .with_field("weight"));
        }
        if self.weight > MAX_SET_WEIGHT_KG {
            return Err(AppError::invalid_input(format!(
                "weight must not exceed {MAX_SET_WEIGHT_KG} kg, got {}",
                self.weight
            ))
            .with_field("weight"));
        }
        if let Some(rpe) = self.rpe {
            if !(MIN_RPE..=MAX_RPE).contains(&rpe) {
                return Err(AppError::invalid_input(format!(
                    "rpe must be between {MIN_RPE} and {MAX_RPE}, got {rpe}"
                )));
            }
        }
        if let Some(score) = self.form_score {
            if !(MIN_FORM_SCORE..=MAX_FORM_SCORE).contains(&score) {
                return Err(AppError::invalid_input(format!(
                    "form_score must be between {MIN_FORM_SCORE} and {MAX_FORM_SCORE}, got {score}"
                )));
            }
        }
        Ok(())
    }
}

/// One training session for a single exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Session date
    pub date: DateTime<Utc>,
    /// Sets performed
    pub sets: Vec<SetRecord>,
    /// Prescribed reps per set (the rep-range floor when a range is used)
    pub target_reps: u32,
    /// Prescribed number of working sets
    pub target_sets: u32,
    /// Session RPE reported by the lifter, overriding the per-set mean
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_rpe: Option<f64>,
    /// Explicit rep-range ceiling for double progression
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_reps_max: Option<u32>,
}

impl SessionRecord {
    /// Sets marked completed
    pub fn completed_sets(&self) -> impl Iterator<Item = &SetRecord> {
        self.sets.iter().filter(|set| set.completed)
    }

    /// Heaviest completed-set weight, falling back to the heaviest logged set
    #[must_use]
    pub fn representative_weight(&self) -> f64 {
        max_weight(self.completed_sets())
            .or_else(|| max_weight(self.sets.iter()))
            .unwrap_or(0.0)
    }

    /// Σ weight × reps over completed sets
    #[must_use]
    pub fn completed_volume(&self) -> f64 {
        self.completed_sets().map(SetRecord::volume).sum()
    }

    /// Total reps over completed sets
    #[must_use]
    pub fn completed_reps(&self) -> u32 {
        self.completed_sets().map(|set| set.reps).sum()
    }

    /// Prescribed reps × prescribed sets
    #[must_use]
    pub const fn target_total_reps(&self) -> u32 {
        self.target_reps.saturating_mul(self.target_sets)
    }

    /// Completed reps over prescribed reps, unclamped
    #[must_use]
    pub fn completion_ratio(&self) -> f64 {
        let target = self.target_total_reps();
        if target == 0 {
            return 0.0;
        }
        f64::from(self.completed_reps()) / f64::from(target)
    }

    /// Session RPE: the reported average, else the mean of per-set values
    #[must_use]
    pub fn session_rpe(&self) -> Option<f64> {
        self.average_rpe
            .or_else(|| mean(self.sets.iter().filter_map(|set| set.rpe)))
    }

    /// Mean form score across sets that recorded one
    #[must_use]
    pub fn mean_form_score(&self) -> Option<f64> {
        mean(self.sets.iter().filter_map(|set| set.form_score))
    }

    /// Whether at least `target_sets` completed sets reached `target_reps`
    #[must_use]
    pub fn met_targets(&self) -> bool {
        let sets_at_target = self
            .completed_sets()
            .filter(|set| set.reps >= self.target_reps)
            .count();
        sets_at_target >= self.target_sets as usize
    }

    /// Validate the session and every set at the system boundary
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the offending set when any set is invalid,
    /// or when targets are zero or the rep ceiling is below the floor
    pub fn validate(&self) -> AppResult<()> {
        if self.target_reps == 0 {
            return Err(AppError::invalid_input("target_reps must be at least 1"));
        }
        if self.target_sets == 0 {
            return Err(AppError::invalid_input("target_sets must be at least 1"));
        }
        if let Some(ceiling) = self.target_reps_max {
            if ceiling < self.target_reps {
                return Err(AppError::invalid_input(format!(
                    "target_reps_max ({ceiling}) must not be below target_reps ({})",
                    self.target_reps
                )));
            }
        }
        if let Some(rpe) = self.average_rpe {
            if !(MIN_RPE..=MAX_RPE).contains(&rpe) {
                return Err(AppError::invalid_input(format!(
                    "average_rpe must be between {MIN_RPE} and {MAX_RPE}, got {rpe}"
                )));
            }
        }
        for (index, set) in self.sets.iter().enumerate() {
            set.validate().map_err(|mut e| {
                e.message = format!("set {index}: {}", e.message);
                e
            })?;
        }
        Ok(())
    }
}

fn max_weight<'a>(sets: impl Iterator<Item = &'a SetRecord>) -> Option<f64> {
    sets.map(|set| set.weight).reduce(f64::max)
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0_u32), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / f64::from(count))
}
