// ABOUTME: Safety configuration bounding every weight recommendation
// ABOUTME: Step sizes per exercise type, increase clamps, and plate rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Safety Configuration
//!
//! Applied uniformly after every progression strategy: positive increases are
//! bounded to `[min_weight_increase, max_weekly_increase]` and the final
//! weight is rounded to the nearest `weight_rounding_increment`.

use fitforge_core::constants::load::{
    COMPOUND_STEP_KG, ISOLATION_STEP_KG, MAX_WEEKLY_INCREASE_KG, MIN_WEIGHT_INCREASE_KG,
    ROUNDING_INCREMENT_KG,
};
use fitforge_core::models::ExerciseType;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Safety clamps and rounding for weight suggestions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafetyConfig {
    /// Maximum load added within a seven day window (kg)
    pub max_weekly_increase: f64,
    /// Smallest positive change worth prescribing (kg)
    pub min_weight_increase: f64,
    /// Plate rounding increment (kg)
    pub weight_rounding_increment: f64,
    /// Progression step for compound lifts (kg)
    pub compound_step: f64,
    /// Progression step for isolation lifts (kg)
    pub isolation_step: f64,
}

impl Default for SafetyConfig {
    fn default() -> Self {
        Self {
            max_weekly_increase: MAX_WEEKLY_INCREASE_KG,
            min_weight_increase: MIN_WEIGHT_INCREASE_KG,
            weight_rounding_increment: ROUNDING_INCREMENT_KG,
            compound_step: COMPOUND_STEP_KG,
            isolation_step: ISOLATION_STEP_KG,
        }
    }
}

impl SafetyConfig {
    /// Progression step for the exercise type
    #[must_use]
    pub const fn step_for(&self, exercise_type: ExerciseType) -> f64 {
        match exercise_type {
            ExerciseType::Compound => self.compound_step,
            ExerciseType::Isolation => self.isolation_step,
        }
    }

    /// Round a weight to the nearest rounding increment
    #[must_use]
    pub fn round_weight(&self, weight: f64) -> f64 {
        let increment = self.weight_rounding_increment;
        (weight / increment).round() * increment
    }

    /// Whether a weight sits on the rounding grid
    #[must_use]
    pub fn is_on_grid(&self, weight: f64) -> bool {
        (self.round_weight(weight) - weight).abs() < 1e-9
    }

    /// Validate the safety configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any increment is non-positive or the minimum
    /// increase exceeds the weekly cap
    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            self.max_weekly_increase,
            self.min_weight_increase,
            self.weight_rounding_increment,
            self.compound_step,
            self.isolation_step,
        ];
        if values.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "safety increments and steps must be positive",
            ));
        }
        if self.min_weight_increase > self.max_weekly_increase {
            return Err(ConfigError::InvalidRange(
                "min_weight_increase must be <= max_weekly_increase",
            ));
        }
        Ok(())
    }
}
