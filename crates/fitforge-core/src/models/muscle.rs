// ABOUTME: Muscle group enumeration and per-exercise muscle engagement shares
// ABOUTME: Engagement maps link exercise ids to the muscles they load and by how much
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::{AppError, AppResult};

/// Muscle groups tracked by the recovery model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    /// Pectorals
    Chest,
    /// Deltoids
    Shoulders,
    /// Biceps
    Biceps,
    /// Triceps
    Triceps,
    /// Forearms and grip
    Forearms,
    /// Trapezius and rhomboids
    UpperBack,
    /// Latissimus dorsi
    Lats,
    /// Spinal erectors
    LowerBack,
    /// Abdominals and obliques
    Core,
    /// Gluteals
    Glutes,
    /// Quadriceps
    Quadriceps,
    /// Hamstrings
    Hamstrings,
    /// Calves
    Calves,
}

impl MuscleGroup {
    /// Every tracked muscle group
    pub const ALL: [Self; 13] = [
        Self::Chest,
        Self::Shoulders,
        Self::Biceps,
        Self::Triceps,
        Self::Forearms,
        Self::UpperBack,
        Self::Lats,
        Self::LowerBack,
        Self::Core,
        Self::Glutes,
        Self::Quadriceps,
        Self::Hamstrings,
        Self::Calves,
    ];

    /// Snake-case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Shoulders => "shoulders",
            Self::Biceps => "biceps",
            Self::Triceps => "triceps",
            Self::Forearms => "forearms",
            Self::UpperBack => "upper_back",
            Self::Lats => "lats",
            Self::LowerBack => "lower_back",
            Self::Core => "core",
            Self::Glutes => "glutes",
            Self::Quadriceps => "quadriceps",
            Self::Hamstrings => "hamstrings",
            Self::Calves => "calves",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MuscleGroup {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|group| group.as_str() == s)
            .ok_or_else(|| AppError::not_found(format!("Muscle group '{s}'")))
    }
}

/// Share of an exercise's work landing on one muscle group
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MuscleEngagement {
    /// Muscle group
    pub muscle_group: MuscleGroup,
    /// Engagement percentage (0-100)
    pub percentage: f64,
}

impl MuscleEngagement {
    /// Validate the engagement share
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the percentage is not within 0-100
    pub fn validate(&self) -> AppResult<()> {
        if !self.percentage.is_finite() || !(0.0..=100.0).contains(&self.percentage) {
            return Err(AppError::invalid_input(format!(
                "engagement percentage for {} must be between 0 and 100, got {}",
                self.muscle_group, self.percentage
            )));
        }
        Ok(())
    }
}

/// Exercise id → muscle engagement shares
pub type MuscleEngagementMap = HashMap<String, Vec<MuscleEngagement>>;
