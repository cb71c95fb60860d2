// ABOUTME: Exercise classification, per-exercise training history, and catalog metadata
// ABOUTME: Validates incoming histories and reconstructs chronological session order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use super::equipment::Equipment;
use super::muscle::MuscleEngagement;
use super::session::SessionRecord;
use crate::errors::{AppError, AppResult};

/// Movement classification driving step sizes and strategy choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    /// Multi-joint movement engaging several large muscle groups
    Compound,
    /// Single-joint movement targeting one primary muscle
    Isolation,
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compound => write!(f, "compound"),
            Self::Isolation => write!(f, "isolation"),
        }
    }
}

/// Logged history for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseHistory {
    /// Exercise identifier
    pub exercise_id: String,
    /// Display name
    pub exercise_name: String,
    /// Compound or isolation
    pub exercise_type: ExerciseType,
    /// Catalog category (push, pull, legs, ...)
    #[serde(default)]
    pub category: String,
    /// Sessions, ideally oldest first
    #[serde(default)]
    pub sessions: Vec<SessionRecord>,
}

impl ExerciseHistory {
    /// Create an empty history
    pub fn new(
        exercise_id: impl Into<String>,
        exercise_name: impl Into<String>,
        exercise_type: ExerciseType,
    ) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            exercise_name: exercise_name.into(),
            exercise_type,
            category: String::new(),
            sessions: Vec::new(),
        }
    }

    /// Builder-style session append
    #[must_use]
    pub fn with_session(mut self, session: SessionRecord) -> Self {
        self.sessions.push(session);
        self
    }

    /// Whether no sessions were logged
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Sessions sorted oldest → newest by date (stable for equal dates)
    #[must_use]
    pub fn chronological_sessions(&self) -> Vec<&SessionRecord> {
        let mut sessions: Vec<&SessionRecord> = self.sessions.iter().collect();
        sessions.sort_by_key(|session| session.date);
        sessions
    }

    /// Most recent session by date
    #[must_use]
    pub fn latest_session(&self) -> Option<&SessionRecord> {
        self.sessions.iter().max_by_key(|session| session.date)
    }

    /// Validate the whole history at the system boundary
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` when the exercise id is blank and
    /// `InvalidInput` (tagged with the exercise id) for any invalid session
    pub fn validate(&self) -> AppResult<()> {
        if self.exercise_id.trim().is_empty() {
            return Err(AppError::missing_field("exercise_id"));
        }
        for (index, session) in self.sessions.iter().enumerate() {
            session.validate().map_err(|mut e| {
                e.message = format!("session {index}: {}", e.message);
                e.with_resource_id(self.exercise_id.clone())
            })?;
        }
        Ok(())
    }
}

/// Exercise metadata supplied by an exercise catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseMetadata {
    /// Exercise identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Compound or isolation
    pub exercise_type: ExerciseType,
    /// Catalog category
    #[serde(default)]
    pub category: String,
    /// Required equipment, normalised from string or object shapes
    #[serde(default)]
    pub equipment: Vec<Equipment>,
    /// Muscle engagement shares
    #[serde(default)]
    pub muscle_engagements: Vec<MuscleEngagement>,
    /// Explicit bodyweight flag, when the catalog curates one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_bodyweight: Option<bool>,
}

impl ExerciseMetadata {
    /// Validate engagement shares
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` tagged with the exercise id for any invalid share
    pub fn validate(&self) -> AppResult<()> {
        for engagement in &self.muscle_engagements {
            engagement
                .validate()
                .map_err(|e| e.with_resource_id(self.id.clone()))?;
        }
        Ok(())
    }
}
