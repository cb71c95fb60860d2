// ABOUTME: Exercise metadata lookup injected into the engine, with an in-memory implementation
// ABOUTME: Bodyweight detection as an ordered chain of pure fallback strategies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Exercise Catalog
//!
//! The engine never reaches for a process-wide exercise database; callers
//! construct a catalog and hand it to [`crate::ProgressionEngine::new`].

use std::collections::HashMap;

use fitforge_core::errors::AppResult;
use fitforge_core::models::{
    Equipment, ExerciseHistory, ExerciseMetadata, ExerciseType, MuscleEngagementMap,
};
use tracing::debug;

use crate::progression_calculator::StartingLoad;

/// Source of exercise metadata
pub trait ExerciseCatalog: Send + Sync {
    /// Metadata for an exercise id, if known
    fn exercise(&self, exercise_id: &str) -> Option<&ExerciseMetadata>;

    /// Muscle engagement shares keyed by exercise id
    fn muscle_engagements(&self) -> MuscleEngagementMap;
}

/// Catalog held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryExerciseCatalog {
    exercises: HashMap<String, ExerciseMetadata>,
}

impl InMemoryExerciseCatalog {
    /// Empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from metadata records, validating each
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for any record with an invalid engagement share
    pub fn from_exercises(exercises: impl IntoIterator<Item = ExerciseMetadata>) -> AppResult<Self> {
        let mut catalog = Self::new();
        for exercise in exercises {
            exercise.validate()?;
            catalog.insert(exercise);
        }
        debug!(exercises = catalog.len(), "Loaded exercise catalog");
        Ok(catalog)
    }

    /// Add or replace an exercise
    pub fn insert(&mut self, exercise: ExerciseMetadata) {
        self.exercises.insert(exercise.id.clone(), exercise);
    }

    /// Number of exercises
    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

impl ExerciseCatalog for InMemoryExerciseCatalog {
    fn exercise(&self, exercise_id: &str) -> Option<&ExerciseMetadata> {
        self.exercises.get(exercise_id)
    }

    fn muscle_engagements(&self) -> MuscleEngagementMap {
        self.exercises
            .values()
            .map(|exercise| (exercise.id.clone(), exercise.muscle_engagements.clone()))
            .collect()
    }
}

/// A single bodyweight detection rule; `None` defers to the next rule
type BodyweightRule = fn(&ExerciseHistory, Option<&ExerciseMetadata>) -> Option<bool>;

/// Detection rules in priority order
const BODYWEIGHT_RULES: [BodyweightRule; 4] = [
    explicit_flag,
    equipment_list,
    unloaded_history,
    name_keywords,
];

/// Name fragments that identify common bodyweight movements
const BODYWEIGHT_NAME_KEYWORDS: [&str; 12] = [
    "push-up",
    "push up",
    "pushup",
    "pull-up",
    "pull up",
    "pullup",
    "chin-up",
    "chin up",
    "dip",
    "plank",
    "burpee",
    "bodyweight",
];

/// Whether the exercise is a bodyweight movement (first decisive rule wins, default no)
#[must_use]
pub fn is_bodyweight(history: &ExerciseHistory, metadata: Option<&ExerciseMetadata>) -> bool {
    BODYWEIGHT_RULES
        .iter()
        .find_map(|rule| rule(history, metadata))
        .unwrap_or(false)
}

/// Starting load class used when nothing has been logged
#[must_use]
pub fn starting_load(history: &ExerciseHistory, metadata: Option<&ExerciseMetadata>) -> StartingLoad {
    if is_bodyweight(history, metadata) {
        return StartingLoad::Bodyweight;
    }
    match history.exercise_type {
        ExerciseType::Isolation => StartingLoad::Isolation,
        ExerciseType::Compound if uses_barbell(history, metadata) => StartingLoad::BarbellCompound,
        ExerciseType::Compound => StartingLoad::Compound,
    }
}

fn uses_barbell(history: &ExerciseHistory, metadata: Option<&ExerciseMetadata>) -> bool {
    metadata.map_or_else(
        || history.exercise_name.to_lowercase().contains("barbell"),
        |meta| meta.equipment.contains(&Equipment::Barbell),
    )
}

fn explicit_flag(_: &ExerciseHistory, metadata: Option<&ExerciseMetadata>) -> Option<bool> {
    metadata.and_then(|meta| meta.is_bodyweight)
}

fn equipment_list(_: &ExerciseHistory, metadata: Option<&ExerciseMetadata>) -> Option<bool> {
    let equipment = &metadata?.equipment;
    if equipment.is_empty() {
        return None;
    }
    Some(equipment.iter().all(Equipment::is_unloaded))
}

fn unloaded_history(history: &ExerciseHistory, _: Option<&ExerciseMetadata>) -> Option<bool> {
    let mut sets = history.sessions.iter().flat_map(|session| &session.sets).peekable();
    sets.peek()?;
    sets.all(|set| set.weight <= 0.0).then_some(true)
}

fn name_keywords(history: &ExerciseHistory, _: Option<&ExerciseMetadata>) -> Option<bool> {
    let name = history.exercise_name.to_lowercase();
    BODYWEIGHT_NAME_KEYWORDS
        .iter()
        .any(|keyword| name.contains(keyword))
        .then_some(true)
}
