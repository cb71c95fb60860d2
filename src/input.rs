// ABOUTME: JSON file readers for histories, workouts, exercise catalogs and engine configuration
// ABOUTME: Maps I/O and parse failures to AppError tagged with the offending path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::intelligence::{EngineConfig, InMemoryExerciseCatalog};
use crate::models::{ExerciseHistory, ExerciseMetadata, WorkoutLog};

/// A history file holds one exercise or a list of them
#[derive(Deserialize)]
#[serde(untagged)]
enum HistoryFile {
    Many(Vec<ExerciseHistory>),
    One(Box<ExerciseHistory>),
}

/// Read and deserialize a JSON file
///
/// # Errors
///
/// Returns `ResourceNotFound` for a missing file, `InvalidFormat` for
/// malformed JSON and `InternalError` for other I/O failures
pub fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let source_path = path.display().to_string();
    let text = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            AppError::not_found(format!("File {source_path}")).with_source(e)
        } else {
            AppError::internal(format!("Failed to read {source_path}")).with_source(e)
        }
    })?;
    debug!(path = %source_path, bytes = text.len(), "Read input file");
    serde_json::from_str(&text).map_err(|e| AppError::from(e).with_resource_id(source_path))
}

/// Load exercise histories from a file holding one history or an array
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub fn load_histories(path: &Path) -> AppResult<Vec<ExerciseHistory>> {
    Ok(match read_json::<HistoryFile>(path)? {
        HistoryFile::Many(histories) => histories,
        HistoryFile::One(history) => vec![*history],
    })
}

/// Load workout logs
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub fn load_workouts(path: &Path) -> AppResult<Vec<WorkoutLog>> {
    read_json(path)
}

/// Load an exercise catalog from an array of exercise metadata
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or an exercise has
/// invalid engagement shares
pub fn load_catalog(path: &Path) -> AppResult<InMemoryExerciseCatalog> {
    let exercises: Vec<ExerciseMetadata> = read_json(path)?;
    InMemoryExerciseCatalog::from_exercises(exercises)
}

/// Engine configuration: the file (if any) over defaults, then environment overrides
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or the resulting
/// configuration is invalid
pub fn load_engine_config(path: Option<&Path>) -> AppResult<EngineConfig> {
    let base = match path {
        Some(path) => read_json(path)?,
        None => EngineConfig::default(),
    };
    Ok(EngineConfig::load_over(base)?)
}
