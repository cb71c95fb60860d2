// ABOUTME: Core data models for strength training history and workout logs
// ABOUTME: Re-exports session, exercise, equipment, muscle and workout types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain, serde-serializable records exchanged with the storage and API
//! layers. They carry validation and derived read-only views, never
//! engine policy.

mod equipment;
mod exercise;
mod muscle;
mod session;
mod workout;

pub use equipment::{Equipment, RawEquipment};
pub use exercise::{ExerciseHistory, ExerciseMetadata, ExerciseType};
pub use muscle::{MuscleEngagement, MuscleEngagementMap, MuscleGroup};
pub use session::{SessionRecord, SetRecord};
pub use workout::{ExerciseLogEntry, WorkoutLog};
