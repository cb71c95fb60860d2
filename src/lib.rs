// ABOUTME: Main library entry point for the FitForge progression engine
// ABOUTME: Re-exports the core and intelligence crates plus logging and JSON input helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `FitForge`
//!
//! Workout progression analytics: given a lifter's logged exercise history
//! the engine computes trend metrics, detects plateaus, selects a progression
//! strategy and emits a safety-bounded next-session prescription. A muscle
//! recovery estimator converts elapsed time and intensity into fatigue.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use fitforge::intelligence::{EngineConfig, InMemoryExerciseCatalog, ProgressionEngine};
//! use fitforge::models::{ExerciseHistory, ExerciseType};
//! use fitforge::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = EngineConfig::load()?;
//!     let engine = ProgressionEngine::new(config, Arc::new(InMemoryExerciseCatalog::new()));
//!     let history = ExerciseHistory::new("squat", "Back Squat", ExerciseType::Compound);
//!     let result = engine.analyze_default(&history)?;
//!     println!("{}", result.suggestion.reasoning);
//!     Ok(())
//! }
//! ```

/// Unified error handling (re-exported from `fitforge-core`)
pub use fitforge_core::errors;

/// Training constants (re-exported from `fitforge-core`)
pub use fitforge_core::constants;

/// Data models (re-exported from `fitforge-core`)
pub use fitforge_core::models;

/// Progression intelligence (re-exported from `fitforge-intelligence`)
pub use fitforge_intelligence as intelligence;

/// JSON file inputs for the command-line tools
pub mod input;

/// Tracing subscriber configuration
pub mod logging;
