// ABOUTME: Strength progression intelligence for the FitForge platform
// ABOUTME: Metrics, strategy selection, progression, plateau detection and muscle recovery
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `FitForge` Intelligence
//!
//! Pure, synchronous analytics over in-memory training snapshots. Nothing in
//! this crate performs I/O or reads the clock; callers pass `now` explicitly.
//!
//! ## Pipeline
//!
//! `ExerciseHistory → MetricsAnalyzer → {PlateauDetector, StrategySelector}
//! → ProgressionCalculator → ProgressionResult`
//!
//! Independently, `WorkoutLog + MuscleEngagementMap → RecoveryEstimator`.

/// Engine configuration with environment overrides and validation
pub mod config;

/// Injected exercise metadata lookup and bodyweight detection
pub mod exercise_catalog;

/// Facade running the progression pipeline for one or many exercises
pub mod engine;

/// Trend and readiness metrics over the evaluation window
pub mod metrics_analyzer;

/// Multi-signal plateau detection
pub mod plateau_detector;

/// Strategy formulas, safety clamps and rounding
pub mod progression_calculator;

/// Per-muscle fatigue from elapsed time and intensity
pub mod recovery_estimator;

/// Least-squares helpers shared by the detectors
pub mod statistical_analysis;

/// Priority-ordered progression strategy selection
pub mod strategy_selector;

pub use config::EngineConfig;
pub use engine::{ProgressionEngine, ProgressionResult};
pub use exercise_catalog::{ExerciseCatalog, InMemoryExerciseCatalog};
pub use metrics_analyzer::{MetricsAnalyzer, ProgressionMetrics, WeightTrend};
pub use plateau_detector::{PlateauAction, PlateauDetector, PlateauIndicator, PlateauSignal};
pub use progression_calculator::{ConfidenceLevel, ProgressionCalculator, ProgressionSuggestion};
pub use recovery_estimator::{MuscleRecoveryState, RecoveryEstimator, RecoveryStatus};
pub use strategy_selector::{ProgressionStrategy, StrategyReason, StrategySelection, StrategySelector};
