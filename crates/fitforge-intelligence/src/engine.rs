// ABOUTME: Progression engine facade validating input and running the analysis pipeline
// ABOUTME: Single-exercise analysis, rayon batch analysis, plateau and recovery entry points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Progression Engine
//!
//! Wires the components together in data-flow order:
//!
//! 1. Validate the history and safety configuration at the boundary
//! 2. Extract the evaluation window and compute metrics
//! 3. Evaluate plateau indicators on the same window
//! 4. Select a strategy
//! 5. Calculate the clamped, rounded suggestion

use std::sync::Arc;

use chrono::{DateTime, Utc};
use fitforge_core::errors::{AppError, AppResult};
use fitforge_core::models::{ExerciseHistory, WorkoutLog};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::intelligence::SafetyConfig;
use crate::config::EngineConfig;
use crate::exercise_catalog::{self, ExerciseCatalog};
use crate::metrics_analyzer::{MetricsAnalyzer, ProgressionMetrics};
use crate::plateau_detector::{PlateauDetector, PlateauSignal};
use crate::progression_calculator::{CalculationInput, ProgressionCalculator, ProgressionSuggestion};
use crate::recovery_estimator::{MuscleRecoveryState, RecoveryEstimator};
use crate::strategy_selector::{ProgressionStrategy, StrategyReason, StrategySelector};

/// Outcome of analysing one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionResult {
    /// Exercise analysed
    pub exercise_id: String,
    /// Strategy applied
    pub strategy: ProgressionStrategy,
    /// Rule that selected the strategy
    pub strategy_reason: StrategyReason,
    /// Next-session prescription
    pub suggestion: ProgressionSuggestion,
    /// Metrics for the evaluation window
    pub metrics: ProgressionMetrics,
    /// Plateau evidence for the same window
    pub plateau: PlateauSignal,
}

/// Progression analytics facade
#[derive(Clone)]
pub struct ProgressionEngine {
    config: EngineConfig,
    catalog: Arc<dyn ExerciseCatalog>,
    metrics: MetricsAnalyzer,
    plateau: PlateauDetector,
    selector: StrategySelector,
    calculator: ProgressionCalculator,
    recovery: RecoveryEstimator,
}

impl ProgressionEngine {
    /// Create an engine from an explicit configuration and catalog
    #[must_use]
    pub fn new(config: EngineConfig, catalog: Arc<dyn ExerciseCatalog>) -> Self {
        Self {
            metrics: MetricsAnalyzer::new(config.metrics.clone()),
            plateau: PlateauDetector::new(config.plateau.clone()),
            selector: StrategySelector::new(
                config.strategy.clone(),
                config.auto_regulation.clone(),
            ),
            calculator: ProgressionCalculator::new(
                config.progression.clone(),
                config.strategy.clone(),
                config.auto_regulation.clone(),
                config.metrics.readiness_rpe_ceiling,
            ),
            recovery: RecoveryEstimator::new(config.recovery.clone()),
            config,
            catalog,
        }
    }

    /// Engine configuration
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Analyse one exercise with the engine's own safety configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` or `MissingRequiredField` for an invalid history
    pub fn analyze_default(&self, history: &ExerciseHistory) -> AppResult<ProgressionResult> {
        self.analyze(history, &self.config.safety)
    }

    /// Analyse one exercise
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` or `MissingRequiredField` for an invalid history
    /// and `ConfigInvalid` for an invalid safety configuration
    pub fn analyze(
        &self,
        history: &ExerciseHistory,
        safety: &SafetyConfig,
    ) -> AppResult<ProgressionResult> {
        history.validate()?;
        safety.validate().map_err(AppError::from)?;

        let window = self.metrics.evaluation_window(history);
        let metrics = self.metrics.analyze_window(&window);
        let plateau = self
            .plateau
            .detect(&window, safety.weight_rounding_increment);
        let selection =
            self.selector
                .select(history.exercise_type, &window, &metrics, Some(&plateau));

        let sessions = history.chronological_sessions();
        let metadata = self.catalog.exercise(&history.exercise_id);
        let input = CalculationInput {
            exercise_name: &history.exercise_name,
            exercise_type: history.exercise_type,
            selection: &selection,
            metrics: &metrics,
            sessions: &sessions,
            plateau: Some(&plateau),
            starting_load: exercise_catalog::starting_load(history, metadata),
        };
        let suggestion = self.calculator.calculate(&input, safety);

        info!(
            exercise_id = %history.exercise_id,
            strategy = %selection.strategy,
            suggested_weight = suggestion.suggested_weight,
            increase = suggestion.increase_amount,
            confidence = ?suggestion.confidence_level,
            plateau_confidence = plateau.confidence,
            "Progression analysed"
        );

        Ok(ProgressionResult {
            exercise_id: history.exercise_id.clone(),
            strategy: selection.strategy,
            strategy_reason: selection.reason,
            suggestion,
            metrics,
            plateau,
        })
    }

    /// Analyse many exercises in parallel; results keep the input order
    #[must_use]
    pub fn analyze_batch(
        &self,
        histories: &[ExerciseHistory],
        safety: &SafetyConfig,
    ) -> Vec<AppResult<ProgressionResult>> {
        histories
            .par_iter()
            .map(|history| self.analyze(history, safety))
            .collect()
    }

    /// Plateau evidence for one exercise
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` or `MissingRequiredField` for an invalid history
    pub fn detect_plateau(&self, history: &ExerciseHistory) -> AppResult<PlateauSignal> {
        history.validate()?;
        let window = self.metrics.evaluation_window(history);
        Ok(self
            .plateau
            .detect(&window, self.config.safety.weight_rounding_increment))
    }

    /// Muscle recovery from workout logs, using the catalog's engagement map
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an invalid workout, intensity or future date
    pub fn estimate_recovery(
        &self,
        workouts: &[WorkoutLog],
        now: DateTime<Utc>,
    ) -> AppResult<Vec<MuscleRecoveryState>> {
        let engagements = self.catalog.muscle_engagements();
        self.recovery.estimate_all(workouts, &engagements, now)
    }

    /// Recovery estimator configured for this engine
    #[must_use]
    pub const fn recovery_estimator(&self) -> &RecoveryEstimator {
        &self.recovery
    }
}
