// ABOUTME: Engine configuration aggregating safety, strategy, recovery and plateau sections
// ABOUTME: Loaded as defaults, then FITFORGE_* environment overrides, then validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine Configuration Module
//!
//! Every threshold the progression engine and the recovery estimator consult
//! lives here. Configuration is always passed explicitly to the components
//! that need it; there is no process-wide instance.

mod error;
mod plateau;
mod progression;
mod recovery;
mod safety;

pub use error::ConfigError;
pub use plateau::{IndicatorWeights, PlateauConfig};
pub use progression::{
    AutoRegulationConfig, MetricsAnalysisConfig, ProgressionCalculatorConfig, StartingWeights,
    StrategyConfig,
};
pub use recovery::RecoveryConfig;
pub use safety::SafetyConfig;

use serde::{Deserialize, Serialize};
use std::env::{self, VarError};
use std::str::FromStr;

/// Main engine configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Safety clamps and rounding applied to every suggestion
    pub safety: SafetyConfig,
    /// Metrics analysis window and readiness thresholds
    pub metrics: MetricsAnalysisConfig,
    /// Strategy selection thresholds
    pub strategy: StrategyConfig,
    /// RPE band used by auto-regulation
    pub auto_regulation: AutoRegulationConfig,
    /// Progression calculator settings
    pub progression: ProgressionCalculatorConfig,
    /// Muscle recovery model
    pub recovery: RecoveryConfig,
    /// Plateau detection thresholds and weights
    pub plateau: PlateauConfig,
}

impl EngineConfig {
    /// Load configuration from defaults with environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment override fails to parse or the
    /// resulting configuration is invalid
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_over(Self::default())
    }

    /// Apply environment overrides on top of `base` (e.g. a parsed config file) and validate
    ///
    /// # Errors
    ///
    /// Returns an error if an environment override fails to parse or the
    /// resulting configuration is invalid
    pub fn load_over(base: Self) -> Result<Self, ConfigError> {
        base.apply_env_overrides()?.validated()
    }

    /// Validate the configuration and return it unchanged
    ///
    /// # Errors
    ///
    /// Returns the first section validation failure
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.validate()?;
        Ok(self)
    }

    /// Validate every configuration section
    ///
    /// # Errors
    ///
    /// Returns the first section validation failure
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.safety.validate()?;
        progression::validate_progression(
            &self.metrics,
            &self.strategy,
            &self.auto_regulation,
            &self.progression,
        )?;
        self.recovery.validate()?;
        self.plateau.validate()
    }

    /// Parse an environment variable into `target` if it is set
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        let val = match env::var(env_var_name) {
            Ok(val) => val,
            Err(VarError::NotPresent) => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        *target = val
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Safety
        Self::apply_env_var(
            "FITFORGE_MAX_WEEKLY_INCREASE",
            &mut self.safety.max_weekly_increase,
        )?;
        Self::apply_env_var(
            "FITFORGE_MIN_WEIGHT_INCREASE",
            &mut self.safety.min_weight_increase,
        )?;
        Self::apply_env_var(
            "FITFORGE_WEIGHT_ROUNDING_INCREMENT",
            &mut self.safety.weight_rounding_increment,
        )?;
        Self::apply_env_var("FITFORGE_COMPOUND_STEP", &mut self.safety.compound_step)?;
        Self::apply_env_var("FITFORGE_ISOLATION_STEP", &mut self.safety.isolation_step)?;

        // Metrics and strategy
        Self::apply_env_var(
            "FITFORGE_ANALYSIS_WINDOW_SESSIONS",
            &mut self.metrics.analysis_window_sessions,
        )?;
        Self::apply_env_var(
            "FITFORGE_READINESS_RPE_CEILING",
            &mut self.metrics.readiness_rpe_ceiling,
        )?;
        Self::apply_env_var("FITFORGE_DELOAD_RPE", &mut self.strategy.deload_rpe)?;
        Self::apply_env_var(
            "FITFORGE_DEFAULT_REP_RANGE_SPAN",
            &mut self.strategy.default_rep_range_span,
        )?;

        // Auto-regulation
        Self::apply_env_var(
            "FITFORGE_TARGET_RPE_LOW",
            &mut self.auto_regulation.target_rpe_low,
        )?;
        Self::apply_env_var(
            "FITFORGE_TARGET_RPE_HIGH",
            &mut self.auto_regulation.target_rpe_high,
        )?;
        Self::apply_env_var(
            "FITFORGE_AUTO_REGULATION_SENSITIVITY",
            &mut self.auto_regulation.sensitivity,
        )?;

        // Progression
        Self::apply_env_var("FITFORGE_DELOAD_FACTOR", &mut self.progression.deload_factor)?;

        // Recovery
        Self::apply_env_var(
            "FITFORGE_RECOVERY_WINDOW_DAYS",
            &mut self.recovery.recovery_window_days,
        )?;

        // Plateau
        Self::apply_env_var(
            "FITFORGE_PLATEAU_CONFIDENCE_THRESHOLD",
            &mut self.plateau.confidence_threshold,
        )?;

        Ok(self)
    }
}
