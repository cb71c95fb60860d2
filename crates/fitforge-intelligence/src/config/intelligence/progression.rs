// ABOUTME: Progression analysis configuration for metrics, strategy selection and calculation
// ABOUTME: Analysis window, readiness ceiling, deload triggers, RPE band, and starting loads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Progression Configuration
//!
//! Thresholds consumed by the metrics analyzer, the strategy selector and the
//! progression calculator.

use fitforge_core::constants::load::{DELOAD_FACTOR, EMPTY_BARBELL_KG};
use fitforge_core::constants::rpe::{MAX_RPE, MIN_RPE};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Configuration for trend and readiness metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsAnalysisConfig {
    /// Number of most recent sessions forming the evaluation window
    pub analysis_window_sessions: usize,
    /// Net weight change (percent) needed to call a trend
    pub trend_threshold_percent: f64,
    /// Session RPE at or above which the lifter is not ready to progress
    pub readiness_rpe_ceiling: f64,
}

impl Default for MetricsAnalysisConfig {
    fn default() -> Self {
        Self {
            analysis_window_sessions: 6,
            trend_threshold_percent: 2.0,
            readiness_rpe_ceiling: 9.0,
        }
    }
}

/// Thresholds for strategy selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    /// Latest-session RPE that forces a deload
    pub deload_rpe: f64,
    /// RPE that forces a deload when sustained across the window
    pub sustained_high_rpe: f64,
    /// Sessions the sustained RPE must span
    pub sustained_high_rpe_sessions: usize,
    /// Rep headroom implied for isolation lifts without an explicit ceiling
    pub default_rep_range_span: u32,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            deload_rpe: MAX_RPE,
            sustained_high_rpe: 9.0,
            sustained_high_rpe_sessions: 3,
            default_rep_range_span: 4,
        }
    }
}

/// RPE-driven load regulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoRegulationConfig {
    /// Lower edge of the target RPE band
    pub target_rpe_low: f64,
    /// Upper edge of the target RPE band
    pub target_rpe_high: f64,
    /// Slack around the band when detecting an auto-regulation pattern
    pub band_tolerance: f64,
    /// Fraction of the working weight moved per RPE point outside the band
    pub sensitivity: f64,
    /// Sessions with recorded RPE needed to detect the pattern
    pub min_sessions: usize,
}

impl Default for AutoRegulationConfig {
    fn default() -> Self {
        Self {
            target_rpe_low: 7.0,
            target_rpe_high: 8.0,
            band_tolerance: 0.5,
            sensitivity: 0.025,
            min_sessions: 3,
        }
    }
}

/// Conservative loads prescribed when no history exists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartingWeights {
    /// Barbell compound lifts (empty bar)
    pub barbell_compound: f64,
    /// Other compound lifts
    pub compound: f64,
    /// Isolation lifts
    pub isolation: f64,
    /// Added load for bodyweight movements
    pub bodyweight: f64,
}

impl Default for StartingWeights {
    fn default() -> Self {
        Self {
            barbell_compound: EMPTY_BARBELL_KG,
            compound: 10.0,
            isolation: 5.0,
            bodyweight: 2.5,
        }
    }
}

/// Progression calculator settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionCalculatorConfig {
    /// Multiplier applied to the working weight on a deload
    pub deload_factor: f64,
    /// Sessions needed before a suggestion can carry high confidence
    pub high_confidence_min_sessions: usize,
    /// Consistency needed before a linear increase carries high confidence
    pub high_confidence_consistency: f64,
    /// RPE gap beyond which an auto-regulated change is low confidence
    pub extreme_rpe_gap: f64,
    /// No-history starting loads
    pub starting_weights: StartingWeights,
}

impl Default for ProgressionCalculatorConfig {
    fn default() -> Self {
        Self {
            deload_factor: DELOAD_FACTOR,
            high_confidence_min_sessions: 3,
            high_confidence_consistency: 0.9,
            extreme_rpe_gap: 2.0,
            starting_weights: StartingWeights::default(),
        }
    }
}

pub(super) fn validate_progression(
    metrics: &MetricsAnalysisConfig,
    strategy: &StrategyConfig,
    auto_regulation: &AutoRegulationConfig,
    progression: &ProgressionCalculatorConfig,
) -> Result<(), ConfigError> {
    let rpe_scale = MIN_RPE..=MAX_RPE;

    if metrics.analysis_window_sessions == 0 {
        return Err(ConfigError::ValueOutOfRange(
            "analysis_window_sessions must be at least 1",
        ));
    }
    if !metrics.trend_threshold_percent.is_finite() || metrics.trend_threshold_percent < 0.0 {
        return Err(ConfigError::ValueOutOfRange(
            "trend_threshold_percent must be non-negative",
        ));
    }
    if !rpe_scale.contains(&metrics.readiness_rpe_ceiling)
        || !rpe_scale.contains(&strategy.deload_rpe)
        || !rpe_scale.contains(&strategy.sustained_high_rpe)
    {
        return Err(ConfigError::ValueOutOfRange(
            "RPE thresholds must lie on the 1-10 scale",
        ));
    }
    if strategy.sustained_high_rpe > strategy.deload_rpe {
        return Err(ConfigError::InvalidRange(
            "sustained_high_rpe must be <= deload_rpe",
        ));
    }
    if strategy.sustained_high_rpe_sessions < 2 {
        return Err(ConfigError::ValueOutOfRange(
            "sustained_high_rpe_sessions must be at least 2",
        ));
    }
    if !rpe_scale.contains(&auto_regulation.target_rpe_low)
        || !rpe_scale.contains(&auto_regulation.target_rpe_high)
    {
        return Err(ConfigError::ValueOutOfRange(
            "target RPE band must lie on the 1-10 scale",
        ));
    }
    if auto_regulation.target_rpe_low > auto_regulation.target_rpe_high {
        return Err(ConfigError::InvalidRange(
            "target_rpe_low must be <= target_rpe_high",
        ));
    }
    if !(auto_regulation.sensitivity > 0.0 && auto_regulation.sensitivity < 1.0) {
        return Err(ConfigError::ValueOutOfRange(
            "auto-regulation sensitivity must be between 0 and 1",
        ));
    }
    if auto_regulation.band_tolerance < 0.0 || auto_regulation.min_sessions < 2 {
        return Err(ConfigError::ValueOutOfRange(
            "band_tolerance must be non-negative and min_sessions at least 2",
        ));
    }
    if !(progression.deload_factor > 0.0 && progression.deload_factor < 1.0) {
        return Err(ConfigError::ValueOutOfRange(
            "deload_factor must be between 0 and 1 (exclusive)",
        ));
    }
    if !(0.0..=1.0).contains(&progression.high_confidence_consistency) {
        return Err(ConfigError::ValueOutOfRange(
            "high_confidence_consistency must be between 0 and 1",
        ));
    }
    let starts = &progression.starting_weights;
    if [
        starts.barbell_compound,
        starts.compound,
        starts.isolation,
        starts.bodyweight,
    ]
    .iter()
    .any(|w| !w.is_finite() || *w <= 0.0)
    {
        return Err(ConfigError::ValueOutOfRange(
            "starting weights must be positive",
        ));
    }
    Ok(())
}
