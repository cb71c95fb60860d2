// ABOUTME: Plateau detection configuration: indicator thresholds, evidence weights, cutoff
// ABOUTME: Weights and the actionable threshold are tunable constants, not derived values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plateau Detection Configuration
//!
//! Confidence is the share of evaluated evidence weight that fired. The
//! defaults are chosen so that weight stagnation or RPE elevation alone never
//! crosses the actionable threshold; they should be re-tuned against labelled
//! training logs.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Evidence weight per plateau indicator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorWeights {
    /// Weight stagnation
    pub weight_stagnation: f64,
    /// RPE elevation at flat or falling load
    pub rpe_elevation: f64,
    /// Completed-rep ratio decline
    pub completion_decline: f64,
    /// Form score decline
    pub form_degradation: f64,
}

impl Default for IndicatorWeights {
    fn default() -> Self {
        Self {
            weight_stagnation: 25.0,
            rpe_elevation: 35.0,
            completion_decline: 40.0,
            form_degradation: 20.0,
        }
    }
}

/// Plateau detector configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlateauConfig {
    /// Consecutive sessions with unchanged load for weight stagnation
    pub stagnation_sessions: usize,
    /// Minimum sessions carrying a signal before its trend is evaluated
    pub min_trend_sessions: usize,
    /// Session-RPE slope (per session) that counts as elevation
    pub rpe_slope_threshold: f64,
    /// Completion-ratio drop per session that counts as decline
    pub completion_slope_threshold: f64,
    /// Form-score drop per session that counts as degradation
    pub form_slope_threshold: f64,
    /// Evidence weights
    pub weights: IndicatorWeights,
    /// Confidence (0-100) at or above which a plateau is actionable
    pub confidence_threshold: f64,
}

impl Default for PlateauConfig {
    fn default() -> Self {
        Self {
            stagnation_sessions: 3,
            min_trend_sessions: 3,
            rpe_slope_threshold: 0.25,
            completion_slope_threshold: 0.03,
            form_slope_threshold: 0.2,
            weights: IndicatorWeights::default(),
            confidence_threshold: 40.0,
        }
    }
}

impl PlateauConfig {
    /// Validate the plateau configuration
    ///
    /// # Errors
    ///
    /// Returns an error for negative or all-zero weights, a threshold outside
    /// 0-100, or fewer than two sessions per trend
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            self.weights.weight_stagnation,
            self.weights.rpe_elevation,
            self.weights.completion_decline,
            self.weights.form_degradation,
        ];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ConfigError::InvalidWeights(
                "plateau indicator weights must be non-negative",
            ));
        }
        if weights.iter().sum::<f64>() <= 0.0 {
            return Err(ConfigError::InvalidWeights(
                "at least one plateau indicator weight must be positive",
            ));
        }
        if !(0.0..=100.0).contains(&self.confidence_threshold) {
            return Err(ConfigError::ValueOutOfRange(
                "plateau confidence_threshold must be between 0 and 100",
            ));
        }
        if self.stagnation_sessions < 2 || self.min_trend_sessions < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "plateau indicators need at least 2 sessions",
            ));
        }
        if [
            self.rpe_slope_threshold,
            self.completion_slope_threshold,
            self.form_slope_threshold,
        ]
        .iter()
        .any(|t| !t.is_finite() || *t <= 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "plateau slope thresholds must be positive",
            ));
        }
        Ok(())
    }
}
