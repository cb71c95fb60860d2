// ABOUTME: Muscle recovery configuration for the fatigue model
// ABOUTME: Recovery window length and the overworked/undertrained fatigue boundaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitforge_core::constants::recovery::{
    OVERWORKED_FATIGUE_PERCENT, RECOVERY_WINDOW_DAYS, UNDERTRAINED_FATIGUE_PERCENT,
};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Muscle recovery model configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecoveryConfig {
    /// Days for a maximally stressed muscle to fully recover
    pub recovery_window_days: f64,
    /// Fatigue at or above which a muscle is overworked (percent)
    pub overworked_threshold: f64,
    /// Fatigue below which a muscle is undertrained (percent)
    pub undertrained_threshold: f64,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            recovery_window_days: RECOVERY_WINDOW_DAYS,
            overworked_threshold: OVERWORKED_FATIGUE_PERCENT,
            undertrained_threshold: UNDERTRAINED_FATIGUE_PERCENT,
        }
    }
}

impl RecoveryConfig {
    /// Validate the recovery configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the window is non-positive or the thresholds are
    /// not ordered `0 < undertrained < overworked < 100`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.recovery_window_days.is_finite() || self.recovery_window_days <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "recovery_window_days must be positive",
            ));
        }
        if !(0.0 < self.undertrained_threshold
            && self.undertrained_threshold < self.overworked_threshold
            && self.overworked_threshold < 100.0)
        {
            return Err(ConfigError::InvalidRange(
                "fatigue thresholds must satisfy 0 < undertrained < overworked < 100",
            ));
        }
        Ok(())
    }
}
