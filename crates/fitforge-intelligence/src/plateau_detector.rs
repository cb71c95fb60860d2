// ABOUTME: Multi-signal plateau detection over the exercise evaluation window
// ABOUTME: Weighs stagnation, RPE creep, completion decline and form loss into one confidence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plateau Detector
//!
//! Each indicator is evaluated only when enough sessions carry its signal.
//! Confidence is the share of evaluated evidence weight that fired, so a
//! missing signal (no form scores, too little RPE) neither helps nor hurts.

use std::collections::BTreeSet;

use fitforge_core::models::SessionRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::intelligence::PlateauConfig;
use crate::statistical_analysis::StatisticalAnalyzer;

/// Independent stagnation signals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlateauIndicator {
    /// Load unchanged across the most recent sessions
    WeightStagnation,
    /// Effort climbing while load holds or drops
    RpeElevation,
    /// Completed-rep ratio trending down
    CompletionDecline,
    /// Technique scores trending down
    FormDegradation,
}

/// Intervention suggested by a plateau
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlateauAction {
    /// Reduce load to recover
    Deload,
    /// Hold load and clean up execution
    TechniqueFocus,
    /// Change the training block structure
    PeriodizationChange,
    /// No intervention
    None,
}

/// Plateau evidence for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateauSignal {
    /// Weighted evidence (0-100)
    pub confidence: f64,
    /// Indicators that fired
    pub fired_indicators: BTreeSet<PlateauIndicator>,
    /// Indicators with enough data to be evaluated
    pub evaluated_indicators: BTreeSet<PlateauIndicator>,
    /// Suggested intervention
    pub recommended_action: PlateauAction,
    /// Confidence reached the actionable threshold
    pub is_plateau: bool,
}

impl PlateauSignal {
    /// Signal for a history too short to evaluate anything
    #[must_use]
    pub const fn none() -> Self {
        Self {
            confidence: 0.0,
            fired_indicators: BTreeSet::new(),
            evaluated_indicators: BTreeSet::new(),
            recommended_action: PlateauAction::None,
            is_plateau: false,
        }
    }

    /// Whether the given indicator fired
    #[must_use]
    pub fn fired(&self, indicator: PlateauIndicator) -> bool {
        self.fired_indicators.contains(&indicator)
    }

    /// Actionable plateau recommending a deload
    #[must_use]
    pub fn recommends_deload(&self) -> bool {
        self.is_plateau && self.recommended_action == PlateauAction::Deload
    }
}

/// Detects plateaus from per-session signals
#[derive(Debug, Clone, Default)]
pub struct PlateauDetector {
    config: PlateauConfig,
}

impl PlateauDetector {
    /// Create a detector with the given configuration
    #[must_use]
    pub const fn new(config: PlateauConfig) -> Self {
        Self { config }
    }

    /// Evaluate the window (oldest first)
    ///
    /// `weight_tolerance` is the rounding increment; loads within half of it
    /// count as unchanged.
    #[must_use]
    pub fn detect(&self, window: &[&SessionRecord], weight_tolerance: f64) -> PlateauSignal {
        let half_increment = weight_tolerance / 2.0;
        let mut evaluated = BTreeSet::new();
        let mut fired = BTreeSet::new();

        let checks = [
            (
                PlateauIndicator::WeightStagnation,
                self.weight_stagnation(window, half_increment),
            ),
            (
                PlateauIndicator::RpeElevation,
                self.rpe_elevation(window, half_increment),
            ),
            (
                PlateauIndicator::CompletionDecline,
                self.completion_decline(window),
            ),
            (
                PlateauIndicator::FormDegradation,
                self.form_degradation(window),
            ),
        ];

        for (indicator, outcome) in checks {
            if let Some(did_fire) = outcome {
                evaluated.insert(indicator);
                if did_fire {
                    fired.insert(indicator);
                }
            }
        }

        let evaluated_weight: f64 = evaluated.iter().map(|i| self.weight_of(*i)).sum();
        let fired_weight: f64 = fired.iter().map(|i| self.weight_of(*i)).sum();
        let confidence = if evaluated_weight > 0.0 {
            (100.0 * fired_weight / evaluated_weight).clamp(0.0, 100.0)
        } else {
            0.0
        };

        let is_plateau = !fired.is_empty() && confidence >= self.config.confidence_threshold;
        let recommended_action = if is_plateau {
            recommend_action(&fired)
        } else {
            PlateauAction::None
        };

        debug!(
            confidence,
            fired = ?fired,
            evaluated = evaluated.len(),
            action = ?recommended_action,
            "Evaluated plateau indicators"
        );

        PlateauSignal {
            confidence,
            fired_indicators: fired,
            evaluated_indicators: evaluated,
            recommended_action,
            is_plateau,
        }
    }

    const fn weight_of(&self, indicator: PlateauIndicator) -> f64 {
        let weights = &self.config.weights;
        match indicator {
            PlateauIndicator::WeightStagnation => weights.weight_stagnation,
            PlateauIndicator::RpeElevation => weights.rpe_elevation,
            PlateauIndicator::CompletionDecline => weights.completion_decline,
            PlateauIndicator::FormDegradation => weights.form_degradation,
        }
    }

    fn weight_stagnation(&self, window: &[&SessionRecord], half_increment: f64) -> Option<bool> {
        let n = self.config.stagnation_sessions;
        if window.len() < n {
            return None;
        }
        let recent = window[window.len() - n..]
            .iter()
            .map(|session| session.representative_weight());
        let (min, max) = recent.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), w| {
            (lo.min(w), hi.max(w))
        });
        Some(max - min <= half_increment)
    }

    fn rpe_elevation(&self, window: &[&SessionRecord], half_increment: f64) -> Option<bool> {
        let rated: Vec<&&SessionRecord> = window
            .iter()
            .filter(|session| session.session_rpe().is_some())
            .collect();
        if rated.len() < self.config.min_trend_sessions {
            return None;
        }
        let rpe: Vec<f64> = rated.iter().filter_map(|s| s.session_rpe()).collect();
        let slope = StatisticalAnalyzer::slope(&rpe)?;

        let first_weight = rated.first().map_or(0.0, |s| s.representative_weight());
        let last_weight = rated.last().map_or(0.0, |s| s.representative_weight());
        let load_not_rising = last_weight <= first_weight + half_increment;

        Some(slope >= self.config.rpe_slope_threshold && load_not_rising)
    }

    fn completion_decline(&self, window: &[&SessionRecord]) -> Option<bool> {
        if window.len() < self.config.min_trend_sessions {
            return None;
        }
        let ratios: Vec<f64> = window
            .iter()
            .map(|session| session.completion_ratio().clamp(0.0, 1.0))
            .collect();
        let slope = StatisticalAnalyzer::slope(&ratios)?;
        let dropped = match (ratios.first(), ratios.last()) {
            (Some(first), Some(last)) => last < first,
            _ => false,
        };
        Some(slope <= -self.config.completion_slope_threshold && dropped)
    }

    fn form_degradation(&self, window: &[&SessionRecord]) -> Option<bool> {
        let scores: Vec<f64> = window
            .iter()
            .filter_map(|session| session.mean_form_score())
            .collect();
        if scores.len() < self.config.min_trend_sessions {
            return None;
        }
        let slope = StatisticalAnalyzer::slope(&scores)?;
        Some(slope <= -self.config.form_slope_threshold)
    }
}

fn recommend_action(fired: &BTreeSet<PlateauIndicator>) -> PlateauAction {
    let rpe = fired.contains(&PlateauIndicator::RpeElevation);
    let stagnation = fired.contains(&PlateauIndicator::WeightStagnation);
    let completion = fired.contains(&PlateauIndicator::CompletionDecline);

    if rpe && (stagnation || completion) {
        return PlateauAction::Deload;
    }
    let execution_only = fired.iter().all(|indicator| {
        matches!(
            indicator,
            PlateauIndicator::CompletionDecline | PlateauIndicator::FormDegradation
        )
    });
    if execution_only {
        PlateauAction::TechniqueFocus
    } else {
        PlateauAction::PeriodizationChange
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpe_with_stagnation_recommends_deload() {
        let fired = BTreeSet::from([
            PlateauIndicator::RpeElevation,
            PlateauIndicator::WeightStagnation,
        ]);
        assert_eq!(recommend_action(&fired), PlateauAction::Deload);
    }

    #[test]
    fn test_form_and_completion_recommend_technique() {
        let fired = BTreeSet::from([
            PlateauIndicator::CompletionDecline,
            PlateauIndicator::FormDegradation,
        ]);
        assert_eq!(recommend_action(&fired), PlateauAction::TechniqueFocus);
    }

    #[test]
    fn test_mixed_signals_recommend_periodization_change() {
        let fired = BTreeSet::from([
            PlateauIndicator::WeightStagnation,
            PlateauIndicator::FormDegradation,
        ]);
        assert_eq!(recommend_action(&fired), PlateauAction::PeriodizationChange);
    }

    #[test]
    fn test_empty_window_evaluates_nothing() {
        let signal = PlateauDetector::default().detect(&[], 0.25);
        assert_eq!(signal, PlateauSignal::none());
    }
}
