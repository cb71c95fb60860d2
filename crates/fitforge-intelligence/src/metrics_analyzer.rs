// ABOUTME: Trend and readiness metrics derived from an exercise history snapshot
// ABOUTME: Consistency, weight trend, volume progress, average RPE and progression readiness
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metrics Analyzer
//!
//! All metrics are computed over the evaluation window: the most recent
//! `analysis_window_sessions` sessions in chronological order. Missing RPE is
//! not an error; the documented default of 7 is used and flagged.

use fitforge_core::constants::rpe::DEFAULT_RPE;
use fitforge_core::models::{ExerciseHistory, SessionRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::intelligence::MetricsAnalysisConfig;
use crate::statistical_analysis::StatisticalAnalyzer;

/// Repetitions divisor in the Epley one-rep-max estimate
const EPLEY_REPS_DIVISOR: f64 = 30.0;

/// Direction of the representative weight across the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightTrend {
    /// Net increase beyond the trend threshold
    Increasing,
    /// Net decrease beyond the trend threshold
    Decreasing,
    /// Within the threshold, or no usable baseline
    Stable,
}

/// Performance metrics for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionMetrics {
    /// Completed reps over prescribed reps in the latest session (0-1)
    pub consistency_score: f64,
    /// Representative weight direction, earliest vs latest session
    pub weight_trend: WeightTrend,
    /// Completed-set volume change, earliest vs latest session (percent)
    pub total_volume_progress: f64,
    /// Mean RPE across the window
    pub average_rpe: f64,
    /// Latest session met its targets below the readiness RPE ceiling
    pub ready_for_progression: bool,
    /// Representative weight of the latest session (kg)
    pub current_weight: f64,
    /// RPE of the latest session, defaulted when not recorded
    pub latest_session_rpe: f64,
    /// Whether no RPE was recorded anywhere in the window
    pub rpe_defaulted: bool,
    /// Sessions in the evaluation window
    pub sessions_analyzed: usize,
    /// Epley one-rep-max estimate from the latest session's best completed set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_one_rep_max: Option<f64>,
}

impl ProgressionMetrics {
    /// Metrics for an exercise with no logged sessions
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            consistency_score: 0.0,
            weight_trend: WeightTrend::Stable,
            total_volume_progress: 0.0,
            average_rpe: DEFAULT_RPE,
            ready_for_progression: false,
            current_weight: 0.0,
            latest_session_rpe: DEFAULT_RPE,
            rpe_defaulted: true,
            sessions_analyzed: 0,
            estimated_one_rep_max: None,
        }
    }
}

/// Derives [`ProgressionMetrics`] from exercise histories
#[derive(Debug, Clone, Default)]
pub struct MetricsAnalyzer {
    config: MetricsAnalysisConfig,
}

impl MetricsAnalyzer {
    /// Create an analyzer with the given configuration
    #[must_use]
    pub const fn new(config: MetricsAnalysisConfig) -> Self {
        Self { config }
    }

    /// Most recent sessions, oldest first, bounded by the analysis window
    #[must_use]
    pub fn evaluation_window<'h>(&self, history: &'h ExerciseHistory) -> Vec<&'h SessionRecord> {
        let mut sessions = history.chronological_sessions();
        let excess = sessions
            .len()
            .saturating_sub(self.config.analysis_window_sessions);
        sessions.drain(..excess);
        sessions
    }

    /// Compute metrics for a history
    #[must_use]
    pub fn analyze(&self, history: &ExerciseHistory) -> ProgressionMetrics {
        let window = self.evaluation_window(history);
        self.analyze_window(&window)
    }

    /// Compute metrics for an already extracted evaluation window
    #[must_use]
    pub fn analyze_window(&self, window: &[&SessionRecord]) -> ProgressionMetrics {
        let (Some(first), Some(latest)) = (window.first(), window.last()) else {
            return ProgressionMetrics::empty();
        };

        let recorded_rpe = window_rpe_values(window);
        let rpe_defaulted = recorded_rpe.is_empty();
        let average_rpe = StatisticalAnalyzer::mean(&recorded_rpe).unwrap_or(DEFAULT_RPE);
        let latest_session_rpe = latest.session_rpe().unwrap_or(DEFAULT_RPE);

        let ready_for_progression =
            latest.met_targets() && latest_session_rpe < self.config.readiness_rpe_ceiling;

        let metrics = ProgressionMetrics {
            consistency_score: latest.completion_ratio().clamp(0.0, 1.0),
            weight_trend: self.weight_trend(
                first.representative_weight(),
                latest.representative_weight(),
            ),
            total_volume_progress: percent_change(
                first.completed_volume(),
                latest.completed_volume(),
            ),
            average_rpe,
            ready_for_progression,
            current_weight: latest.representative_weight(),
            latest_session_rpe,
            rpe_defaulted,
            sessions_analyzed: window.len(),
            estimated_one_rep_max: estimate_one_rep_max(latest),
        };

        debug!(
            sessions = metrics.sessions_analyzed,
            consistency = metrics.consistency_score,
            trend = ?metrics.weight_trend,
            average_rpe = metrics.average_rpe,
            rpe_defaulted,
            ready = ready_for_progression,
            "Computed progression metrics"
        );

        metrics
    }

    fn weight_trend(&self, earliest: f64, latest: f64) -> WeightTrend {
        if earliest <= 0.0 {
            return WeightTrend::Stable;
        }
        let change = percent_change(earliest, latest);
        if change > self.config.trend_threshold_percent {
            WeightTrend::Increasing
        } else if change < -self.config.trend_threshold_percent {
            WeightTrend::Decreasing
        } else {
            WeightTrend::Stable
        }
    }
}

/// Per-set RPE values in the window; a session with only a reported session
/// RPE contributes that value once
fn window_rpe_values(window: &[&SessionRecord]) -> Vec<f64> {
    window
        .iter()
        .flat_map(|session| {
            let per_set: Vec<f64> = session.sets.iter().filter_map(|set| set.rpe).collect();
            if per_set.is_empty() {
                session.average_rpe.into_iter().collect()
            } else {
                per_set
            }
        })
        .collect()
}

/// Percent change from `baseline`; a zero baseline yields 0
fn percent_change(baseline: f64, current: f64) -> f64 {
    if baseline <= 0.0 {
        return 0.0;
    }
    (current - baseline) / baseline * 100.0
}

fn estimate_one_rep_max(session: &SessionRecord) -> Option<f64> {
    session
        .completed_sets()
        .filter(|set| set.reps > 0 && set.weight > 0.0)
        .map(|set| {
            if set.reps == 1 {
                set.weight
            } else {
                set.weight * (1.0 + f64::from(set.reps) / EPLEY_REPS_DIVISOR)
            }
        })
        .reduce(f64::max)
}
