// ABOUTME: Priority-ordered progression strategy selection
// ABOUTME: Deload triggers first, then rep-range, RPE-band and finally linear progression
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Strategy Selector
//!
//! Rules are evaluated in strict priority order and the first match wins:
//!
//! 1. Deload protocol: acute RPE, sustained high RPE across the window, or an
//!    actionable plateau recommending a deload
//! 2. Double progression: isolation lift with a rep range
//! 3. Auto-regulation: RPE consistently inside the target band while the load
//!    has been adjusted in both directions
//! 4. Linear progression

use fitforge_core::models::{ExerciseType, SessionRecord};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::config::intelligence::{AutoRegulationConfig, StrategyConfig};
use crate::metrics_analyzer::ProgressionMetrics;
use crate::plateau_detector::PlateauSignal;

/// Progression strategy applied to the next session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressionStrategy {
    /// Fixed step whenever the lifter is ready
    LinearProgression,
    /// Build reps to the ceiling, then add load
    DoubleProgression,
    /// Adjust load from the RPE gap to the target band
    AutoRegulation,
    /// Planned load reduction
    DeloadProtocol,
}

impl fmt::Display for ProgressionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LinearProgression => write!(f, "linear_progression"),
            Self::DoubleProgression => write!(f, "double_progression"),
            Self::AutoRegulation => write!(f, "auto_regulation"),
            Self::DeloadProtocol => write!(f, "deload_protocol"),
        }
    }
}

/// Why a strategy was selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyReason {
    /// Latest session reached the deload RPE
    AcuteRpe,
    /// Every session in the window sat at or above the sustained RPE
    SustainedRpe,
    /// Actionable plateau recommending a deload
    Plateau,
    /// Isolation lift with a rep range
    RepRange,
    /// RPE held inside the target band with bidirectional load changes
    RpeBand,
    /// No other rule matched
    Default,
    /// Nothing has been logged yet
    NoHistory,
}

/// Rep range for double progression (`floor` is the prescribed reps)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepRange {
    /// Lower bound, reps prescribed after a load increase
    pub floor: u32,
    /// Upper bound, reps at which load increases
    pub ceiling: u32,
}

/// Selected strategy with its trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategySelection {
    /// Strategy to apply
    pub strategy: ProgressionStrategy,
    /// Rule that selected it
    pub reason: StrategyReason,
    /// Rep range when double progression applies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rep_range: Option<RepRange>,
}

impl StrategySelection {
    const fn of(strategy: ProgressionStrategy, reason: StrategyReason) -> Self {
        Self {
            strategy,
            reason,
            rep_range: None,
        }
    }
}

/// Chooses a progression strategy
#[derive(Debug, Clone, Default)]
pub struct StrategySelector {
    config: StrategyConfig,
    auto_regulation: AutoRegulationConfig,
}

impl StrategySelector {
    /// Create a selector
    #[must_use]
    pub const fn new(config: StrategyConfig, auto_regulation: AutoRegulationConfig) -> Self {
        Self {
            config,
            auto_regulation,
        }
    }

    /// Select a strategy for the evaluation window (oldest first)
    #[must_use]
    pub fn select(
        &self,
        exercise_type: ExerciseType,
        window: &[&SessionRecord],
        metrics: &ProgressionMetrics,
        plateau: Option<&PlateauSignal>,
    ) -> StrategySelection {
        let selection = self.select_inner(exercise_type, window, metrics, plateau);
        debug!(
            strategy = %selection.strategy,
            reason = ?selection.reason,
            sessions = window.len(),
            "Selected progression strategy"
        );
        selection
    }

    fn select_inner(
        &self,
        exercise_type: ExerciseType,
        window: &[&SessionRecord],
        metrics: &ProgressionMetrics,
        plateau: Option<&PlateauSignal>,
    ) -> StrategySelection {
        let Some(latest) = window.last() else {
            return StrategySelection::of(
                ProgressionStrategy::LinearProgression,
                StrategyReason::NoHistory,
            );
        };

        if let Some(reason) = self.deload_trigger(window, metrics, plateau) {
            return StrategySelection::of(ProgressionStrategy::DeloadProtocol, reason);
        }

        if exercise_type == ExerciseType::Isolation {
            if let Some(range) = self.rep_range(latest) {
                return StrategySelection {
                    strategy: ProgressionStrategy::DoubleProgression,
                    reason: StrategyReason::RepRange,
                    rep_range: Some(range),
                };
            }
        }

        if self.is_auto_regulated(window) {
            return StrategySelection::of(
                ProgressionStrategy::AutoRegulation,
                StrategyReason::RpeBand,
            );
        }

        StrategySelection::of(
            ProgressionStrategy::LinearProgression,
            StrategyReason::Default,
        )
    }

    fn deload_trigger(
        &self,
        window: &[&SessionRecord],
        metrics: &ProgressionMetrics,
        plateau: Option<&PlateauSignal>,
    ) -> Option<StrategyReason> {
        let latest_recorded = window.last().and_then(|session| session.session_rpe());
        if latest_recorded.is_some_and(|rpe| rpe >= self.config.deload_rpe) {
            return Some(StrategyReason::AcuteRpe);
        }

        let sustained = window.len() >= self.config.sustained_high_rpe_sessions
            && window.iter().all(|session| {
                session
                    .session_rpe()
                    .is_some_and(|rpe| rpe >= self.config.sustained_high_rpe)
            });
        if sustained && !metrics.rpe_defaulted {
            return Some(StrategyReason::SustainedRpe);
        }

        plateau
            .is_some_and(PlateauSignal::recommends_deload)
            .then_some(StrategyReason::Plateau)
    }

    /// Explicit ceiling, else the prescribed reps plus the default span
    fn rep_range(&self, session: &SessionRecord) -> Option<RepRange> {
        let floor = session.target_reps;
        let ceiling = session
            .target_reps_max
            .unwrap_or_else(|| floor.saturating_add(self.config.default_rep_range_span));
        (ceiling > floor).then_some(RepRange { floor, ceiling })
    }

    fn is_auto_regulated(&self, window: &[&SessionRecord]) -> bool {
        let band = &self.auto_regulation;
        let low = band.target_rpe_low - band.band_tolerance;
        let high = band.target_rpe_high + band.band_tolerance;

        let rated: Vec<(f64, f64)> = window
            .iter()
            .filter_map(|session| {
                session
                    .session_rpe()
                    .map(|rpe| (rpe, session.representative_weight()))
            })
            .collect();
        if rated.len() < band.min_sessions {
            return false;
        }
        if !rated.iter().all(|(rpe, _)| (low..=high).contains(rpe)) {
            return false;
        }

        let (mut rose, mut fell) = (false, false);
        for pair in rated.windows(2) {
            if let [(_, before), (_, after)] = pair {
                rose |= after > before;
                fell |= after < before;
            }
        }
        rose && fell
    }
}
