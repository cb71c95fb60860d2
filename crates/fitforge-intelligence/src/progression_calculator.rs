// ABOUTME: Strategy formulas turning metrics into a concrete next-session prescription
// ABOUTME: Applies weekly safety clamps, plate rounding, alternatives and confidence grading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Progression Calculator
//!
//! Each strategy produces a raw load change. Positive changes then pass
//! through the uniform safety clamps: bounded below by `min_weight_increase`,
//! above by what remains of the weekly budget, and rounded to the plate
//! increment. A budget smaller than the minimum increase holds the load.

use chrono::Duration;
use fitforge_core::constants::time_constants::DAYS_PER_WEEK;
use fitforge_core::models::{ExerciseType, SessionRecord};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use tracing::{debug, info};

use crate::config::intelligence::{
    AutoRegulationConfig, ProgressionCalculatorConfig, SafetyConfig, StrategyConfig,
};
use crate::metrics_analyzer::ProgressionMetrics;
use crate::plateau_detector::{PlateauIndicator, PlateauSignal};
use crate::strategy_selector::{ProgressionStrategy, StrategyReason, StrategySelection};

/// Reps prescribed when no session has been logged
const DEFAULT_TARGET_REPS: u32 = 8;

/// Number of alternative weights offered
const ALTERNATIVE_COUNT: usize = 4;

/// Float comparison tolerance for weights (kg)
const WEIGHT_EPSILON: f64 = 1e-9;

/// How much the suggestion can be trusted
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    /// Driven by defaulted or extreme inputs
    Low,
    /// Short history or a hold
    Medium,
    /// Backed by enough sessions with recorded RPE
    High,
}

/// Next-session prescription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionSuggestion {
    /// Load for the next session (kg), on the rounding grid and positive
    pub suggested_weight: f64,
    /// Change from the current weight (negative for a deload)
    pub increase_amount: f64,
    /// Trust in the suggestion
    pub confidence_level: ConfidenceLevel,
    /// Human-readable explanation
    pub reasoning: String,
    /// Four ascending options including the current weight
    pub alternative_weights: Vec<f64>,
    /// Reps per set for the next session
    pub target_reps: u32,
}

/// No-history starting load class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartingLoad {
    /// Compound lift on a barbell
    BarbellCompound,
    /// Other compound lift
    Compound,
    /// Isolation lift
    Isolation,
    /// Bodyweight movement (added load)
    Bodyweight,
}

/// Everything the calculator needs for one exercise
#[derive(Debug, Clone, Copy)]
pub struct CalculationInput<'a> {
    /// Display name used in reasoning
    pub exercise_name: &'a str,
    /// Compound or isolation
    pub exercise_type: ExerciseType,
    /// Selected strategy
    pub selection: &'a StrategySelection,
    /// Metrics for the evaluation window
    pub metrics: &'a ProgressionMetrics,
    /// Every logged session, oldest first (for the weekly budget)
    pub sessions: &'a [&'a SessionRecord],
    /// Plateau evidence for the same snapshot
    pub plateau: Option<&'a PlateauSignal>,
    /// Starting load class when nothing has been logged
    pub starting_load: StartingLoad,
}

/// Raw strategy outcome before clamping and rounding
struct Decision {
    delta: f64,
    target_reps: u32,
    reasoning: String,
    confidence: ConfidenceLevel,
    /// Reps and reasoning to use instead when the weekly budget blocks the increase
    if_held: Option<(u32, String)>,
}

impl Decision {
    fn hold(target_reps: u32, reasoning: String) -> Self {
        Self {
            delta: 0.0,
            target_reps,
            reasoning,
            confidence: ConfidenceLevel::Medium,
            if_held: None,
        }
    }
}

/// Applies strategy formulas and safety clamps
#[derive(Debug, Clone, Default)]
pub struct ProgressionCalculator {
    config: ProgressionCalculatorConfig,
    strategy: StrategyConfig,
    auto_regulation: AutoRegulationConfig,
    readiness_rpe_ceiling: f64,
}

impl ProgressionCalculator {
    /// Create a calculator
    #[must_use]
    pub const fn new(
        config: ProgressionCalculatorConfig,
        strategy: StrategyConfig,
        auto_regulation: AutoRegulationConfig,
        readiness_rpe_ceiling: f64,
    ) -> Self {
        Self {
            config,
            strategy,
            auto_regulation,
            readiness_rpe_ceiling,
        }
    }

    /// Produce the next-session suggestion
    #[must_use]
    pub fn calculate(
        &self,
        input: &CalculationInput<'_>,
        safety: &SafetyConfig,
    ) -> ProgressionSuggestion {
        let Some(latest) = input.sessions.last() else {
            return self.starting_suggestion(input, safety);
        };

        let current = input.metrics.current_weight;
        let step = safety.step_for(input.exercise_type);

        if input.selection.strategy == ProgressionStrategy::DeloadProtocol {
            return self.deload(input, latest, safety);
        }

        let mut decision = match input.selection.strategy {
            ProgressionStrategy::DoubleProgression => self.double_progression(input, latest, step),
            ProgressionStrategy::AutoRegulation => self.auto_regulation(input, safety),
            _ => self.linear(input, latest, step),
        };

        if decision.delta > 0.0 {
            clamp_increase(&mut decision, current, input.sessions, safety);
        } else if decision.delta < 0.0 {
            decision.delta = decision.delta.max(-safety.max_weekly_increase);
        }

        let suggested = finalize_weight(current, decision.delta, input.sessions, safety);
        // The positive floor can lift a sub-increment load; a hold never reports a gain
        let increase_amount = if decision.delta > 0.0 {
            suggested - current
        } else {
            (suggested - current).min(0.0)
        };

        debug!(
            exercise = input.exercise_name,
            strategy = %input.selection.strategy,
            current,
            suggested,
            increase = increase_amount,
            "Calculated progression"
        );

        ProgressionSuggestion {
            suggested_weight: suggested,
            increase_amount,
            confidence_level: decision.confidence,
            reasoning: decision.reasoning,
            alternative_weights: alternative_weights(Some(current), suggested, step, safety),
            target_reps: decision.target_reps,
        }
    }

    fn starting_suggestion(
        &self,
        input: &CalculationInput<'_>,
        safety: &SafetyConfig,
    ) -> ProgressionSuggestion {
        let starts = &self.config.starting_weights;
        let start = match input.starting_load {
            StartingLoad::BarbellCompound => starts.barbell_compound,
            StartingLoad::Compound => starts.compound,
            StartingLoad::Isolation => starts.isolation,
            StartingLoad::Bodyweight => starts.bodyweight,
        };
        let suggested = safety
            .round_weight(start)
            .max(safety.weight_rounding_increment);

        info!(
            exercise = input.exercise_name,
            suggested,
            starting_load = ?input.starting_load,
            "No history, prescribing starting weight"
        );

        ProgressionSuggestion {
            suggested_weight: suggested,
            increase_amount: 0.0,
            confidence_level: ConfidenceLevel::Medium,
            reasoning: format!(
                "No previous data for {}; starting conservatively at {suggested} kg for {DEFAULT_TARGET_REPS} reps",
                input.exercise_name
            ),
            alternative_weights: alternative_weights(
                None,
                suggested,
                safety.step_for(input.exercise_type),
                safety,
            ),
            target_reps: DEFAULT_TARGET_REPS,
        }
    }

    fn linear(
        &self,
        input: &CalculationInput<'_>,
        latest: &SessionRecord,
        step: f64,
    ) -> Decision {
        let metrics = input.metrics;
        let target_reps = latest.target_reps;

        if metrics.ready_for_progression {
            let high = metrics.sessions_analyzed >= self.config.high_confidence_min_sessions
                && !metrics.rpe_defaulted
                && metrics.consistency_score >= self.config.high_confidence_consistency;
            let mut reasoning = format!(
                "Completed {}x{} at RPE {:.1}; adding {step} kg",
                latest.target_sets, latest.target_reps, metrics.latest_session_rpe
            );
            push_rpe_default_note(&mut reasoning, metrics);
            return Decision {
                delta: step,
                target_reps,
                reasoning,
                confidence: if high {
                    ConfidenceLevel::High
                } else {
                    ConfidenceLevel::Medium
                },
                if_held: None,
            };
        }

        let mut blockers = Vec::new();
        if !latest.met_targets() {
            blockers.push(format!(
                "incomplete reps ({}/{} completed)",
                latest.completed_reps(),
                latest.target_total_reps()
            ));
        }
        if metrics.latest_session_rpe >= self.readiness_rpe_ceiling {
            blockers.push(format!(
                "high RPE ({:.1}, limit below {:.1})",
                metrics.latest_session_rpe, self.readiness_rpe_ceiling
            ));
        }
        Decision::hold(
            target_reps,
            format!(
                "Holding at {} kg: {}",
                metrics.current_weight,
                blockers.join(" and ")
            ),
        )
    }

    fn double_progression(
        &self,
        input: &CalculationInput<'_>,
        latest: &SessionRecord,
        step: f64,
    ) -> Decision {
        let metrics = input.metrics;
        let (floor, ceiling) = input.selection.rep_range.map_or_else(
            || {
                let floor = latest.target_reps;
                (
                    floor,
                    latest
                        .target_reps_max
                        .unwrap_or_else(|| floor.saturating_add(self.strategy.default_rep_range_span)),
                )
            },
            |range| (range.floor, range.ceiling),
        );

        let completed: Vec<u32> = latest.completed_sets().map(|set| set.reps).collect();
        let lowest = completed.iter().copied().min().unwrap_or(0);
        let all_at_ceiling =
            completed.len() >= latest.target_sets as usize && lowest >= ceiling;

        if all_at_ceiling {
            let high = metrics.sessions_analyzed >= self.config.high_confidence_min_sessions
                && !metrics.rpe_defaulted;
            return Decision {
                delta: step,
                target_reps: floor,
                reasoning: format!(
                    "All {} sets reached the {ceiling}-rep ceiling; adding {step} kg and resetting to {floor} reps",
                    completed.len()
                ),
                confidence: if high {
                    ConfidenceLevel::High
                } else {
                    ConfidenceLevel::Medium
                },
                if_held: Some((
                    ceiling,
                    format!(
                        "All {} sets reached the {ceiling}-rep ceiling; staying at {} kg for {ceiling} reps",
                        completed.len(),
                        metrics.current_weight
                    ),
                )),
            };
        }

        let target_reps = if lowest < floor {
            floor
        } else {
            (lowest + 1).min(ceiling)
        };
        Decision::hold(
            target_reps,
            format!(
                "Building reps toward {ceiling} (range {floor}-{ceiling}, lowest set {lowest}); hold {} kg and aim for {target_reps} reps",
                metrics.current_weight
            ),
        )
    }

    fn auto_regulation(&self, input: &CalculationInput<'_>, safety: &SafetyConfig) -> Decision {
        let metrics = input.metrics;
        let band = &self.auto_regulation;
        let observed = metrics.latest_session_rpe;
        let target_reps = input.sessions.last().map_or(DEFAULT_TARGET_REPS, |s| s.target_reps);

        let gap = if observed < band.target_rpe_low {
            observed - band.target_rpe_low
        } else if observed > band.target_rpe_high {
            observed - band.target_rpe_high
        } else {
            0.0
        };

        let delta = (-gap * band.sensitivity * metrics.current_weight)
            .clamp(-safety.max_weekly_increase, safety.max_weekly_increase);

        let confidence = if metrics.rpe_defaulted || gap.abs() > self.config.extreme_rpe_gap {
            ConfidenceLevel::Low
        } else if gap.abs() < WEIGHT_EPSILON {
            ConfidenceLevel::Medium
        } else if metrics.sessions_analyzed >= self.config.high_confidence_min_sessions {
            ConfidenceLevel::High
        } else {
            ConfidenceLevel::Medium
        };

        let mut reasoning = if gap.abs() < WEIGHT_EPSILON {
            format!(
                "RPE {observed:.1} is inside the {:.1}-{:.1} target band; holding {} kg",
                band.target_rpe_low, band.target_rpe_high, metrics.current_weight
            )
        } else {
            format!(
                "RPE {observed:.1} is {:.1} {} the {:.1}-{:.1} target band; adjusting load by {delta:.2} kg",
                gap.abs(),
                if gap > 0.0 { "above" } else { "below" },
                band.target_rpe_low,
                band.target_rpe_high
            )
        };
        push_rpe_default_note(&mut reasoning, metrics);

        Decision {
            delta,
            target_reps,
            reasoning,
            confidence,
            if_held: None,
        }
    }

    fn deload(
        &self,
        input: &CalculationInput<'_>,
        latest: &SessionRecord,
        safety: &SafetyConfig,
    ) -> ProgressionSuggestion {
        let metrics = input.metrics;
        let current = metrics.current_weight;
        let suggested = safety
            .round_weight(current * self.config.deload_factor)
            .max(safety.weight_rounding_increment);
        let percent = (1.0 - self.config.deload_factor) * 100.0;
        // Loads at or below one increment cannot drop further; cut reps instead
        let volume_cut = suggested >= current - WEIGHT_EPSILON;

        let trigger = match input.selection.reason {
            StrategyReason::AcuteRpe => format!(
                "latest session RPE {:.1} reached the deload threshold of {:.1}",
                metrics.latest_session_rpe, self.strategy.deload_rpe
            ),
            StrategyReason::SustainedRpe => format!(
                "RPE stayed at or above {:.1} across the last {} sessions",
                self.strategy.sustained_high_rpe, metrics.sessions_analyzed
            ),
            StrategyReason::Plateau => input.plateau.map_or_else(
                || "plateau detected".to_owned(),
                |signal| {
                    format!(
                        "plateau detected ({:.0}% confidence: {})",
                        signal.confidence,
                        describe_indicators(signal)
                    )
                },
            ),
            _ => "deload requested".to_owned(),
        };

        let high = metrics.sessions_analyzed >= self.config.high_confidence_min_sessions
            && !metrics.rpe_defaulted;

        info!(
            exercise = input.exercise_name,
            current,
            suggested,
            reason = ?input.selection.reason,
            "Deload prescribed"
        );

        let (increase_amount, target_reps, reasoning) = if volume_cut {
            let reps = deloaded_reps(latest.target_reps, self.config.deload_factor);
            (
                0.0,
                reps,
                format!(
                    "Deload: {trigger}; load cannot go below {current} kg, cutting volume by {percent:.0}% to {reps} reps"
                ),
            )
        } else {
            (
                suggested - current,
                latest.target_reps,
                format!("Deload: {trigger}; reducing load by {percent:.0}% to {suggested} kg"),
            )
        };

        ProgressionSuggestion {
            suggested_weight: suggested,
            increase_amount,
            confidence_level: if high {
                ConfidenceLevel::High
            } else {
                ConfidenceLevel::Medium
            },
            reasoning,
            alternative_weights: alternative_weights(
                Some(current),
                suggested,
                safety.step_for(input.exercise_type),
                safety,
            ),
            target_reps,
        }
    }
}

/// Reps per set after a volume deload, never below one
fn deloaded_reps(target_reps: u32, deload_factor: f64) -> u32 {
    let reduced = (f64::from(target_reps) * deload_factor).round() as u32;
    reduced.clamp(1, target_reps.saturating_sub(1).max(1))
}

/// Bound a positive change to `[min_weight_increase, remaining weekly budget]`
fn clamp_increase(
    decision: &mut Decision,
    current: f64,
    sessions: &[&SessionRecord],
    safety: &SafetyConfig,
) {
    let applied = applied_within_week(sessions);
    let budget = weekly_budget(sessions, safety);

    if budget < safety.min_weight_increase {
        debug!(current, applied, budget, "Weekly increase budget exhausted");
        decision.delta = 0.0;
        decision.confidence = ConfidenceLevel::Medium;
        if let Some((reps, reasoning)) = decision.if_held.take() {
            decision.target_reps = reps;
            decision.reasoning = reasoning;
        }
        let _ = write!(
            decision.reasoning,
            "; holding because {applied} kg was already added in the last {DAYS_PER_WEEK} days (weekly limit {} kg)",
            safety.max_weekly_increase
        );
        return;
    }

    let clamped = decision.delta.clamp(safety.min_weight_increase, budget);
    if clamped < decision.delta - WEIGHT_EPSILON {
        debug!(
            requested = decision.delta,
            clamped, budget, "Capped increase at weekly limit"
        );
        let _ = write!(
            decision.reasoning,
            "; increase capped at {clamped} kg by the weekly limit"
        );
    }
    decision.delta = clamped;
}

/// Total positive load change at sessions within the seven days ending at the latest session
fn applied_within_week(sessions: &[&SessionRecord]) -> f64 {
    let Some(latest) = sessions.last() else {
        return 0.0;
    };
    let cutoff = latest.date - Duration::days(DAYS_PER_WEEK);
    sessions
        .windows(2)
        .filter_map(|pair| match pair {
            [before, after] if after.date > cutoff => {
                Some((after.representative_weight() - before.representative_weight()).max(0.0))
            }
            _ => None,
        })
        .sum()
}

fn weekly_budget(sessions: &[&SessionRecord], safety: &SafetyConfig) -> f64 {
    (safety.max_weekly_increase - applied_within_week(sessions)).max(0.0)
}

/// Apply the change, round to the grid, and keep rounding inside the budget
fn finalize_weight(
    current: f64,
    delta: f64,
    sessions: &[&SessionRecord],
    safety: &SafetyConfig,
) -> f64 {
    let increment = safety.weight_rounding_increment;
    let mut suggested = safety.round_weight(current + delta);
    if delta > 0.0 {
        let budget = weekly_budget(sessions, safety);
        if suggested - current > budget + WEIGHT_EPSILON {
            suggested -= increment;
        }
    }
    suggested.max(increment)
}

/// Four distinct ascending options: the current weight as logged, the
/// suggestion, then steps alternating above and below it
#[must_use]
pub fn alternative_weights(
    current: Option<f64>,
    suggested: f64,
    step: f64,
    safety: &SafetyConfig,
) -> Vec<f64> {
    fn push_distinct(options: &mut Vec<f64>, value: f64) {
        if value > 0.0
            && options.len() < ALTERNATIVE_COUNT
            && !options.iter().any(|v| (v - value).abs() < WEIGHT_EPSILON)
        {
            options.push(value);
        }
    }

    let step = step.max(safety.weight_rounding_increment);
    let mut options: Vec<f64> = Vec::with_capacity(ALTERNATIVE_COUNT);

    if let Some(current) = current {
        push_distinct(&mut options, current);
    }
    push_distinct(&mut options, suggested);

    // Bounded: at extreme magnitudes every candidate rounds back onto the suggestion
    for k in 1..=ALTERNATIVE_COUNT * 2 {
        if options.len() == ALTERNATIVE_COUNT {
            break;
        }
        let offset = k as f64 * step;
        push_distinct(&mut options, safety.round_weight(suggested + offset));
        push_distinct(&mut options, safety.round_weight(suggested - offset));
    }

    options.sort_by(f64::total_cmp);
    options
}

fn push_rpe_default_note(reasoning: &mut String, metrics: &ProgressionMetrics) {
    if metrics.rpe_defaulted {
        let _ = write!(
            reasoning,
            " (no RPE recorded, assumed RPE {:.0})",
            metrics.latest_session_rpe
        );
    }
}

fn describe_indicators(signal: &PlateauSignal) -> String {
    signal
        .fired_indicators
        .iter()
        .map(|indicator| match indicator {
            PlateauIndicator::WeightStagnation => "weight stagnation",
            PlateauIndicator::RpeElevation => "rising RPE",
            PlateauIndicator::CompletionDecline => "declining completion",
            PlateauIndicator::FormDegradation => "form degradation",
        })
        .collect::<Vec<_>>()
        .join(", ")
}
