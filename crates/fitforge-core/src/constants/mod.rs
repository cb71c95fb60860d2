// ABOUTME: Training constants shared by models, validation, and the intelligence engine
// ABOUTME: RPE scale bounds, load defaults, recovery windows and time conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training constants organized by domain.

/// Rate of Perceived Exertion scale
pub mod rpe {
    /// Lowest valid RPE value
    pub const MIN_RPE: f64 = 1.0;

    /// Highest valid RPE value (maximal effort, no reps in reserve)
    pub const MAX_RPE: f64 = 10.0;

    /// RPE assumed when no set in the evaluation window recorded one
    pub const DEFAULT_RPE: f64 = 7.0;
}

/// Load increments and rounding
pub mod load {
    /// Default weight step for compound lifts (kg)
    pub const COMPOUND_STEP_KG: f64 = 2.5;

    /// Default weight step for isolation lifts (kg)
    pub const ISOLATION_STEP_KG: f64 = 1.25;

    /// Default plate rounding increment (kg)
    pub const ROUNDING_INCREMENT_KG: f64 = 0.25;

    /// Default smallest meaningful positive load change (kg)
    pub const MIN_WEIGHT_INCREASE_KG: f64 = 1.25;

    /// Default cap on load added within a seven day window (kg)
    pub const MAX_WEEKLY_INCREASE_KG: f64 = 5.0;

    /// Default multiplier applied to the working weight on a deload
    pub const DELOAD_FACTOR: f64 = 0.9;

    /// Standard olympic barbell (kg), used as the no-history start for barbell lifts
    pub const EMPTY_BARBELL_KG: f64 = 20.0;

    /// Heaviest load accepted for a single set (kg), about twice the heaviest lift on record
    pub const MAX_SET_WEIGHT_KG: f64 = 1000.0;
}

/// Form score scale
pub mod form {
    /// Lowest valid form score
    pub const MIN_FORM_SCORE: f64 = 0.0;

    /// Highest valid form score
    pub const MAX_FORM_SCORE: f64 = 10.0;
}

/// Muscle recovery model
pub mod recovery {
    /// Days for a maximally stressed muscle to fully recover
    pub const RECOVERY_WINDOW_DAYS: f64 = 5.0;

    /// Fatigue at or above which a muscle is overworked (percent)
    pub const OVERWORKED_FATIGUE_PERCENT: f64 = 70.0;

    /// Fatigue below which a muscle is undertrained (percent)
    pub const UNDERTRAINED_FATIGUE_PERCENT: f64 = 30.0;
}

/// Time conversions
pub mod time_constants {
    /// Seconds in a day
    pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

    /// Days in the progression cap window
    pub const DAYS_PER_WEEK: i64 = 7;
}
