// ABOUTME: Least-squares trend helpers for per-session training signals
// ABOUTME: Slope over evenly spaced sessions, used by plateau indicators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: session counts are tiny

/// Statistical helpers over per-session series
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Arithmetic mean, `None` for an empty series
    #[must_use]
    pub fn mean(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }

    /// Least-squares slope of `values` against their index (change per session)
    ///
    /// Returns `None` for fewer than two points.
    #[must_use]
    pub fn slope(values: &[f64]) -> Option<f64> {
        if values.len() < 2 {
            return None;
        }

        let n = values.len() as f64;
        let mean_x = (n - 1.0) / 2.0;
        let mean_y = values.iter().sum::<f64>() / n;

        let (numerator, denominator) =
            values
                .iter()
                .enumerate()
                .fold((0.0, 0.0), |(num, den), (i, y)| {
                    let dx = i as f64 - mean_x;
                    (dx.mul_add(y - mean_y, num), dx.mul_add(dx, den))
                });

        if denominator.abs() < f64::EPSILON {
            return None;
        }
        Some(numerator / denominator)
    }
}
