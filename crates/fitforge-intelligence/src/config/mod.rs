// ABOUTME: Configuration module for fitforge-intelligence crate
// ABOUTME: Re-exports engine configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Engine configuration (safety clamps, strategy thresholds, recovery, plateau)
pub mod intelligence;

pub use intelligence::EngineConfig;
