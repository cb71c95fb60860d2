// ABOUTME: Recovery command for fitforge-cli
// ABOUTME: Estimates per-muscle fatigue from workout logs and catalog engagement shares
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};
use fitforge::input::{load_catalog, load_workouts};
use fitforge::intelligence::{EngineConfig, ProgressionEngine};
use tracing::info;

use crate::helpers::display::print_json;

/// Run recovery estimation at `now`
pub fn run(config: EngineConfig, workouts: &Path, catalog: &Path, now: DateTime<Utc>) -> Result<()> {
    let workouts = load_workouts(workouts)?;
    let catalog = load_catalog(catalog)?;
    let engine = ProgressionEngine::new(config, Arc::new(catalog));

    let states = engine.estimate_recovery(&workouts, now)?;
    info!(
        workouts = workouts.len(),
        muscles = states.len(),
        %now,
        "Recovery estimation complete"
    );
    print_json(&states)
}
