// ABOUTME: Progression command for fitforge-cli
// ABOUTME: Analyses every exercise history in a file and prints one result per exercise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use fitforge::input::{load_catalog, load_histories};
use fitforge::intelligence::{EngineConfig, InMemoryExerciseCatalog, ProgressionEngine};
use serde_json::Value;
use tracing::info;

use crate::helpers::display::{print_json, result_value};

/// Run progression analysis over a history file
pub fn run(
    config: EngineConfig,
    history: &Path,
    catalog: Option<&Path>,
    max_weekly_increase: Option<f64>,
) -> Result<()> {
    let histories = load_histories(history)?;
    let catalog = match catalog {
        Some(path) => load_catalog(path)?,
        None => InMemoryExerciseCatalog::new(),
    };

    let mut safety = config.safety.clone();
    if let Some(cap) = max_weekly_increase {
        safety.max_weekly_increase = cap;
    }

    let engine = ProgressionEngine::new(config, Arc::new(catalog));
    let results = engine.analyze_batch(&histories, &safety);

    let failures = results.iter().filter(|r| r.is_err()).count();
    info!(
        exercises = histories.len(),
        failures, "Progression analysis complete"
    );

    let values = results
        .iter()
        .map(result_value)
        .collect::<Result<Vec<Value>>>()?;
    print_json(&values)
}
