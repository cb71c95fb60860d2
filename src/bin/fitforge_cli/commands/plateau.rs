// ABOUTME: Plateau command for fitforge-cli
// ABOUTME: Prints the plateau signal for every exercise history in a file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use fitforge::input::load_histories;
use fitforge::intelligence::{EngineConfig, InMemoryExerciseCatalog, ProgressionEngine};
use serde_json::{json, Value};

use crate::helpers::display::{print_json, result_value};

/// Run plateau detection over a history file
pub fn run(config: EngineConfig, history: &Path) -> Result<()> {
    let histories = load_histories(history)?;
    let engine = ProgressionEngine::new(config, Arc::new(InMemoryExerciseCatalog::new()));

    let values = histories
        .iter()
        .map(|history| {
            let signal = result_value(&engine.detect_plateau(history))?;
            Ok(json!({
                "exercise_id": history.exercise_id,
                "plateau": signal,
            }))
        })
        .collect::<Result<Vec<Value>>>()?;
    print_json(&values)
}
