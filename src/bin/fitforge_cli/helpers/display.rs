// ABOUTME: Output formatting helpers for fitforge-cli
// ABOUTME: Prints results as pretty JSON and per-exercise failures as structured error objects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io::{self, Write};

use anyhow::Result;
use fitforge::errors::{AppError, ErrorResponse};
use serde::Serialize;
use serde_json::Value;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// Print an engine error as a JSON error object on stderr
pub fn print_error(error: &AppError) {
    match serde_json::to_string_pretty(&ErrorResponse::from(error)) {
        Ok(json) => eprintln!("{json}"),
        Err(_) => eprintln!("{error}"),
    }
}

/// JSON value for a per-item result, embedding failures as error responses
pub fn result_value<T: Serialize>(result: &Result<T, AppError>) -> Result<Value> {
    Ok(match result {
        Ok(value) => serde_json::to_value(value)?,
        Err(error) => serde_json::to_value(ErrorResponse::from(error))?,
    })
}
