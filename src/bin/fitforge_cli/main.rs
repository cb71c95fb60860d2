// ABOUTME: FitForge CLI - runs the progression engine over JSON training logs
// ABOUTME: Progression suggestions, plateau signals and muscle recovery printed as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Next-session suggestion for every exercise in a history file
//! fitforge-cli progression --history squat.json
//!
//! # Same, with a config file and a tighter weekly cap
//! fitforge-cli progression --history log.json --config engine.json --max-weekly-increase 2.5
//!
//! # Starting loads informed by exercise metadata
//! fitforge-cli progression --history log.json --catalog exercises.json
//!
//! # Plateau evidence only
//! fitforge-cli plateau --history log.json
//!
//! # Muscle recovery at a given instant
//! fitforge-cli recovery --workouts workouts.json --catalog exercises.json --now 2025-03-10T08:00:00Z
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Error, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use fitforge::errors::AppError;
use fitforge::input::load_engine_config;
use fitforge::logging::LoggingConfig;
use tracing::{debug, error};

#[derive(Parser)]
#[command(
    name = "fitforge-cli",
    about = "FitForge progression engine CLI",
    long_about = "Runs progression, plateau and recovery analysis over JSON training logs and prints JSON results."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Engine configuration file (JSON); environment overrides still apply
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Suggest the next session for each exercise history
    Progression {
        /// History file: one exercise history or an array of them
        #[arg(long)]
        history: PathBuf,

        /// Override the weekly load increase cap (kg)
        #[arg(long)]
        max_weekly_increase: Option<f64>,

        /// Exercise catalog file used for starting loads and bodyweight detection
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Evaluate plateau indicators for each exercise history
    Plateau {
        /// History file: one exercise history or an array of them
        #[arg(long)]
        history: PathBuf,
    },

    /// Estimate per-muscle recovery from workout logs
    Recovery {
        /// Workout log file (array of workouts)
        #[arg(long)]
        workouts: PathBuf,

        /// Exercise catalog file providing muscle engagement shares
        #[arg(long)]
        catalog: PathBuf,

        /// Evaluation instant (RFC 3339), defaults to the current time
        #[arg(long)]
        now: Option<DateTime<Utc>>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

/// Print a failure on stderr; engine errors carry their own exit status
fn report(err: &Error) -> ExitCode {
    if let Some(app_error) = err.downcast_ref::<AppError>() {
        error!(code = ?app_error.code, "{}", app_error.message);
        helpers::display::print_error(app_error);
        return ExitCode::from(app_error.exit_code());
    }
    eprintln!("Error: {err:#}");
    ExitCode::FAILURE
}

fn run(cli: Cli) -> Result<()> {
    LoggingConfig::from_env().with_verbose(cli.verbose).init()?;
    debug!("FitForge CLI starting");

    let config = load_engine_config(cli.config.as_deref())?;

    match cli.command {
        Command::Progression {
            history,
            max_weekly_increase,
            catalog,
        } => commands::progression::run(
            config,
            &history,
            catalog.as_deref(),
            max_weekly_increase,
        )?,
        Command::Plateau { history } => commands::plateau::run(config, &history)?,
        Command::Recovery {
            workouts,
            catalog,
            now,
        } => commands::recovery::run(config, &workouts, &catalog, now.unwrap_or_else(Utc::now))?,
    }

    Ok(())
}
