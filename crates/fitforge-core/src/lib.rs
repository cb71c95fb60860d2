// ABOUTME: Core types and constants for the FitForge progression engine
// ABOUTME: Foundation crate with error handling, training data models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `FitForge` Core
//!
//! Foundation crate providing shared types and constants for the `FitForge`
//! progression engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Training defaults organized by domain
//! - **models**: Exercise history, workout log, equipment and muscle models

/// Unified error handling system with standard error codes
pub mod errors;

/// Training constants organized by domain
pub mod constants;

/// Core data models (sets, sessions, exercise history, workouts, equipment)
pub mod models;
