// ABOUTME: Re-exports helper modules for fitforge-cli
// ABOUTME: Provides JSON output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
