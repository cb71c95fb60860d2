// ABOUTME: Re-exports command modules for fitforge-cli
// ABOUTME: Provides progression, plateau and recovery commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod plateau;
pub mod progression;
pub mod recovery;
