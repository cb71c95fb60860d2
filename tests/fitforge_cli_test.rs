// ABOUTME: Integration tests for the fitforge-cli binary
// ABOUTME: Runs the built executable against temporary JSON files and checks output and exit status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use serde_json::Value;
use tempfile::TempDir;

const SQUAT_HISTORY: &str = r#"{
    "exercise_id": "squat",
    "exercise_name": "Back Squat",
    "exercise_type": "compound"
}"#;

const SQUAT_CATALOG: &str = r#"[
    {
        "id": "squat",
        "name": "Back Squat",
        "exercise_type": "compound",
        "equipment": ["barbell"]
    }
]"#;

fn cli_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_fitforge-cli"))
}

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(cli_binary())
        .args(args)
        .env("RUST_LOG", "error")
        .output()
        .expect("Failed to execute fitforge-cli");

    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

fn write(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

fn first_suggested_weight(stdout: &str) -> f64 {
    let results: Vec<Value> = serde_json::from_str(stdout).unwrap();
    results[0]["suggestion"]["suggested_weight"].as_f64().unwrap()
}

#[test]
fn test_cli_help_lists_subcommands() {
    let (code, stdout, _) = run_cli(&["--help"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("progression"));
    assert!(stdout.contains("plateau"));
    assert!(stdout.contains("recovery"));
}

#[test]
fn test_progression_help_lists_catalog_flag() {
    let (code, stdout, _) = run_cli(&["progression", "--help"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("--catalog"));
}

#[test]
fn test_progression_catalog_drives_starting_load() {
    let dir = TempDir::new().unwrap();
    let history = write(&dir, "history.json", SQUAT_HISTORY);
    let catalog = write(&dir, "catalog.json", SQUAT_CATALOG);

    let (code, stdout, stderr) =
        run_cli(&["progression", "--history", &history, "--catalog", &catalog]);

    assert_eq!(code, 0, "stderr: {stderr}");
    assert_eq!(first_suggested_weight(&stdout), 20.0);
}

#[test]
fn test_progression_without_catalog_uses_generic_compound_start() {
    let dir = TempDir::new().unwrap();
    let history = write(&dir, "history.json", SQUAT_HISTORY);

    let (code, stdout, stderr) = run_cli(&["progression", "--history", &history]);

    assert_eq!(code, 0, "stderr: {stderr}");
    assert_eq!(first_suggested_weight(&stdout), 10.0);
}

#[test]
fn test_missing_history_file_exits_with_not_found_status() {
    let (code, stdout, stderr) = run_cli(&[
        "progression",
        "--history",
        "/nonexistent/fitforge/history.json",
    ]);

    assert_eq!(code, 66);
    assert!(stdout.is_empty());
    assert!(stderr.contains("RESOURCE_NOT_FOUND"));
}
