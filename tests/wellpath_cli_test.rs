// ABOUTME: Integration tests for the wellpath-cli binary
// ABOUTME: Checks stdout JSON, stderr error bodies, and exit status for each command
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::Command;

const VALID_REQUEST: &str = r#"{
    "subject_id": "cli-1",
    "profile": {"age": 30, "gender": "male", "height_cm": 175.0, "weight_kg": 70.0}
}"#;

const INVALID_REQUEST: &str = r#"{
    "subject_id": "cli-2",
    "profile": {"age": 40, "gender": "female", "height_cm": 0.0, "weight_kg": 60.0}
}"#;

/// Run the CLI with a clean logging environment and capture its output
fn run_cli(args: &[&str]) -> (i32, String, String) {
    run_cli_with_env(args, &[])
}

fn run_cli_with_env(args: &[&str], envs: &[(&str, &str)]) -> (i32, String, String) {
    let mut command = Command::new(env!("CARGO_BIN_EXE_wellpath-cli"));
    command.args(args).env_remove("RUST_LOG");
    for (key, value) in envs {
        command.env(key, value);
    }
    let output = command.output().unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

fn write_input(dir: &Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

/// The error body is the last line written to stderr
fn error_body(stderr: &str) -> Value {
    let line = stderr.lines().rev().find(|line| !line.trim().is_empty()).unwrap();
    serde_json::from_str(line).unwrap()
}

#[test]
fn test_assess_writes_report_to_stdout() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_input(temp_dir.path(), "request.json", VALID_REQUEST);

    let (exit_code, stdout, _stderr) = run_cli(&["assess", "--input", &input]);

    assert_eq!(exit_code, 0, "assess should succeed");
    let report: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(report["subject_id"], "cli-1");
    assert_eq!(report["metrics"]["bmr"], 1649);
    assert!(report["risks"].is_array());
    assert!(report["coaching"].is_array());
}

#[test]
fn test_assess_invalid_profile_reports_json_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_input(temp_dir.path(), "request.json", INVALID_REQUEST);

    let (exit_code, stdout, stderr) = run_cli(&["assess", "--input", &input]);

    assert_eq!(exit_code, 1, "invalid profile should exit with 1");
    assert!(stdout.trim().is_empty(), "no report on stdout: {stdout}");
    let body = error_body(&stderr);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    assert_eq!(body["error"]["field"], "height_cm");
}

#[test]
fn test_assess_missing_file_reports_json_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let missing = temp_dir.path().join("absent.json");

    let (exit_code, _stdout, stderr) =
        run_cli(&["assess", "--input", &missing.to_string_lossy()]);

    assert_eq!(exit_code, 1);
    assert_eq!(error_body(&stderr)["error"]["code"], "INVALID_INPUT");
}

#[test]
fn test_batch_reports_every_entry_and_fails_on_bad_entry() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_input(
        temp_dir.path(),
        "batch.json",
        &format!("[{VALID_REQUEST}, {INVALID_REQUEST}]"),
    );

    let (exit_code, stdout, _stderr) = run_cli(&["batch", "--input", &input]);

    assert_eq!(exit_code, 1, "a failed entry should fail the batch");
    let entries: Value = serde_json::from_str(stdout.trim()).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["subject_id"], "cli-1");
    assert_eq!(entries[1]["error"]["code"], "INVALID_INPUT");
}

#[test]
fn test_batch_of_valid_entries_succeeds() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_input(
        temp_dir.path(),
        "batch.json",
        &format!("[{VALID_REQUEST}, {VALID_REQUEST}]"),
    );

    let (exit_code, stdout, _stderr) = run_cli(&["batch", "--input", &input]);

    assert_eq!(exit_code, 0);
    let entries: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(entries.as_array().map(Vec::len), Some(2));
}

#[test]
fn test_interactions_reports_known_pair() {
    let (exit_code, stdout, _stderr) = run_cli(&["interactions", "warfarin", "aspirin"]);

    assert_eq!(exit_code, 0);
    let output: Value = serde_json::from_str(stdout.trim()).unwrap();
    let findings = output["findings"].as_array().unwrap();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0]["severity"], "severe");
    assert_eq!(
        findings[0]["medication_ids"],
        serde_json::json!(["aspirin", "warfarin"])
    );
}

#[test]
fn test_metrics_command_prints_body_metrics() {
    let (exit_code, stdout, _stderr) = run_cli(&[
        "metrics",
        "--weight-kg",
        "70",
        "--height-cm",
        "175",
        "--age",
        "30",
        "--gender",
        "male",
    ]);

    assert_eq!(exit_code, 0);
    let metrics: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(metrics["bmr"], 1649);
    assert_eq!(metrics["tdee"], 2556);
}

#[test]
fn test_invalid_log_filter_does_not_block_commands() {
    let (exit_code, stdout, _stderr) = run_cli_with_env(
        &["interactions", "warfarin", "aspirin"],
        &[("RUST_LOG", "wellpath=loudest")],
    );

    assert_eq!(exit_code, 0, "logging setup should not fail the command");
    let output: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(output["findings"].as_array().map(Vec::len), Some(1));
}
