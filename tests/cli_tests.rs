//! Integration tests for the CLI interface
//!
//! Tests the entry point, argument handling, and the wasteful commands
//! end to end through the real binary.

use assert_cmd::Command;
use predicates::prelude::*;

mod common;
use common::TestContext;

#[test]
fn test_cli_help_lists_the_commands() {
    let mut cmd = Command::cargo_bin("wastrel").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("profile"))
        .stdout(predicate::str::contains("log-check"));
}

#[test]
fn test_cli_without_a_command_shows_usage() {
    let mut cmd = Command::cargo_bin("wastrel").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_command() {
    let mut cmd = Command::cargo_bin("wastrel").unwrap();
    cmd.arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_run_prints_the_progress_lines() {
    let ctx = TestContext::new().unwrap();
    let mut cmd = Command::cargo_bin("wastrel").unwrap();
    cmd.arg("run")
        .arg("--log-file")
        .arg(ctx.log_path())
        .arg("--list-size")
        .arg("1000")
        .arg("--string-count")
        .arg("100")
        .arg("--burn")
        .arg("10000")
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting wasteful workload..."))
        .stdout(predicate::str::contains("Materialized 1000 squared integers."))
        .stdout(predicate::str::contains("Computation result: 49995000"))
        .stdout(predicate::str::contains("Workload finished."));

    // Stage timings go to the log file, not stdout
    let log = std::fs::read_to_string(ctx.log_path()).unwrap();
    assert!(log.contains(" - DEBUG - "));
    assert!(log.contains("built 1000 squares"));
}

#[test]
fn test_run_rejects_an_oversized_list_size() {
    let ctx = TestContext::new().unwrap();
    let mut cmd = Command::cargo_bin("wastrel").unwrap();
    cmd.arg("run")
        .arg("--log-file")
        .arg(ctx.log_path())
        .arg("--list-size")
        .arg("100000001")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("exceeds the maximum"));
}

#[test]
fn test_profile_emits_a_stage_table() {
    let ctx = TestContext::new().unwrap();
    let mut cmd = Command::cargo_bin("wastrel").unwrap();
    cmd.arg("profile")
        .arg("--log-file")
        .arg(ctx.log_path())
        .arg("--list-size")
        .arg("1000")
        .arg("--string-count")
        .arg("50")
        .arg("--burn")
        .arg("10000")
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting profiled workload..."))
        .stdout(predicate::str::contains("rss before"))
        .stdout(predicate::str::contains("build_squares"))
        .stdout(predicate::str::contains("concatenate_range"));
}

#[test]
fn test_profile_json_report_parses() {
    let ctx = TestContext::new().unwrap();
    let mut cmd = Command::cargo_bin("wastrel").unwrap();
    let output = cmd
        .arg("profile")
        .arg("--log-file")
        .arg(ctx.log_path())
        .arg("--list-size")
        .arg("1000")
        .arg("--string-count")
        .arg("50")
        .arg("--burn")
        .arg("10000")
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    // Progress lines come first; the report starts at the opening brace
    let stdout = String::from_utf8(output.stdout).unwrap();
    let json_start = stdout.find('{').expect("no JSON object in output");
    let report: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();

    let stages = report["stages"].as_array().unwrap();
    assert_eq!(stages.len(), 2);
    assert_eq!(stages[0]["name"], "build_squares");
    assert_eq!(stages[1]["name"], "concatenate_range");
}

#[test]
fn test_missing_log_directory_is_fatal() {
    let ctx = TestContext::new().unwrap();
    let missing = ctx.path().join("nope").join("app.log");
    let mut cmd = Command::cargo_bin("wastrel").unwrap();
    cmd.arg("log-check")
        .arg("--log-file")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open log file"));
}

#[test]
fn test_verbose_flag_surfaces_the_error_chain() {
    let ctx = TestContext::new().unwrap();
    let missing = ctx.path().join("nope").join("app.log");
    let mut cmd = Command::cargo_bin("wastrel").unwrap();
    cmd.arg("log-check")
        .arg("-v")
        .arg("--log-file")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error chain:"));
}
