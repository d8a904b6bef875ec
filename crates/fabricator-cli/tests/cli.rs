//! CLI integration tests
//!
//! These tests run the compiled `commit-fabricator` binary directly, so they
//! work even though the helper functions live in private modules of the bin crate.

use regex::Regex;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

const NOTICE: &str = "Random commits generated successfully!";

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_commit-fabricator"));
    cmd.env("NO_COLOR", "1");
    cmd
}

// ── help / version ────────────────────────────────────────────────────────────

#[test]
fn test_help_exits_zero() {
    let status = bin().arg("--help").status().expect("failed to run binary");
    assert!(status.success(), "--help should exit 0");
}

#[test]
fn test_version_flag() {
    let output = bin().arg("--version").output().expect("failed to run binary");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("commit-fabricator"),
        "version output should contain binary name, got: {}",
        stdout
    );
}

// ── plan ──────────────────────────────────────────────────────────────────────

#[test]
fn test_plan_json_is_reproducible_and_in_range() {
    let run = || {
        bin()
            .args(["plan", "--start", "2024-09-01", "--end", "2024-09-01", "--seed", "42", "--json"])
            .output()
            .expect("failed to run binary")
    };
    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let stdout = String::from_utf8_lossy(&first.stdout);
    let count = stdout.matches("\"sequence_index\"").count();
    assert!((1..=5).contains(&count), "expected 1-5 events, got {}: {}", count, stdout);
    assert!(stdout.contains("\"2024-09-01\""));
}

#[test]
fn test_plan_table_lists_files() {
    let output = bin()
        .args(["plan", "--seed", "1"])
        .output()
        .expect("failed to run binary");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2024-09-01..=2024-09-03"));
    assert!(stdout.contains("file_2024-09-01_0.txt"));
    assert!(stdout.contains("file_2024-09-03_0.txt"));
}

#[test]
fn test_plan_rejects_invalid_date() {
    let output = bin()
        .args(["plan", "--start", "not-a-date"])
        .output()
        .expect("failed to run binary");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("YYYY-MM-DD"), "got: {}", stderr);
}

// ── run ───────────────────────────────────────────────────────────────────────

#[test]
fn test_run_without_vcs_tool_still_completes() {
    let tmp = TempDir::new().unwrap();

    let output = bin()
        .arg("run")
        .arg("--repo").arg(tmp.path())
        .args(["--git", "no-such-vcs-tool-4c1f", "--seed", "3"])
        .output()
        .expect("failed to run binary");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(String::from_utf8_lossy(&output.stdout).contains(NOTICE));

    let name = Regex::new(r"^file_2024-09-0[1-3]_[0-4]\.txt$").unwrap();
    let files: Vec<String> = fs::read_dir(tmp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert!((3..=15).contains(&files.len()), "unexpected files: {:?}", files);
    assert!(files.iter().all(|f| name.is_match(f)), "unexpected files: {:?}", files);
}

#[test]
fn test_run_defaults_to_current_directory() {
    let tmp = TempDir::new().unwrap();

    let output = bin()
        .current_dir(tmp.path())
        .args(["run", "--git", "no-such-vcs-tool-4c1f", "--start", "2024-09-05", "--end", "2024-09-05"])
        .output()
        .expect("failed to run binary");

    assert!(output.status.success());
    assert!(tmp.path().join("file_2024-09-05_0.txt").exists());
}

#[test]
fn test_run_halts_without_notice_when_files_cannot_be_written() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("missing");

    let output = bin()
        .arg("run")
        .arg("--repo").arg(&missing)
        .args(["--git", "no-such-vcs-tool-4c1f"])
        .output()
        .expect("failed to run binary");

    assert!(!output.status.success(), "run should fail when files cannot be written");
    assert!(!String::from_utf8_lossy(&output.stdout).contains(NOTICE));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to write"));
}
