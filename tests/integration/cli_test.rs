//! CLI tests for the scrubber binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn scrubber(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("scrubber").unwrap();
    cmd.env("SCRUBBER_CONFIG", config_dir.path().join("config.toml"));
    cmd
}

#[test]
fn version_includes_package_version() {
    let dir = TempDir::new().unwrap();
    scrubber(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_path_honors_env_override() {
    let dir = TempDir::new().unwrap();
    scrubber(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"))
        .stdout(predicate::str::contains(dir.path().to_string_lossy().as_ref()));
}

#[test]
fn config_default_prints_all_sections() {
    let dir = TempDir::new().unwrap();
    scrubber(&dir)
        .args(["config", "default"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[playback]"))
        .stdout(predicate::str::contains("[tracker]"))
        .stdout(predicate::str::contains("base_interval_ms = 33"));
}

#[test]
fn config_show_merges_file_over_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[playback]\nseek_step_secs = 12.5\n").unwrap();

    scrubber(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("seek_step_secs = 12.5"))
        .stdout(predicate::str::contains("max_interval_ms = 250"));
}

#[test]
fn config_show_rejects_invalid_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[playback\n").unwrap();

    scrubber(&dir)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn play_rejects_non_positive_duration() {
    let dir = TempDir::new().unwrap();
    scrubber(&dir)
        .args(["play", "--duration", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duration must be positive"));
}

#[test]
fn completions_generate_for_bash() {
    let dir = TempDir::new().unwrap();
    scrubber(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("scrubber"));
}

#[test]
fn snapshot_cli_help_play() {
    let dir = TempDir::new().unwrap();
    let result = scrubber(&dir)
        .args(["play", "--help"])
        .env("NO_COLOR", "1")
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&result.stdout);
    let stderr = String::from_utf8_lossy(&result.stderr);
    let exit_code = result.status.code().unwrap_or(-1);
    let output = format!(
        "=== scrubber play --help ===\nExit code: {}\n\n--- stdout ---\n{}\n--- stderr ---\n{}",
        exit_code, stdout, stderr
    );
    insta::assert_snapshot!("cli_help_play", output);
}
