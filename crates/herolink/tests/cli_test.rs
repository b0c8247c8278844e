//! Integration tests for the `herolink` CLI binary.
//!
//! These validate argument parsing, help output, shell completions, and the
//! offline error paths — all without a camera on the network.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `herolink` binary with env isolation.
///
/// Clears all `HEROLINK_*` env vars and points config directories at a
/// nonexistent path so tests never read the user's real configuration.
fn herolink_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("herolink");
    cmd.env("HOME", "/tmp/herolink-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/herolink-cli-test-nonexistent")
        .env_remove("HEROLINK_PROFILE")
        .env_remove("HEROLINK_MODEL")
        .env_remove("HEROLINK_SSID")
        .env_remove("HEROLINK_PASSWORD")
        .env_remove("HEROLINK_HOST")
        .env_remove("HEROLINK_MAC")
        .env_remove("HEROLINK_TIMEOUT");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = herolink_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    herolink_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("GoPro")
            .and(predicate::str::contains("shoot"))
            .and(predicate::str::contains("video"))
            .and(predicate::str::contains("photo")),
    );
}

#[test]
fn test_version_flag() {
    herolink_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("herolink"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    herolink_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    herolink_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Config commands ─────────────────────────────────────────────────

#[test]
fn test_config_path_prints_a_path() {
    herolink_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_show_redacts_password() {
    herolink_cmd()
        .args(["--model", "hero5", "--password", "hunter2", "config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("<redacted>")
                .and(predicate::str::contains("hunter2").not())
                .and(predicate::str::contains("hero5"))
                .and(predicate::str::contains("10.5.5.9")),
        );
}

#[test]
fn test_profile_from_config_file() {
    let home = tempfile::tempdir().unwrap();

    /// Like [`herolink_cmd`], but with config directories rooted in `home`.
    fn isolated_cmd(home: &std::path::Path) -> assert_cmd::Command {
        let mut cmd = herolink_cmd();
        cmd.env("HOME", home).env("XDG_CONFIG_HOME", home);
        cmd
    }

    // Ask the binary where it looks for config, then put a profile there.
    let output = isolated_cmd(home.path())
        .args(["config", "path"])
        .output()
        .unwrap();
    let config_path = String::from_utf8(output.stdout).unwrap();
    let config_path = std::path::Path::new(config_path.trim());
    std::fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    std::fs::write(
        config_path,
        r#"
default_profile = "garage"

[profiles.garage]
model = "hero3"
host = "10.5.5.9:8080"
password = "hunter2"
"#,
    )
    .unwrap();

    isolated_cmd(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("hero3")
                .and(predicate::str::contains("10.5.5.9:8080"))
                .and(predicate::str::contains("hunter2").not()),
        );
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = herolink_cmd().arg("foobar").output().unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid subcommand"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_missing_model_is_a_usage_error() {
    let output = herolink_cmd().arg("shoot").output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(
        text.contains("model"),
        "Expected error mentioning the model:\n{text}"
    );
}

#[test]
fn test_unknown_mode_value_is_rejected() {
    let output = herolink_cmd()
        .args(["--model", "hero5", "mode", "sideways"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
}

#[test]
fn test_unknown_model_value_is_rejected() {
    let output = herolink_cmd()
        .args(["--model", "hero99", "shoot"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
}

#[test]
fn test_delete_all_requires_confirmation() {
    let output = herolink_cmd()
        .args(["--model", "hero5", "delete", "all"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(
        text.contains("--yes") || text.contains("refusing"),
        "Expected confirmation hint:\n{text}"
    );
}

#[test]
fn test_bad_mac_is_a_usage_error() {
    let output = herolink_cmd()
        .args(["--model", "hero5", "--mac", "not-a-mac", "status"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(
        text.contains("mac") || text.contains("MAC"),
        "Expected error mentioning the MAC:\n{text}"
    );
}

// ── Offline status ──────────────────────────────────────────────────

#[test]
fn test_status_without_network() {
    // Status reads only local state; it must work with no camera around.
    herolink_cmd()
        .args(["--model", "hero3", "status"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("hero3")
                .and(predicate::str::contains("legacy"))
                .and(predicate::str::contains("unknown")),
        );
}
