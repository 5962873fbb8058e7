//! CLI integration tests
//!
//! These run the `bevy` binary as a child process in a scratch directory and
//! check stdout, stderr and exit status.

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_bevy(temp_dir: &TempDir, args: &[&str]) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_bevy-cli");
    Command::new(cli_bin)
        .current_dir(temp_dir.path())
        .env_remove("BEVY_LOG_PROFILE")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_version_prints_exactly_two_lines() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_bevy(&temp_dir, &["version"]);

    assert!(
        output.status.success(),
        "version should succeed. Stderr: {}",
        stderr_of(&output)
    );
    let stdout = stdout_of(&output);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines, vec!["version called", "0.0.0-not_implemented"]);
}

#[test]
fn test_init_without_flags_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_bevy(&temp_dir, &["init"]);

    assert!(output.status.success(), "Stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "Setting up Bevy management\n");
}

#[test]
fn test_init_accepts_passphrase_and_wallet_path() {
    let temp_dir = TempDir::new().unwrap();
    let wallet_dir = TempDir::new().unwrap();
    let wallet_path = wallet_dir.path().join("x");

    let output = run_bevy(
        &temp_dir,
        &[
            "init",
            "--passphrase",
            "foo",
            "--wallet-path",
            wallet_path.to_str().unwrap(),
        ],
    );

    assert!(output.status.success(), "Stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "Setting up Bevy management\n");

    // Values are accepted but unused: nothing is written anywhere.
    assert!(!wallet_path.exists());
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    assert_eq!(fs::read_dir(wallet_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_unknown_command_exits_nonzero_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_bevy(&temp_dir, &["bogus"]);

    assert!(!output.status.success());
    assert!(stdout_of(&output).is_empty());

    let stderr = stderr_of(&output);
    assert!(stderr.contains("unknown command \"bogus\" for \"bevy\""));
    assert!(stderr.contains("bevy --help"));
}

#[test]
fn test_unknown_flag_exits_nonzero_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_bevy(&temp_dir, &["version", "--passphrase", "foo"]);

    assert!(!output.status.success());
    assert!(stdout_of(&output).is_empty());
    assert!(stderr_of(&output).contains("unknown flag: --passphrase"));
}

#[test]
fn test_init_is_identical_across_processes() {
    let temp_dir = TempDir::new().unwrap();
    let first = run_bevy(&temp_dir, &["init"]);
    let second = run_bevy(&temp_dir, &["init"]);

    assert!(first.status.success() && second.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), second.status.code());
}

#[test]
fn test_no_arguments_prints_usage() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_bevy(&temp_dir, &[]);

    assert!(output.status.success(), "Stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("init"));
    assert!(stdout.contains("version"));
}

#[test]
fn test_init_help_shows_flags() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_bevy(&temp_dir, &["init", "--help"]);

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("--passphrase"));
    assert!(stdout.contains("--wallet-path"));
    assert!(!stdout.contains("Setting up Bevy management"));
}

#[test]
fn test_logging_goes_to_stderr_only() {
    let temp_dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_bevy-cli"))
        .current_dir(temp_dir.path())
        .env("BEVY_LOG_PROFILE", "production")
        .env_remove("RUST_LOG")
        .args(["init", "--passphrase", "hunter2"])
        .output()
        .expect("Failed to execute CLI");

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Setting up Bevy management\n");

    let stderr = stderr_of(&output);
    assert!(stderr.contains("shell.dispatch"));
    assert!(!stderr.contains("hunter2"));
}

#[test]
fn test_invalid_log_profile_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_bevy-cli"))
        .current_dir(temp_dir.path())
        .env("BEVY_LOG_PROFILE", "loud")
        .arg("version")
        .output()
        .expect("Failed to execute CLI");

    assert!(!output.status.success());
    assert!(stdout_of(&output).is_empty());
    assert!(stderr_of(&output).contains("BEVY_LOG_PROFILE"));
}

#[test]
fn test_help_for_unknown_topic_exits_zero() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_bevy(&temp_dir, &["help", "bogus"]);

    assert!(output.status.success(), "Stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("Unknown help topic [`bogus`]\n"));
    assert!(stdout.contains("init"));
}

#[test]
fn test_init_accepts_repeated_and_dash_prefixed_values() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_bevy(
        &temp_dir,
        &[
            "init",
            "--wallet-path=first",
            "--wallet-path",
            "second",
            "--passphrase",
            "-starts-with-dash",
        ],
    );

    assert!(output.status.success(), "Stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "Setting up Bevy management\n");
    assert!(fs::read_dir(temp_dir.path()).unwrap().next().is_none());
}
