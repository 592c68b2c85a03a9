use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;

/// Helper to get path to fixture file
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Command with a hermetic environment: no multiplexer variables, no user
/// config file, and a predictable terminal identity.
fn oscyank() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!();
    cmd.env("HOME", env!("CARGO_TARGET_TMPDIR"))
        .env("TERM", "xterm-256color")
        .env_remove("TERM_PROGRAM")
        .env_remove("TMUX")
        .env_remove("STY");
    cmd
}

#[test]
fn test_cli_help_flag() {
    oscyank()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Copy to the system clipboard from anywhere",
        ));
}

#[test]
fn test_cli_version_flag() {
    oscyank()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("oscyank"));
}

#[test]
fn test_piped_stdout_rejected_by_gate() {
    // the test harness runs with stdout redirected, so the gate declines
    oscyank()
        .write_stdin("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("clipboard unavailable"));
}

#[test]
fn test_piped_stdout_writes_no_sequence() {
    oscyank()
        .write_stdin("hello")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_force_emits_base_sequence() {
    oscyank()
        .arg("--force")
        .write_stdin("hello")
        .assert()
        .success()
        .stdout("\x1b]52;c;aGVsbG8=\x1b\\");
}

#[test]
fn test_force_clear_emits_empty_payload() {
    oscyank()
        .args(["--force", "--clear"])
        .assert()
        .success()
        .stdout("\x1b]52;c;\x1b\\");
}

#[test]
fn test_force_primary_selection() {
    oscyank()
        .args(["--force", "--selection", "primary"])
        .write_stdin("hello")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\x1b]52;p;"));
}

#[test]
fn test_query_selection_not_accepted() {
    oscyank()
        .args(["--force", "--selection", "query"])
        .write_stdin("hello")
        .assert()
        .failure();
}

#[test]
fn test_force_inside_tmux_wraps_passthrough() {
    oscyank()
        .arg("--force")
        .env("TMUX", "/tmp/tmux-1000/default")
        .write_stdin("hello")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\x1bPtmux;"));
}

#[test]
fn test_force_nested_tmux_wraps_twice() {
    // one separator in the session identifier means two layers
    let assert = oscyank()
        .arg("--force")
        .env("TMUX", "/tmp/tmux-1000/default,1234")
        .write_stdin("hello")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.matches("\x1bPtmux;").count() >= 2);
    assert!(stdout.ends_with("\x1b\\"));
}

#[test]
fn test_force_inside_screen_wraps_passthrough() {
    let assert = oscyank()
        .arg("--force")
        .env("STY", "12345.pts-0.host")
        .write_stdin("hello")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.starts_with("\x1bP"));
    assert!(!stdout.starts_with("\x1bPtmux;"));
}

#[test]
fn test_file_input() {
    oscyank()
        .arg("--force")
        .arg(fixture_path("hello.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("aGVsbG8="));
}

#[test]
fn test_nonexistent_file_fails() {
    oscyank()
        .arg("--force")
        .arg("nonexistent.txt")
        .assert()
        .failure();
}

#[test]
fn test_fixture_files_exist() {
    assert!(fixture_path("hello.txt").exists());
}
