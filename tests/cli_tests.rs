//! CLI integration tests

use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

fn halo_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_halo"))
}

/// Point the socket path at an empty directory so no daemon is found
fn without_daemon(cmd: &mut Command) -> &mut Command {
    let dir = std::env::temp_dir().join("halo-test-no-daemon");
    let _ = std::fs::create_dir_all(&dir);
    cmd.env("XDG_RUNTIME_DIR", dir)
}

#[test]
fn help_output() {
    halo_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("hide"))
        .stdout(predicate::str::contains("destroy"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("daemon"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_output() {
    halo_bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("halo"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn show_help_mentions_geometry_and_color() {
    halo_bin()
        .args(["show", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("WIDTHxHEIGHT+X+Y"))
        .stdout(predicate::str::contains("--color"));
}

#[test]
fn config_path_command() {
    halo_bin()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("halo"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_help() {
    halo_bin()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("path"));
}

#[test]
fn invalid_region_is_a_usage_error() {
    let output = halo_bin()
        .args(["show", "not-a-region"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid region format"),
        "Expected region format error, got: {}",
        stderr
    );
}

#[test]
fn invalid_color_is_rejected_by_clap() {
    halo_bin()
        .args(["show", "120x40+640+380", "--color", "chartreuse"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn show_without_daemon_fails() {
    without_daemon(&mut halo_bin())
        .args(["show", "120x40+640+380"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No daemon running"));
}

#[test]
fn hide_without_daemon_fails() {
    without_daemon(&mut halo_bin())
        .arg("hide")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No daemon running"));
}

#[test]
fn destroy_without_daemon_fails() {
    without_daemon(&mut halo_bin())
        .arg("destroy")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No daemon running"));
}

#[test]
fn status_without_daemon_fails() {
    without_daemon(&mut halo_bin())
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("halo daemon"));
}

// Note: End-to-end daemon tests need a live Wayland compositor, so the
// daemon path is covered by the application-layer tests instead.
