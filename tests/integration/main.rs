//! Integration tests for the passcheck CLI
//!
//! Runs the built binary end to end; `http_test` covers the server over a
//! real socket.


use std::io::{BufRead, BufReader};
use std::net::SocketAddr;
use std::process::{Command, Stdio};

use assert_cmd::cargo;
use passcheck::server::VALIDATE_PATH;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a passcheck command
fn passcheck() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("passcheck"))
}

// =============================================================================
// META
// =============================================================================

#[test]
fn test_version() {
    passcheck()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help() {
    passcheck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Check passwords against fixed composition rules"));
}

#[test]
fn test_no_args_shows_info() {
    passcheck()
        .assert()
        .success()
        .stdout(predicate::str::contains("passcheck"));
}

// =============================================================================
// CHECK COMMAND
// =============================================================================

#[test]
fn test_check_valid_password() {
    passcheck()
        .args(["check", "Password1!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Password is valid"));
}

#[test]
fn test_check_invalid_password_lists_violations() {
    passcheck()
        .args(["check", "abc"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("password must be at least 8 characters"))
        .stdout(predicate::str::contains("password must contain at least one digit"));
}

#[test]
fn test_check_json_output_matches_endpoint_body() {
    let output = passcheck()
        .args(["--json", "check", "password1!"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "valid": false,
            "errors": ["password must contain at least one uppercase letter"]
        })
    );
}

#[test]
fn test_check_reads_stdin() {
    passcheck()
        .arg("check")
        .write_stdin("Password1!\n")
        .assert()
        .success();
}

#[test]
fn test_check_stdin_keeps_inner_whitespace() {
    // Only the line terminator is dropped, so the spaces still count
    passcheck()
        .arg("check")
        .write_stdin("  Ab1!  \r\n")
        .assert()
        .success();
}

#[test]
fn test_check_empty_password_is_required_error() {
    passcheck()
        .arg("check")
        .write_stdin("\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("the password field is required"));
}

// =============================================================================
// SERVE COMMAND (startup failures only)
// =============================================================================

#[test]
fn test_serve_rejects_zero_workers() {
    let temp = TempDir::new().unwrap();
    passcheck()
        .args(["serve", "--workers", "0"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("workers must be at least 1"));
}

#[test]
fn test_serve_missing_config_file() {
    let temp = TempDir::new().unwrap();
    passcheck()
        .args(["serve", "--config", "absent.toml"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn test_serve_rejects_unknown_config_key() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("passcheck.toml"), "min_length = 12\n").unwrap();
    passcheck()
        .arg("serve")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config file"));
}

#[test]
fn test_serve_banner_shows_bound_port() {
    let temp = TempDir::new().unwrap();
    let mut child = Command::new(cargo::cargo_bin!("passcheck"))
        .args(["--json", "serve", "--host", "127.0.0.1", "--port", "0", "--workers", "1"])
        .current_dir(temp.path())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    let mut line = String::new();
    BufReader::new(child.stdout.take().unwrap())
        .read_line(&mut line)
        .unwrap();
    let banner: serde_json::Value = serde_json::from_str(&line).unwrap();
    let addr: SocketAddr = banner["listening"].as_str().unwrap().parse().unwrap();
    let (status, _, body) =
        http_test::send(addr, "POST", VALIDATE_PATH, r#"{"password":"Password1!"}"#);

    child.kill().unwrap();
    child.wait().unwrap();

    assert_ne!(addr.port(), 0);
    assert_eq!(status, 200);
    assert_eq!(body, r#"{"valid":true}"#);
}
