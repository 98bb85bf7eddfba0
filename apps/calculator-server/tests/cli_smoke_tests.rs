#![allow(clippy::unwrap_used, clippy::expect_used, clippy::use_debug)]

//! CLI smoke tests for the calculator-server binary.

use std::process::{Command, Stdio};
use std::time::Duration;
use tempfile::TempDir;
use tokio::time::timeout;

fn run_calculator_server(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_calculator-server"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute calculator-server")
}

async fn run_calculator_server_with_timeout(
    args: &[&str],
    timeout_duration: Duration,
) -> Result<std::process::Output, Box<dyn std::error::Error>> {
    let mut cmd = tokio::process::Command::new(env!("CARGO_BIN_EXE_calculator-server"));
    cmd.args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let child = cmd.spawn()?;

    match timeout(timeout_duration, child.wait_with_output()).await {
        Ok(result) => result.map_err(Into::into),
        Err(_elapsed) => Err("elapsed".into()),
    }
}

fn write_config(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_cli_help_command() {
    let output = run_calculator_server(&["--help"]);
    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"), "Should contain usage information");
    for expected in ["run", "check", "eval", "--config", "--port", "--print-config"] {
        assert!(stdout.contains(expected), "Help should mention '{expected}'");
    }
}

#[test]
fn test_cli_version_command() {
    let output = run_calculator_server(&["--version"]);
    assert!(output.status.success(), "Version command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("calculator-server"));
}

#[test]
fn test_cli_check_with_valid_config() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        &dir,
        "server:\n  bind_addr: 127.0.0.1:18087\nlogging:\n  level: warn\n",
    );

    let output = run_calculator_server(&["--config", &config, "check"]);
    assert!(
        output.status.success(),
        "Check should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration is valid"));
    assert!(stdout.contains("127.0.0.1:18087"));
}

#[test]
fn test_cli_check_rejects_unknown_fields() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "server:\n  bind_adress: 127.0.0.1:1\n");

    let output = run_calculator_server(&["--config", &config, "check"]);
    assert!(!output.status.success(), "Unknown fields must fail");
}

#[test]
fn test_cli_missing_config_file() {
    let output = run_calculator_server(&["--config", "/nonexistent/calculator.yaml", "check"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist"), "stderr: {stderr}");
}

#[test]
fn test_cli_print_config_applies_port_override() {
    let output = run_calculator_server(&["--print-config", "--port", "9123"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Effective configuration:"));
    assert!(stdout.contains("127.0.0.1:9123"), "stdout: {stdout}");
}

#[test]
fn test_cli_eval_prints_result() {
    let cases: [(&[&str], &str); 5] = [
        (&["eval", "add", "2", "3"], "5"),
        (&["eval", "subtract", "5", "3"], "2"),
        (&["eval", "multiply", "4", "5"], "20"),
        (&["eval", "divide", "10", "4"], "2.5"),
        (&["eval", "power", "2", "3"], "8"),
    ];
    for (args, expected) in cases {
        let output = run_calculator_server(args);
        assert!(output.status.success(), "{args:?} should succeed");
        assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), expected);
    }
}

#[test]
fn test_cli_eval_accepts_negative_operands() {
    let output = run_calculator_server(&["eval", "add", "-2", "-3"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "-5");
}

#[test]
fn test_cli_eval_division_by_zero_fails() {
    let output = run_calculator_server(&["eval", "divide", "10", "0"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Cannot divide by zero"), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_eval_unknown_operation_fails() {
    let output = run_calculator_server(&["eval", "modulo", "10", "3"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown operation 'modulo'"), "stderr: {stderr}");
}

#[tokio::test]
async fn test_cli_run_keeps_serving_until_stopped() {
    let result =
        run_calculator_server_with_timeout(&["--port", "0", "run"], Duration::from_secs(2)).await;

    match result {
        Err(e) => assert_eq!(e.to_string(), "elapsed", "Server should keep running"),
        Ok(output) => panic!(
            "Server exited early: {}",
            String::from_utf8_lossy(&output.stderr)
        ),
    }
}

#[tokio::test]
async fn test_cli_run_fails_on_invalid_bind_addr() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "server:\n  bind_addr: not-an-address\n");

    let output = run_calculator_server_with_timeout(&["--config", &config, "run"], Duration::from_secs(10))
        .await
        .expect("Server should exit promptly");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid bind address"), "stderr: {stderr}");
}
