//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with an isolated config directory.

use std::io::Write;
use std::process::{Command, Stdio};

/// Run a CLI command and return (code, stdout, stderr).
fn run_cli(home: &std::path::Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_betterrest"))
        .env("BETTERREST_HOME", home)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn stub_model(dir: &std::path::Path, hours: f64) -> String {
    let path = dir.join("stub_model.toml");
    std::fs::write(
        &path,
        format!("intercept = {hours:?}\n[weights]\nwake = 0.0\nestimated_sleep = 0.0\ncoffee = 0.0\n"),
    )
    .unwrap();
    path.to_string_lossy().to_string()
}

#[test]
fn test_estimate_with_stub_model() {
    let home = tempfile::tempdir().unwrap();
    let model = stub_model(home.path(), 7.0);
    let (code, stdout, _) = run_cli(
        home.path(),
        &["estimate", "--wake", "07:00", "--model", &model, "--clock", "24h"],
    );
    assert_eq!(code, 0, "estimate failed");
    assert!(stdout.contains("Bedtime"));
    assert!(stdout.contains("Your ideal bedtime is 00:00"));
}

#[test]
fn test_estimate_json_rolls_over_midnight() {
    let home = tempfile::tempdir().unwrap();
    let model = stub_model(home.path(), 1.5);
    let (code, stdout, _) = run_cli(
        home.path(),
        &["estimate", "--wake", "0:00", "--model", &model, "--json"],
    );
    assert_eq!(code, 0, "estimate --json failed");
    let parsed: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(parsed["bedtimeHour"], 22);
    assert_eq!(parsed["bedtimeMinute"], 30);
}

#[test]
fn test_estimate_with_defaults() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["estimate", "--clock", "24h"]);
    assert_eq!(code, 0, "estimate with defaults failed");
    // 07:00 wake, 8 hours, 1 cup with the built-in coefficients
    assert!(stdout.contains("Your ideal bedtime is 22:39"));
}

#[test]
fn test_estimate_writes_nothing_to_config_dir() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(home.path(), &["estimate", "--wake", "6:30", "--sleep", "7.5"]);
    assert_eq!(code, 0, "estimate failed");
    let (code, _, _) = run_cli(home.path(), &["estimate", "--json"]);
    assert_eq!(code, 0, "estimate --json failed");

    let entries: Vec<_> = std::fs::read_dir(home.path()).unwrap().collect();
    assert!(entries.is_empty(), "estimate left files behind: {:?}", entries);
}

#[test]
fn test_estimate_uses_existing_display_config() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(home.path().join("config.toml"), "[display]\nclock = \"24h\"\n").unwrap();
    let model = stub_model(home.path(), 7.0);
    let (code, stdout, _) = run_cli(home.path(), &["estimate", "--model", &model]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Your ideal bedtime is 00:00"));
}

#[test]
fn test_estimate_missing_model_fails_generically() {
    let home = tempfile::tempdir().unwrap();
    let missing = home.path().join("nope.toml");
    let (code, stdout, stderr) = run_cli(
        home.path(),
        &["estimate", "--model", missing.to_str().unwrap()],
    );
    assert_ne!(code, 0);
    assert!(stdout.contains("Something went wrong"));
    assert!(stderr.contains("model_unavailable"));
}

#[test]
fn test_estimate_rejects_bad_wake_time() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(home.path(), &["estimate", "--wake", "25:00"]);
    assert_ne!(code, 0);
}

#[test]
fn test_config_set_changes_default_clock() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(home.path(), &["config", "set", "display.clock", "24h"]);
    assert_eq!(code, 0, "config set failed");

    let (_, stdout, _) = run_cli(home.path(), &["config", "get", "display.clock"]);
    assert_eq!(stdout.trim(), "24h");

    let (code, _, _) = run_cli(home.path(), &["config", "get", "display.bogus"]);
    assert_ne!(code, 0);

    let (code, _, _) = run_cli(home.path(), &["config", "reset"]);
    assert_eq!(code, 0);
    let (_, stdout, _) = run_cli(home.path(), &["config", "get", "display.clock"]);
    assert_eq!(stdout.trim(), "12h");
}

#[test]
fn test_config_list_is_json() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["config", "list"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["display"]["clock"], "12h");
    assert!(parsed.get("defaults").is_none());
}

#[test]
fn test_respond_answers_each_line() {
    let home = tempfile::tempdir().unwrap();
    let model = stub_model(home.path(), 7.0);

    let mut child = Command::new(env!("CARGO_BIN_EXE_betterrest"))
        .env("BETTERREST_HOME", home.path())
        .args(["respond", "--model", &model])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to spawn respond");

    {
        let stdin = child.stdin.as_mut().unwrap();
        writeln!(stdin, r#"{{"wakeHour": 7, "wakeMinute": 0, "sleepHours": 8, "coffeeCups": 1}}"#).unwrap();
        writeln!(stdin).unwrap();
        writeln!(stdin, r#"{{"wakeHour": 30, "wakeMinute": 0, "sleepHours": 8, "coffeeCups": 1}}"#).unwrap();
    }

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            r#"{"bedtimeHour":0,"bedtimeMinute":0}"#,
            r#"{"error":"invalid_input"}"#,
        ]
    );
}

#[test]
fn test_respond_with_missing_model_fails_every_line() {
    let home = tempfile::tempdir().unwrap();
    let missing = home.path().join("nope.toml");

    let mut child = Command::new(env!("CARGO_BIN_EXE_betterrest"))
        .env("BETTERREST_HOME", home.path())
        .args(["respond", "--model", missing.to_str().unwrap()])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("Failed to spawn respond");

    {
        let stdin = child.stdin.as_mut().unwrap();
        writeln!(stdin, r#"{{"wakeHour": 7, "wakeMinute": 0, "sleepHours": 8, "coffeeCups": 1}}"#).unwrap();
        writeln!(stdin, r#"{{"wakeHour": 0, "wakeMinute": 30, "sleepHours": 4, "coffeeCups": 20}}"#).unwrap();
    }

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![r#"{"error":"prediction_failed"}"#, r#"{"error":"prediction_failed"}"#]
    );
}
