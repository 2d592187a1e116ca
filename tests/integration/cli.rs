//! Integration tests for the `djust-debug-state` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("djust-debug-state").expect("binary should build");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

#[test]
fn test_key_command() {
    let dir = TempDir::new().unwrap();

    cmd(&dir)
        .args(["key", "--view", "CounterView"])
        .assert()
        .success()
        .stdout("djust-debug-state:CounterView\n");

    cmd(&dir)
        .arg("key")
        .assert()
        .success()
        .stdout("djust-debug-state:global\n");
}

#[test]
fn test_show_without_saved_state_prints_defaults() {
    let dir = TempDir::new().unwrap();

    let output = cmd(&dir).args(["show", "-v", "Fresh"]).output().unwrap();
    assert!(output.status.success());

    let state: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        state,
        serde_json::json!({"isOpen": false, "activeTab": "events"})
    );
}

#[test]
fn test_save_then_show() {
    let dir = TempDir::new().unwrap();

    cmd(&dir)
        .args(["save", "-v", "CounterView", "--open", "--tab", "patches"])
        .assert()
        .success();

    let output = cmd(&dir)
        .args(["show", "-v", "CounterView"])
        .output()
        .unwrap();
    let state: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        state,
        serde_json::json!({"isOpen": true, "activeTab": "patches"})
    );

    cmd(&dir)
        .arg("views")
        .assert()
        .success()
        .stdout(predicate::str::contains("CounterView"));

    cmd(&dir)
        .args(["clear", "-v", "CounterView"])
        .assert()
        .success();

    cmd(&dir)
        .arg("views")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_config_default_tab_applies_to_show() {
    let dir = TempDir::new().unwrap();

    cmd(&dir)
        .args(["config", "set-default-tab", "handlers"])
        .assert()
        .success();

    cmd(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"activeTab\": \"handlers\""));
}

#[test]
fn test_database_flag_overrides_location() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("custom").join("panel.db");

    cmd(&dir)
        .arg("--database")
        .arg(&db_path)
        .args(["save", "--closed"])
        .assert()
        .success();

    assert!(db_path.exists());
    assert!(!dir.path().join("state.db").exists());
}

#[test]
fn test_key_command_writes_no_config() {
    let dir = TempDir::new().unwrap();

    cmd(&dir).args(["key", "-v", "CounterView"]).assert().success();

    assert!(!dir.path().join("config.toml").exists());
    assert!(!dir.path().join("state.db").exists());
}

#[test]
fn test_set_default_tab_reports_non_table_panel() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "panel = \"oops\"\n").unwrap();

    cmd(&dir)
        .args(["config", "set-default-tab", "patches"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a table"));
}
