//! Integration tests for `ievo-sdk new`.
//!
//! Every test passes `--yes` (or `--json`) so no prompt ever blocks.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ievo(config_dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ievo-sdk"));
    cmd.env("NO_COLOR", "1")
        .env("IEVO_CONFIG", config_dir.join("config.yaml"))
        .env_remove("IEVO_SCHEMA");
    cmd
}

#[test]
fn test_new_then_validate_is_clean() {
    let tmp = TempDir::new().unwrap();
    ievo(tmp.path())
        .args(["new", "code-reviewer", "--yes", "--dir"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Agent created at"))
        .stdout(predicate::str::contains("ievo-sdk validate"));

    let agent_dir = tmp.path().join("code-reviewer");
    ievo(tmp.path())
        .arg("validate")
        .arg(&agent_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid agent package"))
        .stdout(predicate::str::contains("⚠").not());
}

#[test]
fn test_new_uses_flags_and_prompt_defaults() {
    let tmp = TempDir::new().unwrap();
    ievo(tmp.path())
        .args([
            "new",
            "data-pipeline",
            "--yes",
            "--model",
            "opus",
            "--fallback",
            "haiku",
            "--category",
            "data",
            "--depends-on",
            "architect",
            "--dir",
        ])
        .arg(tmp.path())
        .assert()
        .success();

    let manifest =
        std::fs::read_to_string(tmp.path().join("data-pipeline/agent.yaml")).unwrap();
    let v: serde_yaml::Value = serde_yaml::from_str(&manifest).unwrap();
    assert_eq!(v["description"].as_str(), Some("A custom data-pipeline agent"));
    assert_eq!(v["specialty"].as_str(), Some("data pipeline"));
    assert_eq!(v["category"].as_str(), Some("data"));
    assert_eq!(v["model"]["primary"].as_str(), Some("opus"));
    assert_eq!(v["model"]["fallback"].as_str(), Some("haiku"));
    assert_eq!(v["dependencies"][0].as_str(), Some("architect"));
}

#[test]
fn test_new_takes_defaults_from_config() {
    let tmp = TempDir::new().unwrap();
    ievo(tmp.path())
        .args(["config", "set", "defaults.model", "haiku"])
        .assert()
        .success();
    ievo(tmp.path())
        .args(["config", "set", "defaults.author", "Ada"])
        .assert()
        .success();

    ievo(tmp.path())
        .args(["new", "helper", "--yes", "--dir"])
        .arg(tmp.path())
        .assert()
        .success();

    let manifest = std::fs::read_to_string(tmp.path().join("helper/agent.yaml")).unwrap();
    let v: serde_yaml::Value = serde_yaml::from_str(&manifest).unwrap();
    assert_eq!(v["model"]["primary"].as_str(), Some("haiku"));
    assert_eq!(v["author"].as_str(), Some("Ada"));
}

#[test]
fn test_new_rejects_invalid_name() {
    let tmp = TempDir::new().unwrap();
    ievo(tmp.path())
        .args(["new", "Code_Reviewer", "--yes", "--dir"])
        .arg(tmp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid agent name"));
    assert!(!tmp.path().join("Code_Reviewer").exists());
}

#[test]
fn test_new_rejects_repeated_dependency() {
    let tmp = TempDir::new().unwrap();
    ievo(tmp.path())
        .args(["new", "helper", "--yes", "--depends-on", "pm", "--depends-on", "pm", "--dir"])
        .arg(tmp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("'pm' is listed more than once"));
    assert!(!tmp.path().join("helper").exists());
}

#[test]
fn test_new_rejects_empty_description() {
    let tmp = TempDir::new().unwrap();
    ievo(tmp.path())
        .args(["new", "helper", "--yes", "--description", "", "--dir"])
        .arg(tmp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("description must not be empty"));
    assert!(!tmp.path().join("helper").exists());
}

#[test]
fn test_new_rejects_unknown_model_flag() {
    let tmp = TempDir::new().unwrap();
    ievo(tmp.path())
        .args(["new", "helper", "--yes", "--model", "gpt4"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("gpt4"));
}

#[test]
fn test_new_json_reports_path() {
    let tmp = TempDir::new().unwrap();
    let output = ievo(tmp.path())
        .args(["new", "helper", "--json", "--dir"])
        .arg(tmp.path())
        .output()
        .expect("run");
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(v["name"], "helper");
    assert!(v["path"].as_str().unwrap().ends_with("helper"));
}
