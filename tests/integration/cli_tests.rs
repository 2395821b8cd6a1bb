//! End-to-end tests for the `javachecks` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn javachecks() -> Command {
    Command::cargo_bin("javachecks").unwrap()
}

fn json_issues(output: &[u8]) -> Vec<serde_json::Value> {
    serde_json::from_slice::<serde_json::Value>(output)
        .expect("stdout is not JSON")
        .as_array()
        .expect("stdout is not a JSON array")
        .clone()
}

// ============================================================================
// Output Formats
// ============================================================================

#[test]
fn test_json_output() {
    let output = javachecks()
        .arg(fixtures_path().join("null_checks"))
        .arg(fixtures_path().join("hostname"))
        .args(["--format", "json", "--quiet"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let issues = json_issues(&output.stdout);
    assert_eq!(issues.len(), 9);
    assert!(issues.iter().any(|i| i["rule"] == "S4201" && i["severity"] == "info"));
    assert!(issues.iter().any(|i| i["rule"] == "S3510" && i["severity"] == "error"));
}

#[test]
fn test_terminal_output() {
    javachecks()
        .arg(fixtures_path().join("hostname"))
        .assert()
        .success()
        .stdout(predicate::str::contains("S3510"))
        .stdout(predicate::str::contains("Verifiers.java"));
}

#[test]
fn test_compact_output() {
    javachecks()
        .arg(fixtures_path().join("null_checks"))
        .args(["--format", "compact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("S4201"))
        .stdout(predicate::str::contains("issues"));
}

#[test]
fn test_json_output_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("report.json");

    javachecks()
        .arg(fixtures_path().join("hostname"))
        .args(["--format", "json", "--quiet", "--output"])
        .arg(&out)
        .assert()
        .success();

    let issues = json_issues(&fs::read(&out).unwrap());
    assert_eq!(issues.len(), 5);
    assert_eq!(issues[0]["line"], 8);
    assert_eq!(issues[0]["column"], 13);
}

#[test]
fn test_output_file_requires_json() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("report.txt");

    for format in ["terminal", "compact"] {
        javachecks()
            .arg(fixtures_path().join("hostname"))
            .args(["--format", format, "--output"])
            .arg(&out)
            .assert()
            .failure()
            .stderr(predicate::str::contains("--output"));
    }
    assert!(!out.exists());
}

// ============================================================================
// Options
// ============================================================================

#[test]
fn test_rule_restriction() {
    let output = javachecks()
        .arg(fixtures_path().join("null_checks"))
        .arg(fixtures_path().join("hostname"))
        .args(["--format", "json", "--quiet", "--rule", "S3510"])
        .output()
        .unwrap();

    let issues = json_issues(&output.stdout);
    assert_eq!(issues.len(), 5);
    assert!(issues.iter().all(|i| i["rule"] == "S3510"));
}

#[test]
fn test_unknown_rule_fails() {
    javachecks()
        .arg(fixtures_path().join("null_checks"))
        .args(["--rule", "S0000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("S0000"));
}

#[test]
fn test_no_semantic_flag() {
    let output = javachecks()
        .arg(fixtures_path().join("null_checks"))
        .args(["--format", "json", "--quiet", "--no-semantic"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(json_issues(&output.stdout).is_empty());
}

#[test]
fn test_exclude_pattern() {
    let output = javachecks()
        .arg(fixtures_path())
        .args(["--format", "json", "--quiet", "--exclude", "hostname|broken"])
        .output()
        .unwrap();

    let issues = json_issues(&output.stdout);
    assert_eq!(issues.len(), 8);
    assert!(issues.iter().all(|i| i["file"] != "src/main/java/com/example/Verifiers.java"));
}

#[test]
fn test_malformed_unit_is_skipped() {
    let output = javachecks()
        .arg(fixtures_path())
        .args(["--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(json_issues(&output.stdout).len(), 16);
    assert!(String::from_utf8_lossy(&output.stderr).contains("Broken.tree.json"));
}

// ============================================================================
// Configuration Files
// ============================================================================

#[test]
fn test_config_file_disables_rule() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("javachecks.toml");
    fs::write(&config, "disabled_rules = [\"S4201\"]\nexclude = [\"broken\"]\n").unwrap();

    let output = javachecks()
        .arg(fixtures_path())
        .args(["--format", "json", "--quiet", "--config"])
        .arg(&config)
        .output()
        .unwrap();

    let issues = json_issues(&output.stdout);
    assert_eq!(issues.len(), 8);
    assert!(issues.iter().all(|i| i["rule"] == "S3510"));
}

#[test]
fn test_default_config_location() {
    let dir = TempDir::new().unwrap();
    fs::copy(
        fixtures_path().join("no_semantic/Unresolved.tree.json"),
        dir.path().join("Unresolved.tree.json"),
    )
    .unwrap();
    fs::write(dir.path().join("javachecks.yml"), "assume_semantic: true\n").unwrap();

    let output = javachecks()
        .arg(dir.path())
        .args(["--format", "json", "--quiet"])
        .output()
        .unwrap();

    let issues = json_issues(&output.stdout);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0]["rule"], "S4201");
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("javachecks.toml");
    fs::write(&config, "exclude = [\"(unclosed\"]\n").unwrap();

    javachecks()
        .arg(fixtures_path().join("null_checks"))
        .arg("--config")
        .arg(&config)
        .assert()
        .failure();
}
