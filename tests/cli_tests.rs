// Tests that run the compiled binaries and check output and exit codes.
// None of these touch the network.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const VALID_TREE: &str = r#"{
    "type": "folder",
    "children": [
        { "name": "Tools", "type": "folder", "children": [
            { "name": "Docs", "type": "url", "url": "https://a.example" },
            { "name": "Docs", "type": "url", "url": "https://b.example" }
        ]},
        { "name": "Crates", "type": "url", "url": "https://crates.example" }
    ]
}"#;

const BROKEN_TREE: &str = r#"{
    "type": "folder",
    "children": [
        { "name": "Tools", "type": "folder", "children": [
            { "name": "NoLink", "type": "url" }
        ]},
        { "name": "A", "type": "url", "url": "https://same.example" },
        { "name": "B", "type": "url", "url": "https://same.example" }
    ]
}"#;

// Writes `content` to <tmp>/public/arf.json, the default location
fn catalog(content: &str) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::create_dir_all(dir.path().join("public")).unwrap();
    fs::write(dir.path().join("public/arf.json"), content).unwrap();
    dir
}

fn validate(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("arf-validate").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

fn check_links(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("arf-check-links").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

// ============================================================================
// arf-validate
// ============================================================================

#[test]
fn test_validate_passes_with_no_arguments() {
    let dir = catalog(VALID_TREE);
    validate(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Structure Validation: PASSED"))
        .stdout(predicate::str::contains("Duplicate URLs: NONE"))
        .stderr(predicate::str::contains("Found 1 Duplicate Names"));
}

#[test]
fn test_validate_structural_errors_still_exit_zero() {
    let dir = catalog(BROKEN_TREE);
    validate(&dir)
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "ERROR: Node 'NoLink' is type 'url' but missing url field at Root > Tools",
        ))
        .stderr(predicate::str::contains("Structure Validation: FAILED"))
        .stderr(predicate::str::contains("Found 1 Duplicate URLs"))
        .stderr(predicate::str::contains("\"B\": https://same.example"));
}

#[test]
fn test_validate_invalid_json_exits_one() {
    let dir = catalog("{ \"type\": \"folder\", ");
    validate(&dir)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("CRITICAL: Invalid JSON syntax"));
}

#[test]
fn test_validate_missing_file_exits_one() {
    let dir = TempDir::new().unwrap();
    validate(&dir)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("CRITICAL"));
}

#[test]
fn test_validate_root_without_type_warns() {
    let dir = catalog(r#"{ "children": [] }"#);
    validate(&dir)
        .assert()
        .success()
        .stderr(predicate::str::contains("WARNING: Root missing type."))
        .stdout(predicate::str::contains("PASSED"));
}

#[test]
fn test_validate_verbose_lists_duplicate_names() {
    let dir = catalog(VALID_TREE);
    validate(&dir)
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("  - \"Docs\""));
}

#[test]
fn test_validate_json_report() {
    let dir = catalog(BROKEN_TREE);
    let output = validate(&dir).arg("--json").output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["valid"], false);
    assert_eq!(value["errors"][0]["kind"], "missing_url");
    assert_eq!(value["duplicate_urls"].as_array().unwrap().len(), 1);
}

#[test]
fn test_validate_explicit_file_flag() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("custom.json");
    fs::write(&file, VALID_TREE).unwrap();

    Command::cargo_bin("arf-validate")
        .unwrap()
        .arg("--file")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("PASSED"));
}

// ============================================================================
// arf-check-links
// ============================================================================

#[test]
fn test_check_links_empty_catalog() {
    let dir = catalog(r#"{ "type": "folder", "children": [] }"#);
    check_links(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 0 URLs to check."))
        .stdout(predicate::str::contains("No broken links found!"));
}

#[test]
fn test_check_links_reports_invalid_urls_and_exits_zero() {
    let dir = catalog(
        r#"{ "type": "folder", "children": [
            { "name": "Typo", "type": "url", "url": "not a url" }
        ]}"#,
    );
    check_links(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total URLs: 1"))
        .stdout(predicate::str::contains("Dead/Refused: 1"))
        .stdout(predicate::str::contains("[INVALID_URL]"))
        .stdout(predicate::str::contains("Path: Root"));
}

#[test]
fn test_check_links_bad_json_still_exits_zero() {
    let dir = catalog("[[[");
    check_links(&dir)
        .assert()
        .success()
        .stderr(predicate::str::contains("invalid JSON syntax"));
}

#[test]
fn test_check_links_json_report() {
    let dir = catalog(
        r#"{ "type": "folder", "children": [
            { "name": "Typo", "type": "url", "url": "nope" }
        ]}"#,
    );
    let output = check_links(&dir).arg("--json").output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total"], 1);
    assert_eq!(value["dead_links"][0]["status"], "invalid_url");
    assert_eq!(value["dead_links"][0]["name"], "Typo");
}

#[test]
fn test_check_links_progress_markers() {
    // 55 unparseable URLs: every completion is a dead link and nothing
    // touches the network.
    let children: Vec<String> = (0..55)
        .map(|i| format!(r#"{{ "name": "n{i}", "type": "url", "url": "bad {i}" }}"#))
        .collect();
    let dir = catalog(&format!(
        r#"{{ "type": "folder", "children": [{}] }}"#,
        children.join(",")
    ));

    let output = check_links(&dir).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches(" 50/55\r").count(), 1);
    assert!(stdout.contains(&"x".repeat(50)));
    assert!(stdout.contains("Dead/Refused: 55"));
}
