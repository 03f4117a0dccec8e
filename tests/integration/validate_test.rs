//! End-to-end tests for `seopipe validate`

use crate::common;

use serde_json::json;

#[test]
fn test_validate_clean_workflow_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_workflow(dir.path(), &common::sample_workflow());

    let output = common::run_seopipe(&["validate", path.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("Valid JSON syntax"));
    assert!(stdout.contains("Required fields present"));
    assert!(stdout.contains("Found 2 node(s)"));
    assert!(stdout.contains("All node connections valid"));
    assert!(stdout.contains("Workflow validation complete"));
}

#[test]
fn test_validate_credential_placeholder_warns_but_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let mut doc = common::sample_workflow();
    doc["nodes"][1]["credentials"]["dataForSeoApi"]["id"] = json!("REPLACE_ME");
    let path = common::write_workflow(dir.path(), &doc);

    let output = common::run_seopipe(&["validate", path.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "placeholder credential must stay non-fatal");
    assert!(stdout.contains("Credential warnings:"));
    assert!(stdout.contains("Node \"Score Keywords\": dataForSeoApi needs credential"));
    assert!(stdout.contains("with 1 warning(s)"));
}

#[test]
fn test_validate_secret_pattern_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let mut doc = common::sample_workflow();
    doc["nodes"][0]["parameters"] = json!({
        "apiKey": format!("sk-{}", "a1B2".repeat(10))
    });
    let path = common::write_workflow(dir.path(), &doc);

    let output = common::run_seopipe(&["validate", path.to_str().unwrap()]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Possible hardcoded secrets detected"));
    assert!(stderr.contains("API key (sk-)"));
}

#[test]
fn test_validate_missing_required_field_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let mut doc = common::sample_workflow();
    doc.as_object_mut().unwrap().remove("connections");
    let path = common::write_workflow(dir.path(), &doc);

    let output = common::run_seopipe(&["validate", path.to_str().unwrap()]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Missing required field: connections"));
}

#[test]
fn test_validate_empty_nodes_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let mut doc = common::sample_workflow();
    doc["nodes"] = json!([]);
    let path = common::write_workflow(dir.path(), &doc);

    let output = common::run_seopipe(&["validate", path.to_str().unwrap()]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("No nodes found in workflow"));
}

#[test]
fn test_validate_dangling_connection_warns_but_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let mut doc = common::sample_workflow();
    doc["connections"]["Cluster Keywords"] = json!({ "main": [] });
    let path = common::write_workflow(dir.path(), &doc);

    let output = common::run_seopipe(&["validate", path.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Connection references non-existent node: Cluster Keywords"));
}

#[test]
fn test_validate_invalid_json_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("workflow.json");
    std::fs::write(&path, "{ this is not json").unwrap();

    let output = common::run_seopipe(&["validate", path.to_str().unwrap()]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Invalid JSON"));
}

#[test]
fn test_validate_missing_file_exits_one() {
    let output = common::run_seopipe(&["validate", "/nonexistent/workflow.json"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Failed to read workflow file"));
}

#[test]
fn test_validate_without_argument_exits_one() {
    let output = common::run_seopipe(&["validate"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Usage: seopipe validate"));
}
