//! End-to-end tests for `seopipe check`

use crate::common;

#[test]
fn test_check_suite_passes() {
    let output = common::run_seopipe(&["check"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("12 total"));
    assert!(stdout.contains("12 passed"));
}

#[test]
fn test_check_reports_every_check() {
    let output = common::run_seopipe(&["check"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    for name in [
        "Opportunity score calculation",
        "Keyword similarity calculation",
        "Data validation - no duplicates",
        "Score ranges validation",
        "Keyword difficulty normalization",
        "Search volume normalization",
        "SERP feature detection",
        "Click potential calculation",
        "Competitor strength penalty",
        "Commercial intent detection",
        "Gap detection logic",
        "N-gram extraction for clustering",
    ] {
        assert!(stdout.contains(name), "missing check line: {}", name);
    }
}

#[test]
fn test_version_command() {
    let output = common::run_seopipe(&["version", "--verbose"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("seopipe"));
    assert!(stdout.contains("commit:"));
    assert!(stdout.contains("built:"));
}
