//! Structural and content checks for workflow documents
//!
//! Each helper is a pure pass over the document: structural checks report
//! which required fields are absent, content checks return warning messages
//! or matched pattern names. How findings map to exit codes is the
//! `validate` command's concern.

use anyhow::Result;
use regex::Regex;
use serde_json::Value;

use crate::workflow::Workflow;

/// Top-level fields every workflow document must carry.
pub const REQUIRED_FIELDS: [&str; 3] = ["name", "nodes", "connections"];

/// Sentinel credential id left behind by workflow templates.
pub const CREDENTIAL_PLACEHOLDER: &str = "REPLACE_ME";

/// Secret-like patterns scanned over the serialized document. The prefix,
/// length, and structure of each pattern are deliberate; keep them literal.
pub const SECRET_PATTERNS: [(&str, &str); 3] = [
    ("API key (sk-)", r"sk-[a-zA-Z0-9]{32,}"),
    ("Hardcoded password", r#"password.*[:=]\s*["'][^"']+["']"#),
    ("JWT token", r"eyJhbGc[a-zA-Z0-9_-]+\.[a-zA-Z0-9_-]+"),
];

/// Leftover work markers counted case-insensitively.
const MARKER_PATTERN: &str = r"(?i)TODO|FIXME|XXX";

/// Required fields that are absent (or null) in the document, in check
/// order.
pub fn missing_required_fields(doc: &Value) -> Vec<&'static str> {
    REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|&field| doc.get(field).map_or(true, Value::is_null))
        .collect()
}

/// Warnings for credential entries whose id is missing or still the
/// template placeholder.
pub fn credential_issues(workflow: &Workflow) -> Vec<String> {
    let mut issues = Vec::new();

    for node in &workflow.nodes {
        let Some(credentials) = &node.credentials else {
            continue;
        };
        for (kind, credential) in credentials {
            let unresolved = match &credential.id {
                None => true,
                Some(id) => id == CREDENTIAL_PLACEHOLDER,
            };
            if unresolved {
                issues.push(format!("Node \"{}\": {} needs credential", node.name, kind));
            }
        }
    }

    issues
}

/// Names of secret patterns matching anywhere in the serialized document.
pub fn scan_secrets(serialized: &str) -> Result<Vec<&'static str>> {
    let mut found = Vec::new();

    for (name, pattern) in SECRET_PATTERNS {
        if Regex::new(pattern)?.is_match(serialized) {
            found.push(name);
        }
    }

    Ok(found)
}

/// Count of TODO/FIXME/XXX markers anywhere in the serialized document.
pub fn count_todo_markers(serialized: &str) -> Result<usize> {
    Ok(Regex::new(MARKER_PATTERN)?.find_iter(serialized).count())
}

/// Connection source names that reference no existing node.
pub fn dangling_connections(workflow: &Workflow) -> Vec<String> {
    workflow
        .connections
        .keys()
        .filter(|source| !workflow.nodes.iter().any(|node| &node.name == *source))
        .cloned()
        .collect()
}
