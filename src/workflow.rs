//! Workflow document types and loading
//!
//! A workflow definition is a JSON document with a `name`, an ordered list
//! of `nodes`, and a `connections` mapping from source node name to its
//! downstream wiring. Only the fields the validator inspects are modelled;
//! everything else rides along in the raw document.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// The parts of a workflow document the validator inspects.
#[derive(Debug, Deserialize)]
pub struct Workflow {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub connections: Map<String, Value>,
}

/// A single workflow node. Nodes without a name degrade to unmatched
/// connection warnings rather than a parse failure.
#[derive(Debug, Deserialize)]
pub struct Node {
    #[serde(default)]
    pub name: String,
    pub credentials: Option<BTreeMap<String, Credential>>,
}

/// A credential reference on a node. The `id` points at a stored credential
/// and must not be a template placeholder.
#[derive(Debug, Deserialize)]
pub struct Credential {
    pub id: Option<String>,
}

impl Workflow {
    /// Interpret a parsed JSON document as a workflow.
    pub fn from_document(doc: &Value) -> Result<Self> {
        serde_json::from_value(doc.clone()).context("Failed to interpret workflow document")
    }
}

/// Read and parse a workflow file into a raw JSON document.
pub fn load_document(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read workflow file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in {}", path.display()))
}
