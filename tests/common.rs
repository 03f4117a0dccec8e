//! Common test helpers for integration tests

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Run the seopipe binary with the given arguments.
pub fn run_seopipe(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_seopipe"))
        .args(args)
        .output()
        .expect("failed to run seopipe binary")
}

/// A minimal well-formed workflow document.
pub fn sample_workflow() -> serde_json::Value {
    serde_json::json!({
        "name": "seo-intelligence-pipeline",
        "nodes": [
            { "name": "Fetch Keywords", "type": "httpRequest" },
            {
                "name": "Score Keywords",
                "type": "function",
                "credentials": {
                    "dataForSeoApi": { "id": "42", "name": "DataForSEO" }
                }
            }
        ],
        "connections": {
            "Fetch Keywords": { "main": [[ { "node": "Score Keywords" } ]] }
        }
    })
}

/// Write a workflow document into `dir` and return its path.
pub fn write_workflow(dir: &Path, doc: &serde_json::Value) -> PathBuf {
    let path = dir.join("workflow.json");
    std::fs::write(&path, serde_json::to_string_pretty(doc).unwrap())
        .expect("failed to write workflow fixture");
    path
}
