//! Validate command for workflow definition files
//!
//! Structural problems and secret findings are fatal; credential
//! placeholders, leftover markers, and dangling connections are reported
//! as warnings and leave the exit code at 0.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use seopipe::validation;
use seopipe::workflow::{self, Workflow};

/// Validate a workflow file and report pass/warn/fail diagnostics.
pub fn cmd_validate(path: &Path) -> Result<()> {
    println!("{} {}", "Validating".bold(), path.display());
    println!();

    // Structural checks run first; content scans only see a well-formed
    // document.
    let doc = match workflow::load_document(path) {
        Ok(doc) => doc,
        Err(e) => fatal(&format!("{:#}", e)),
    };
    println!("{} Valid JSON syntax", "✓".green());

    if !doc.is_object() {
        fatal("Workflow document must be a JSON object");
    }

    if let Some(field) = validation::missing_required_fields(&doc).first() {
        fatal(&format!("Missing required field: {}", field));
    }
    println!("{} Required fields present", "✓".green());

    let workflow = match Workflow::from_document(&doc) {
        Ok(workflow) => workflow,
        Err(e) => fatal(&format!("{:#}", e)),
    };
    if workflow.nodes.is_empty() {
        fatal("No nodes found in workflow");
    }
    println!("{} Found {} node(s)", "✓".green(), workflow.nodes.len());

    let mut warnings = 0;

    let credential_issues = validation::credential_issues(&workflow);
    if credential_issues.is_empty() {
        println!("{} No obvious credential issues", "✓".green());
    } else {
        println!("{} Credential warnings:", "⚠".yellow());
        for issue in &credential_issues {
            println!("   - {}", issue);
        }
        warnings += credential_issues.len();
    }

    let serialized = serde_json::to_string(&doc)?;

    let secrets = validation::scan_secrets(&serialized)?;
    if secrets.is_empty() {
        println!("{} No hardcoded secrets detected", "✓".green());
    } else {
        eprintln!("{} Possible hardcoded secrets detected:", "✗".red());
        for name in &secrets {
            eprintln!("   - {}", name);
        }
        eprintln!("   Use environment variables or managed credentials instead.");
        std::process::exit(1);
    }

    let markers = validation::count_todo_markers(&serialized)?;
    if markers > 0 {
        println!("{} Found {} TODO/FIXME marker(s)", "⚠".yellow(), markers);
        warnings += markers;
    }

    let dangling = validation::dangling_connections(&workflow);
    if dangling.is_empty() {
        println!("{} All node connections valid", "✓".green());
    } else {
        for source in &dangling {
            println!(
                "{} Connection references non-existent node: {}",
                "⚠".yellow(),
                source
            );
        }
        warnings += dangling.len();
    }

    println!();
    if warnings == 0 {
        println!("{} Workflow validation complete", "✓".green());
    } else {
        println!(
            "{} Workflow validation complete with {} warning(s)",
            "✓".green(),
            warnings
        );
    }

    Ok(())
}

/// Report a fatal finding and terminate.
fn fatal(message: &str) -> ! {
    eprintln!("{} {}", "✗".red(), message);
    std::process::exit(1);
}
