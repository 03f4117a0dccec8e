//! CLI entry point and command dispatch for seopipe.

mod cmd;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "seopipe")]
#[command(version)]
#[command(
    about = "Workflow validation and scoring checks for SEO automation pipelines",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a workflow definition file
    Validate {
        /// Path to the workflow JSON file
        file: Option<PathBuf>,
    },
    /// Run the scoring heuristic check suite
    Check,
    /// Show version information
    Version {
        /// Show additional build information
        #[arg(long, short)]
        verbose: bool,
    },
    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { file } => match file {
            Some(file) => cmd::validate::cmd_validate(&file),
            None => {
                eprintln!("Usage: seopipe validate <workflow-file.json>");
                eprintln!("Example: seopipe validate workflows/seo-intelligence-pipeline.json");
                std::process::exit(1);
            }
        },
        Commands::Check => cmd::check::cmd_check(),
        Commands::Version { verbose } => cmd_version(verbose),
        Commands::Completion { shell } => cmd_completion(shell),
    }
}

fn cmd_version(verbose: bool) -> Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    println!("seopipe {}", VERSION);

    if verbose {
        const GIT_SHA: &str = env!("GIT_SHA");
        const BUILD_DATE: &str = env!("BUILD_DATE");
        println!("commit: {}", GIT_SHA);
        println!("built: {}", BUILD_DATE);
    }

    Ok(())
}

/// Generate shell completion script
fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "seopipe", &mut io::stdout());
    Ok(())
}
