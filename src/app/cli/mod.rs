//! CLI Adapter.

mod fetch;
mod stage;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::app::observability;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "envstage")]
#[command(version)]
#[command(
    about = "Fetch, stage, and package an embeddable Python runtime for distribution",
    long_about = None
)]
struct Cli {
    /// Repository root that all build paths derive from (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    root: Option<PathBuf>,
    /// Configuration file (defaults to <root>/envstage.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Emit debug diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download missing artifacts into the resources cache
    #[clap(visible_alias = "f")]
    Fetch,
    /// Rebuild the staging directory from the embed archive and package it
    #[clap(visible_alias = "s")]
    Stage,
    /// Print the resolved directory layout as JSON
    Layout,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    observability::init_tracing(cli.verbose);

    let result = dispatch(cli);

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn dispatch(cli: Cli) -> Result<i32, AppError> {
    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Fetch => fetch::run_fetch(&root, config),
        Commands::Stage => stage::run_stage(&root, config).map(|_| 0),
        Commands::Layout => run_layout(&root, config).map(|_| 0),
    }
}

fn run_layout(root: &Path, config: Option<&Path>) -> Result<(), AppError> {
    let layout = crate::app::api::resolve_layout(root, config)?;
    let json = serde_json::to_string_pretty(&layout)
        .map_err(|e| AppError::config_error(format!("Failed to serialize layout: {}", e)))?;
    println!("{}", json);
    Ok(())
}
