//! Styleforge CLI - validate and compile design-system schemas.
//!
//! `styleforge validate` checks a declarative config; `styleforge build`
//! compiles it into a stylesheet, TypeScript definitions, and a manifest.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

mod commands;

/// Styleforge - compile component schemas into CSS, types, and manifests.
#[derive(Parser, Debug)]
#[command(
    name = "styleforge",
    author,
    version,
    about = "Styleforge: schema-driven design-system compiler",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a design-system config without emitting anything.
    Validate {
        /// Path to the config file (.json or .toml).
        config: PathBuf,
    },

    /// Compile a config into CSS, TypeScript definitions, and a manifest.
    Build {
        /// Path to the config file (.json or .toml).
        config: PathBuf,

        /// Output directory for the generated artifacts.
        #[arg(short, long, default_value = "dist")]
        out: PathBuf,
    },
}

fn init_tracing(verbose: bool, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let ok = match cli.command {
        Commands::Validate { config } => commands::validate::run(&config)?,
        Commands::Build { config, out } => commands::build::run(&config, &out)?,
    };
    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
