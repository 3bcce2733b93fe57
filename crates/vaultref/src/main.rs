//! vaultref CLI - resolve secret-store references in parameters
//!
//! This is the main entry point for the vaultref command-line interface.

mod cli;
mod commands;
mod output;
mod version;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vaultref_core::VaultRefConfig;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Parse CLI args
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose, cli.quiet);
    output::set_quiet(cli.quiet);

    if let Commands::Version(args) = &cli.command {
        return commands::version::run(args);
    }

    let config =
        VaultRefConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    // Run command
    match cli.command {
        Commands::Scan(args) => commands::scan::run(args, &config),
        Commands::Extract(args) => commands::extract::run(args, &config),
        Commands::Resolve(args) => commands::resolve::run(args, &config),
        Commands::Version(_) => Ok(()),
    }
}

/// Initialize tracing with appropriate verbosity.
///
/// Logs go to stderr; stdout carries command results only.
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
