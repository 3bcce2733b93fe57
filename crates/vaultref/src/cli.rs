//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

pub use crate::commands::extract::ExtractArgs;
pub use crate::commands::resolve::ResolveArgs;
pub use crate::commands::scan::ScanArgs;
pub use crate::commands::version::VersionArgs;

/// vaultref - resolve secret-store references in build parameters
#[derive(Parser, Debug)]
#[command(name = "vaultref")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress status output (warnings and errors are still shown)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to vaultref.yaml config file
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List secret references found in a parameter file
    Scan(ScanArgs),

    /// List secret references in a single value
    Extract(ExtractArgs),

    /// Substitute secrets into a parameter file
    Resolve(ResolveArgs),

    /// Show version information
    Version(VersionArgs),
}
