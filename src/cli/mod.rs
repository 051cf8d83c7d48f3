//! Interface de linha de comando do gradaco.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gradaco - gradual pattern mining with ant colony optimisation.
#[derive(Parser, Debug)]
#[command(name = "gradaco")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file.
    #[arg(short, long, default_value = "gradaco.toml")]
    pub config: PathBuf,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Command to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Writes a default configuration file.
    Init {
        /// Target directory (default: current directory).
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Mines gradual patterns from a JSON dataset.
    Mine {
        /// Dataset file (`{"titles": [...], "rows": [[...], ...]}`).
        data: PathBuf,

        /// Minimum support, overrides the configuration.
        #[arg(short = 's', long)]
        min_support: Option<f64>,

        /// Number of iterations, overrides the configuration.
        #[arg(short = 'n', long)]
        iterations: Option<usize>,

        /// Generator seed, overrides the configuration.
        #[arg(long)]
        seed: Option<u64>,

        /// Writes the JSON report to this file.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Shows version.
    Version,
}
