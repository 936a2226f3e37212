//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{ProjectArgs, SummaryArgs};

/// Compound - month-by-month projection of a contribution plan
#[derive(Parser)]
#[command(name = "compound")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Projection config file (TOML)
    #[arg(long, env = "COMPOUND_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Projection horizon in months (overrides the config file)
    #[arg(long, global = true)]
    pub horizon: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Project the monthly performance series of each plan
    Project(ProjectArgs),

    /// Show final-month figures of each plan
    Summary(SummaryArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (final month only)
    Minimal,
}
