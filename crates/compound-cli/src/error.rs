//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Neither a plan file nor a period table was given.
    #[error("Missing plan source: pass --plan <file> or --periods <csv>")]
    MissingPlanSource,

    /// Plan file has no plans.
    #[error("No plans found in {}", .0.display())]
    NoPlans(PathBuf),

    /// Plan file could not be parsed.
    #[error("Invalid plan file {}: {reason}", .path.display())]
    InvalidPlanFile {
        /// File being read.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// A period row could not be parsed.
    #[error("Invalid period row {row} in {}: {reason}", .path.display())]
    InvalidRow {
        /// File being read.
        path: PathBuf,
        /// 1-indexed data row.
        row: usize,
        /// Parser message.
        reason: String,
    },

    /// `--every` must be positive.
    #[error("Invalid --every value: {0}. Must be at least 1.")]
    InvalidStep(usize),

    /// Plan validation failed.
    #[error("Plan '{name}' rejected: {source}")]
    Plan {
        /// Plan name.
        name: String,
        /// Validation failure.
        #[source]
        source: compound_core::PlanError,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
