//! Summary command implementation.

use anyhow::Result;
use clap::Args;

use compound_core::{PerformanceEngine, ProjectionConfig, ProjectionSummary};

use crate::cli::OutputFormat;
use crate::commands::PlanSourceArgs;
use crate::output::print_summaries;

/// Arguments for the summary command.
#[derive(Args, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub source: PlanSourceArgs,
}

/// Execute the summary command.
pub fn execute(args: SummaryArgs, config: &ProjectionConfig, format: OutputFormat) -> Result<()> {
    let summaries: Vec<ProjectionSummary> = args
        .source
        .load()?
        .into_iter()
        .map(|plan| PerformanceEngine::with_config(plan, config).summary())
        .collect();

    print_summaries(&summaries, format)
}
