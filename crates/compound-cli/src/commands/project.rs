//! Project command implementation.
//!
//! Projects every loaded plan independently and prints the monthly series.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use compound_core::{PerformanceEngine, ProjectionConfig};

use crate::cli::OutputFormat;
use crate::commands::PlanSourceArgs;
use crate::error::CliError;
use crate::output::{print_series, print_success, select_months, write_series_dir, NamedSeries};

/// Arguments for the project command.
#[derive(Args, Debug)]
pub struct ProjectArgs {
    #[command(flatten)]
    pub source: PlanSourceArgs,

    /// Print every n-th month (the final month is always printed)
    #[arg(long, default_value = "1")]
    pub every: usize,

    /// Also write each full series as <asset>.csv into this directory
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

/// Execute the project command.
pub fn execute(
    args: ProjectArgs,
    config: &ProjectionConfig,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    if args.every == 0 {
        return Err(CliError::InvalidStep(args.every).into());
    }

    let engines: Vec<PerformanceEngine> = args
        .source
        .load()?
        .into_iter()
        .map(|plan| PerformanceEngine::with_config(plan, config))
        .collect();

    info!(
        plans = engines.len(),
        horizon_months = config.horizon_months,
        "projecting plans"
    );

    let named: Vec<NamedSeries<'_>> = engines
        .iter()
        .map(|engine| NamedSeries {
            asset: engine.plan().asset().name(),
            series: select_months(engine.monthly_performances(), args.every),
        })
        .collect();
    print_series(&named, format, quiet)?;

    if let Some(dir) = &args.output_dir {
        let full: Vec<(&str, &[_])> = engines
            .iter()
            .map(|engine| (engine.plan().asset().name(), engine.monthly_performances()))
            .collect();
        let written = write_series_dir(dir, &full)?;
        if !quiet && format == OutputFormat::Table {
            for path in written {
                print_success(&format!("Wrote {}", path.display()));
            }
        }
    }

    Ok(())
}
