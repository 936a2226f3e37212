//! Plan input adapters.
//!
//! Two sources are supported:
//! - a TOML plan file with one or more `[[plans]]`, each projected on its own
//! - a CSV period table (`amount,start_month,end_month`) for a single asset
//!   whose name and annual rates come from the command line
//!
//! Rates in both sources are annual and are converted to monthly here.
//! Rows with a blank or non-positive amount are dropped.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use compound_core::{Asset, ContributionPeriod, ContributionPlan};

use crate::error::{CliError, CliResult};

/// Plan file layout.
#[derive(Debug, Deserialize)]
struct PlanFile {
    #[serde(default)]
    plans: Vec<PlanEntry>,
}

/// One asset in a plan file.
#[derive(Debug, Deserialize)]
struct PlanEntry {
    name: String,
    #[serde(default)]
    annual_capital_rate: f64,
    #[serde(default)]
    annual_income_rate: f64,
    #[serde(default)]
    periods: Vec<ContributionPeriod>,
}

/// CSV record for a contribution period. Blank cells read as `None`.
#[derive(Debug, Deserialize)]
struct PeriodRecord {
    amount: Option<f64>,
    start_month: Option<u32>,
    end_month: Option<u32>,
}

/// Asset described on the command line.
#[derive(Debug, Clone)]
pub struct AssetSpec {
    /// Asset label.
    pub name: String,
    /// Annual capital rate (fraction).
    pub annual_capital_rate: f64,
    /// Annual income rate (fraction).
    pub annual_income_rate: f64,
}

impl AssetSpec {
    fn into_asset(self) -> Asset {
        Asset::from_annual_rates(self.name, self.annual_capital_rate, self.annual_income_rate)
    }
}

fn build_plan(asset: Asset, periods: Vec<ContributionPeriod>) -> CliResult<ContributionPlan> {
    let name = asset.name().to_string();
    ContributionPlan::new(asset, periods).map_err(|source| CliError::Plan { name, source })
}

/// Parses plans from TOML text. `path` is only used for messages.
pub fn parse_plan_file(content: &str, path: &Path) -> CliResult<Vec<ContributionPlan>> {
    let file: PlanFile = toml::from_str(content).map_err(|e| CliError::InvalidPlanFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    if file.plans.is_empty() {
        return Err(CliError::NoPlans(path.to_path_buf()));
    }

    file.plans
        .into_iter()
        .map(|entry| {
            let asset = Asset::from_annual_rates(
                entry.name,
                entry.annual_capital_rate,
                entry.annual_income_rate,
            );
            build_plan(asset, entry.periods)
        })
        .collect()
}

/// Reads every plan in a TOML plan file.
pub fn read_plan_file(path: &Path) -> CliResult<Vec<ContributionPlan>> {
    info!("Loading plans from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    let plans = parse_plan_file(&content, path)?;
    debug!(count = plans.len(), "loaded plans");
    Ok(plans)
}

/// Reads contribution periods from a CSV table.
pub fn read_periods_csv(path: &Path) -> CliResult<Vec<ContributionPeriod>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| CliError::InvalidPlanFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let mut periods = Vec::new();
    for (index, result) in reader.deserialize().enumerate() {
        let row = index + 1;
        let record: PeriodRecord = result.map_err(|e| invalid_row(path, row, e.to_string()))?;

        let amount = record.amount.unwrap_or(0.0);
        if amount <= 0.0 {
            debug!(row, "skipping non-contributing row");
            continue;
        }

        let (Some(start_month), Some(end_month)) = (record.start_month, record.end_month) else {
            return Err(invalid_row(path, row, "start_month and end_month are required".into()));
        };
        periods.push(ContributionPeriod::new(amount, start_month, end_month));
    }

    Ok(periods)
}

fn invalid_row(path: &Path, row: usize, reason: String) -> CliError {
    CliError::InvalidRow {
        path: PathBuf::from(path),
        row,
        reason,
    }
}

/// Builds a single plan from a CSV period table.
pub fn read_csv_plan(path: &Path, asset: AssetSpec) -> CliResult<ContributionPlan> {
    info!("Loading periods from {}", path.display());
    let periods = read_periods_csv(path)?;
    build_plan(asset.into_asset(), periods)
}
