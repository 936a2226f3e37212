//! CLI command implementations.

pub mod project;
pub mod summary;

pub use project::ProjectArgs;
pub use summary::SummaryArgs;

use std::path::{Path, PathBuf};

use clap::Args;
use tracing::info;

use compound_core::{ContributionPlan, ProjectionConfig};

use crate::error::{CliError, CliResult};
use crate::input::{self, AssetSpec};

/// Where plans come from, shared by every command.
#[derive(Args, Debug)]
pub struct PlanSourceArgs {
    /// Plan file (TOML) with one or more [[plans]]
    #[arg(short, long, conflicts_with = "periods")]
    pub plan: Option<PathBuf>,

    /// Period table (CSV: amount,start_month,end_month) for a single asset
    #[arg(long)]
    pub periods: Option<PathBuf>,

    /// Asset name, used with --periods
    #[arg(long, default_value = "Asset", requires = "periods")]
    pub name: String,

    /// Annual capital rate as a fraction (0.06 = 6%), used with --periods
    #[arg(long, default_value = "0", requires = "periods")]
    pub capital_rate: f64,

    /// Annual income rate as a fraction (0.03 = 3%), used with --periods
    #[arg(long, default_value = "0", requires = "periods")]
    pub income_rate: f64,
}

impl PlanSourceArgs {
    /// Loads and validates every plan named by the arguments.
    pub fn load(&self) -> CliResult<Vec<ContributionPlan>> {
        match (&self.plan, &self.periods) {
            (Some(path), _) => input::read_plan_file(path),
            (None, Some(path)) => {
                let asset = AssetSpec {
                    name: self.name.clone(),
                    annual_capital_rate: self.capital_rate,
                    annual_income_rate: self.income_rate,
                };
                Ok(vec![input::read_csv_plan(path, asset)?])
            }
            (None, None) => Err(CliError::MissingPlanSource),
        }
    }
}

/// Resolves the projection config: `--horizon` over the config file over
/// the default.
pub fn resolve_config(path: Option<&Path>, horizon: Option<usize>) -> anyhow::Result<ProjectionConfig> {
    let mut config = match path {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            ProjectionConfig::from_file(path)?
        }
        None => ProjectionConfig::default(),
    };

    if let Some(months) = horizon {
        config = config.with_horizon_months(months);
    }
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_resolve_default() {
        let config = resolve_config(None, None).unwrap();
        assert_eq!(config, ProjectionConfig::default());
    }

    #[test]
    fn test_horizon_flag_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "horizon_months = 600").unwrap();

        assert_eq!(resolve_config(Some(file.path()), None).unwrap().horizon_months, 600);
        assert_eq!(resolve_config(Some(file.path()), Some(24)).unwrap().horizon_months, 24);
    }

    #[test]
    fn test_zero_horizon_flag_rejected() {
        assert!(resolve_config(None, Some(0)).is_err());
    }

    #[test]
    fn test_missing_source() {
        let args = PlanSourceArgs {
            plan: None,
            periods: None,
            name: "Asset".into(),
            capital_rate: 0.0,
            income_rate: 0.0,
        };
        assert!(matches!(args.load(), Err(CliError::MissingPlanSource)));
    }
}
