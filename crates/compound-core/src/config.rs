//! Projection configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};

/// Default projection horizon: 30 years.
pub const DEFAULT_HORIZON_MONTHS: usize = 360;

/// Deployment-wide projection settings.
///
/// Loaded once and shared by every engine built for a run.
///
/// ```rust
/// use compound_core::ProjectionConfig;
///
/// let config = ProjectionConfig::from_toml_str("horizon_months = 600").unwrap();
/// assert_eq!(config, ProjectionConfig::fifty_years());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Number of months every projection covers.
    pub horizon_months: usize,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            horizon_months: DEFAULT_HORIZON_MONTHS,
        }
    }
}

impl ProjectionConfig {
    /// Creates a config with the given horizon.
    #[must_use]
    pub fn new(horizon_months: usize) -> Self {
        Self { horizon_months }
    }

    /// 360 months.
    #[must_use]
    pub fn thirty_years() -> Self {
        Self::new(360)
    }

    /// 600 months.
    #[must_use]
    pub fn fifty_years() -> Self {
        Self::new(600)
    }

    /// Sets the horizon.
    #[must_use]
    pub fn with_horizon_months(mut self, horizon_months: usize) -> Self {
        self.horizon_months = horizon_months;
        self
    }

    /// Checks the horizon covers at least one month.
    pub fn validate(&self) -> PlanResult<()> {
        if self.horizon_months == 0 {
            return Err(PlanError::invalid_config(
                "horizon_months must be at least 1",
            ));
        }
        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> PlanResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| PlanError::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> PlanResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PlanError::invalid_config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }
}
