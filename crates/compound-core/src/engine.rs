//! Compounding performance engine.
//!
//! The engine turns a [`ContributionPlan`] into a month-by-month
//! [`PerformanceRecord`] series. The series is computed on first access and
//! cached for the life of the engine; the plan is immutable, so the cache is
//! never invalidated.
//!
//! # Recurrence
//!
//! A forward fold tracks the running asset base, starting at 0. For month
//! index `i` with contribution `c_i`:
//!
//! ```text
//! income_i   = (c_i + base) * income_rate
//! capital_i  = (c_i + base) * capital_rate
//! base      += c_i + capital_i
//! ```
//!
//! Income is paid out and never joins the base. Each step depends on every
//! earlier one, so the fold runs strictly in month order.
//!
//! The output series is seeded with the first month's contribution and then
//! adds, for every later month, that month's contribution and fresh return
//! to the previous cumulative record.

use log::debug;
use once_cell::sync::OnceCell;
use serde::Serialize;

use crate::config::{ProjectionConfig, DEFAULT_HORIZON_MONTHS};
use crate::plan::ContributionPlan;
use crate::types::{MonthlyReturn, PerformanceRecord};

/// Projects a contribution plan over a fixed horizon.
///
/// # Example
///
/// ```rust
/// use compound_core::prelude::*;
///
/// let plan = ContributionPlan::new(
///     Asset::new("Flat", 0.0, 0.0),
///     vec![ContributionPeriod::new(1000.0, 1, 12)],
/// )
/// .unwrap();
/// let engine = PerformanceEngine::with_horizon(plan, 24);
///
/// let month_12 = engine.monthly_performances()[11];
/// assert_eq!(month_12.investment, 12_000.0);
/// assert_eq!(month_12.assets, 12_000.0);
/// ```
#[derive(Debug)]
pub struct PerformanceEngine {
    plan: ContributionPlan,
    horizon_months: usize,
    performances: OnceCell<Vec<PerformanceRecord>>,
}

impl PerformanceEngine {
    /// Creates an engine over [`DEFAULT_HORIZON_MONTHS`].
    #[must_use]
    pub fn new(plan: ContributionPlan) -> Self {
        Self::with_horizon(plan, DEFAULT_HORIZON_MONTHS)
    }

    /// Creates an engine over the configured horizon.
    #[must_use]
    pub fn with_config(plan: ContributionPlan, config: &ProjectionConfig) -> Self {
        Self::with_horizon(plan, config.horizon_months)
    }

    /// Creates an engine over `horizon_months`.
    ///
    /// A zero horizon is raised to one month so the series always has its
    /// opening record.
    #[must_use]
    pub fn with_horizon(plan: ContributionPlan, horizon_months: usize) -> Self {
        Self {
            plan,
            horizon_months: horizon_months.max(1),
            performances: OnceCell::new(),
        }
    }

    /// Returns the plan being projected.
    pub fn plan(&self) -> &ContributionPlan {
        &self.plan
    }

    /// Returns the projection horizon in months.
    pub fn horizon_months(&self) -> usize {
        self.horizon_months
    }

    /// Returns true once the series has been computed.
    pub fn is_computed(&self) -> bool {
        self.performances.get().is_some()
    }

    /// The full performance series, computed on first call.
    pub fn monthly_performances(&self) -> &[PerformanceRecord] {
        self.performances.get_or_init(|| {
            debug!(
                "projecting {} over {} months",
                self.plan.asset().name(),
                self.horizon_months
            );
            self.estimate_performance()
        })
    }

    /// Record for a 1-indexed month, if within the horizon.
    pub fn performance_at(&self, month: u32) -> Option<&PerformanceRecord> {
        let index = (month as usize).checked_sub(1)?;
        self.monthly_performances().get(index)
    }

    /// Final-month headline figures.
    pub fn summary(&self) -> ProjectionSummary {
        let last = self
            .monthly_performances()
            .last()
            .copied()
            .unwrap_or_default();

        ProjectionSummary {
            asset: self.plan.asset().name().to_string(),
            horizon_months: self.horizon_months,
            investment: last.investment,
            assets: last.assets,
            income: last.income,
            capital: last.capital,
            total_return: last.total_return,
        }
    }

    /// Per-month contribution schedule over the horizon.
    pub fn monthly_contributions(&self) -> Vec<f64> {
        self.plan.monthly_contributions(self.horizon_months)
    }

    /// Fresh income and capital for each month over the horizon.
    pub fn monthly_returns(&self) -> Vec<MonthlyReturn> {
        Self::fold_returns(&self.plan, &self.monthly_contributions())
    }

    fn fold_returns(plan: &ContributionPlan, contributions: &[f64]) -> Vec<MonthlyReturn> {
        let asset = plan.asset();
        let mut total_assets = 0.0;

        contributions
            .iter()
            .map(|&contribution| {
                let base = contribution + total_assets;
                let fresh = MonthlyReturn::new(base * asset.income_rate(), base * asset.capital_rate());
                total_assets += contribution + fresh.capital;
                fresh
            })
            .collect()
    }

    /// Runs the recurrence without touching the cache.
    pub fn estimate_performance(&self) -> Vec<PerformanceRecord> {
        let contributions = self.monthly_contributions();
        let returns = Self::fold_returns(&self.plan, &contributions);

        let mut series = Vec::with_capacity(self.horizon_months);
        let mut current = PerformanceRecord::opening(contributions[0]);
        series.push(current);

        for (&contribution, &fresh) in contributions.iter().zip(&returns).skip(1) {
            current = current.next(contribution, fresh);
            series.push(current);
        }

        series
    }
}

/// Final-month figures of a projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionSummary {
    /// Asset label.
    pub asset: String,
    /// Months projected.
    pub horizon_months: usize,
    /// Total contributed.
    pub investment: f64,
    /// Final asset value.
    pub assets: f64,
    /// Total income received.
    pub income: f64,
    /// Total capital gain.
    pub capital: f64,
    /// Total income plus capital.
    pub total_return: f64,
}
