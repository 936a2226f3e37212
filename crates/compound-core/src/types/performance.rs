//! Monthly return and performance record types.

use serde::{Deserialize, Serialize};

/// Income and capital earned in a single month (not cumulative).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReturn {
    /// Distribution received this month.
    pub income: f64,
    /// Price appreciation earned this month.
    pub capital: f64,
}

impl MonthlyReturn {
    /// Creates a monthly return.
    #[must_use]
    pub fn new(income: f64, capital: f64) -> Self {
        Self { income, capital }
    }

    /// Income plus capital for the month.
    pub fn total(&self) -> f64 {
        self.income + self.capital
    }
}

/// One month of the projected performance series.
///
/// Every field except `month` is a running sum from month 1 through this
/// month, inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    /// Month number (1-indexed).
    pub month: u32,
    /// Cumulative contributions.
    pub investment: f64,
    /// Cumulative asset value.
    pub assets: f64,
    /// Cumulative income received.
    pub income: f64,
    /// Cumulative capital gain.
    pub capital: f64,
    /// Cumulative income plus capital.
    pub total_return: f64,
}

impl PerformanceRecord {
    /// Column names in output order.
    pub const COLUMNS: [&'static str; 6] = [
        "month",
        "investment",
        "assets",
        "income",
        "capital",
        "total_return",
    ];

    /// Seed record for month 1: only the first contribution, no returns yet.
    #[must_use]
    pub fn opening(contribution: f64) -> Self {
        Self {
            month: 1,
            investment: contribution,
            assets: contribution,
            ..Self::default()
        }
    }

    /// Record for the following month, given that month's fresh
    /// contribution and return.
    #[must_use]
    pub fn next(&self, contribution: f64, fresh: MonthlyReturn) -> Self {
        Self {
            month: self.month + 1,
            investment: self.investment + contribution,
            assets: self.assets + contribution + fresh.capital,
            income: self.income + fresh.income,
            capital: self.capital + fresh.capital,
            total_return: self.total_return + fresh.capital + fresh.income,
        }
    }
}
