//! Asset type with monthly return rates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Months per year, used when converting annual rates.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// A single projected asset.
///
/// Both rates are per-month fractions. Annual figures must be converted
/// before construction, either by the caller or with
/// [`Asset::from_annual_rates`]. The engine never re-scales them.
///
/// # Example
///
/// ```rust
/// use compound_core::Asset;
///
/// let asset = Asset::from_annual_rates("Dividend ETF", 0.06, 0.036);
/// assert!((asset.capital_rate() - 0.005).abs() < 1e-12);
/// assert!((asset.income_rate() - 0.003).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    name: String,
    capital_rate: f64,
    income_rate: f64,
}

impl Asset {
    /// Creates an asset from monthly rates.
    #[must_use]
    pub fn new(name: impl Into<String>, capital_rate: f64, income_rate: f64) -> Self {
        Self {
            name: name.into(),
            capital_rate,
            income_rate,
        }
    }

    /// Creates an asset from annual rates, dividing each by 12.
    #[must_use]
    pub fn from_annual_rates(
        name: impl Into<String>,
        annual_capital_rate: f64,
        annual_income_rate: f64,
    ) -> Self {
        Self::new(
            name,
            annual_capital_rate / MONTHS_PER_YEAR,
            annual_income_rate / MONTHS_PER_YEAR,
        )
    }

    /// Returns the asset label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the monthly price-appreciation rate.
    pub fn capital_rate(&self) -> f64 {
        self.capital_rate
    }

    /// Returns the monthly distribution rate.
    pub fn income_rate(&self) -> f64 {
        self.income_rate
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (capital {:.4}%/mo, income {:.4}%/mo)",
            self.name,
            self.capital_rate * 100.0,
            self.income_rate * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_monthly_rates_kept_as_is() {
        let asset = Asset::new("NASDAQ", 0.01, 0.002);
        assert_eq!(asset.name(), "NASDAQ");
        assert_eq!(asset.capital_rate(), 0.01);
        assert_eq!(asset.income_rate(), 0.002);
    }

    #[test]
    fn test_from_annual_rates() {
        let asset = Asset::from_annual_rates("SCHD", 0.12, 0.03);
        assert_relative_eq!(asset.capital_rate(), 0.01, epsilon = 1e-15);
        assert_relative_eq!(asset.income_rate(), 0.0025, epsilon = 1e-15);
    }

    #[test]
    fn test_display() {
        let asset = Asset::new("Fund", 0.005, 0.0);
        assert_eq!(
            asset.to_string(),
            "Fund (capital 0.5000%/mo, income 0.0000%/mo)"
        );
    }
}
