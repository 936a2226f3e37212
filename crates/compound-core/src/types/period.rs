//! Contribution period type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed monthly contribution over an inclusive, 1-indexed month range.
///
/// A period is plain data: validation happens when periods are collected
/// into a [`ContributionPlan`](crate::ContributionPlan).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContributionPeriod {
    /// Amount contributed in every month of the range.
    pub amount: f64,
    /// First contributing month (1-indexed, inclusive).
    pub start_month: u32,
    /// Last contributing month (1-indexed, inclusive).
    pub end_month: u32,
}

impl ContributionPeriod {
    /// Creates a new contribution period.
    #[must_use]
    pub fn new(amount: f64, start_month: u32, end_month: u32) -> Self {
        Self {
            amount,
            start_month,
            end_month,
        }
    }

    /// Returns true if the period contributes a positive amount.
    pub fn is_contributing(&self) -> bool {
        self.amount > 0.0
    }

    /// Returns true if `month` falls within the period.
    pub fn contains(&self, month: u32) -> bool {
        self.start_month <= month && month <= self.end_month
    }

    /// Number of months in the period, or 0 when inverted.
    pub fn months(&self) -> u32 {
        self.end_month.saturating_add(1).saturating_sub(self.start_month)
    }
}

impl fmt::Display for ContributionPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2}/mo for months {}..={}",
            self.amount, self.start_month, self.end_month
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let period = ContributionPeriod::new(100.0, 3, 5);
        assert!(!period.contains(2));
        assert!(period.contains(3));
        assert!(period.contains(5));
        assert!(!period.contains(6));
    }

    #[test]
    fn test_months() {
        assert_eq!(ContributionPeriod::new(100.0, 1, 12).months(), 12);
        assert_eq!(ContributionPeriod::new(100.0, 7, 7).months(), 1);
        assert_eq!(ContributionPeriod::new(100.0, 5, 3).months(), 0);
    }

    #[test]
    fn test_is_contributing() {
        assert!(ContributionPeriod::new(0.01, 1, 1).is_contributing());
        assert!(!ContributionPeriod::new(0.0, 1, 1).is_contributing());
        assert!(!ContributionPeriod::new(-50.0, 1, 1).is_contributing());
    }
}
