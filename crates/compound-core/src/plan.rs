//! Validated contribution plans.
//!
//! A [`ContributionPlan`] owns one [`Asset`] and its contribution periods,
//! sorted by start month and checked once at construction. After that the
//! plan is immutable.

use log::debug;
use serde::Serialize;

use crate::error::{PlanError, PlanResult};
use crate::types::{Asset, ContributionPeriod};

/// An asset plus its ordered, non-overlapping contribution periods.
///
/// # Example
///
/// ```rust
/// use compound_core::{Asset, ContributionPeriod, ContributionPlan};
///
/// let plan = ContributionPlan::new(
///     Asset::new("Fund", 0.0, 0.0),
///     vec![
///         ContributionPeriod::new(200.0, 13, 24),
///         ContributionPeriod::new(100.0, 1, 12),
///         ContributionPeriod::new(0.0, 25, 36),
///     ],
/// )
/// .unwrap();
///
/// // Sorted, with the zero-amount period dropped
/// assert_eq!(plan.periods().len(), 2);
/// assert_eq!(plan.periods()[0].start_month, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContributionPlan {
    asset: Asset,
    periods: Vec<ContributionPeriod>,
}

impl ContributionPlan {
    /// Builds a plan from raw periods.
    ///
    /// Periods with a non-positive amount are discarded. The rest are
    /// stably sorted by start month and validated.
    ///
    /// # Errors
    ///
    /// - [`PlanError::EmptyPlan`] if no period has a positive amount
    /// - [`PlanError::ZeroMonth`] if a period starts at month 0
    /// - [`PlanError::InvertedPeriod`] if a period starts after it ends
    /// - [`PlanError::OverlappingPeriods`] if a period starts before the
    ///   previous one ends; touching at a single month is accepted
    pub fn new(
        asset: Asset,
        periods: impl IntoIterator<Item = ContributionPeriod>,
    ) -> PlanResult<Self> {
        let mut periods: Vec<ContributionPeriod> = periods
            .into_iter()
            .filter(ContributionPeriod::is_contributing)
            .collect();
        periods.sort_by_key(|p| p.start_month);

        let plan = Self { asset, periods };
        plan.validate()?;

        debug!(
            "accepted plan for {} with {} period(s), months {}..={}",
            plan.asset.name(),
            plan.periods.len(),
            plan.first_month(),
            plan.last_month()
        );

        Ok(plan)
    }

    fn validate(&self) -> PlanResult<()> {
        if self.periods.is_empty() {
            return Err(PlanError::EmptyPlan);
        }

        for period in &self.periods {
            if period.start_month == 0 {
                return Err(PlanError::ZeroMonth {
                    start_month: period.start_month,
                    end_month: period.end_month,
                });
            }
            if period.start_month > period.end_month {
                return Err(PlanError::inverted(period.start_month, period.end_month));
            }
        }

        // Touching (previous end == next start) is allowed.
        for pair in self.periods.windows(2) {
            let (previous, next) = (&pair[0], &pair[1]);
            if previous.end_month > next.start_month {
                return Err(PlanError::overlapping(previous.end_month, next.start_month));
            }
        }

        Ok(())
    }

    /// Returns the asset.
    pub fn asset(&self) -> &Asset {
        &self.asset
    }

    /// Returns the periods, sorted by start month.
    pub fn periods(&self) -> &[ContributionPeriod] {
        &self.periods
    }

    /// First contributing month.
    pub fn first_month(&self) -> u32 {
        self.periods.first().map_or(0, |p| p.start_month)
    }

    /// Last contributing month.
    pub fn last_month(&self) -> u32 {
        self.periods.iter().map(|p| p.end_month).max().unwrap_or(0)
    }

    /// Sum of all scheduled contributions, ignoring any horizon.
    pub fn total_scheduled(&self) -> f64 {
        self.periods
            .iter()
            .map(|p| p.amount * f64::from(p.months()))
            .sum()
    }

    /// Per-month contribution schedule over `horizon_months`.
    ///
    /// Index `i` holds the contribution for month `i + 1`. Months outside
    /// every period are 0 and months past the horizon are dropped.
    /// Amounts accumulate, so a month shared by two touching periods
    /// receives both amounts.
    pub fn monthly_contributions(&self, horizon_months: usize) -> Vec<f64> {
        let mut contributions = vec![0.0; horizon_months];

        for period in &self.periods {
            let start = period.start_month as usize - 1;
            let end = (period.end_month as usize).min(horizon_months);
            if start >= end {
                continue;
            }
            for slot in &mut contributions[start..end] {
                *slot += period.amount;
            }
        }

        contributions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_asset() -> Asset {
        Asset::new("Flat", 0.0, 0.0)
    }

    fn period(amount: f64, start: u32, end: u32) -> ContributionPeriod {
        ContributionPeriod::new(amount, start, end)
    }

    #[test]
    fn test_empty_plan() {
        let err = ContributionPlan::new(flat_asset(), Vec::new()).unwrap_err();
        assert_eq!(err, PlanError::EmptyPlan);
    }

    #[test]
    fn test_all_non_positive_is_empty() {
        let err = ContributionPlan::new(
            flat_asset(),
            vec![period(0.0, 1, 12), period(-100.0, 13, 24)],
        )
        .unwrap_err();
        assert_eq!(err, PlanError::EmptyPlan);
    }

    #[test]
    fn test_zero_amount_filtered_before_validation() {
        // Inverted, but discarded before it is checked
        let plan = ContributionPlan::new(
            flat_asset(),
            vec![period(100.0, 1, 12), period(0.0, 9, 2)],
        )
        .unwrap();
        assert_eq!(plan.periods().len(), 1);
    }

    #[test]
    fn test_inverted_period() {
        let err = ContributionPlan::new(flat_asset(), vec![period(100.0, 5, 3)]).unwrap_err();
        assert_eq!(err, PlanError::inverted(5, 3));
    }

    #[test]
    fn test_zero_month() {
        let err = ContributionPlan::new(flat_asset(), vec![period(100.0, 0, 3)]).unwrap_err();
        assert!(matches!(err, PlanError::ZeroMonth { start_month: 0, .. }));
    }

    #[test]
    fn test_overlapping_periods() {
        let err = ContributionPlan::new(
            flat_asset(),
            vec![period(100.0, 1, 12), period(200.0, 6, 18)],
        )
        .unwrap_err();
        assert_eq!(err, PlanError::overlapping(12, 6));
    }

    #[test]
    fn test_overlap_detected_after_sorting() {
        let err = ContributionPlan::new(
            flat_asset(),
            vec![period(200.0, 6, 18), period(100.0, 1, 12)],
        )
        .unwrap_err();
        assert_eq!(err, PlanError::overlapping(12, 6));
    }

    #[test]
    fn test_touching_periods_accepted() {
        let plan = ContributionPlan::new(
            flat_asset(),
            vec![period(100.0, 1, 12), period(200.0, 12, 24)],
        )
        .unwrap();
        assert_eq!(plan.periods().len(), 2);
    }

    #[test]
    fn test_periods_sorted_by_start() {
        let plan = ContributionPlan::new(
            flat_asset(),
            vec![period(3.0, 25, 36), period(1.0, 1, 12), period(2.0, 13, 24)],
        )
        .unwrap();
        let starts: Vec<u32> = plan.periods().iter().map(|p| p.start_month).collect();
        assert_eq!(starts, vec![1, 13, 25]);
        assert_eq!(plan.first_month(), 1);
        assert_eq!(plan.last_month(), 36);
    }

    #[test]
    fn test_monthly_contributions() {
        let plan = ContributionPlan::new(
            flat_asset(),
            vec![period(1000.0, 1, 12), period(2000.0, 13, 24)],
        )
        .unwrap();
        let schedule = plan.monthly_contributions(30);

        assert_eq!(schedule.len(), 30);
        assert!(schedule[..12].iter().all(|&c| c == 1000.0));
        assert!(schedule[12..24].iter().all(|&c| c == 2000.0));
        assert!(schedule[24..].iter().all(|&c| c == 0.0));
    }

    #[test]
    fn test_gap_between_periods_is_zero() {
        let plan = ContributionPlan::new(
            flat_asset(),
            vec![period(100.0, 2, 3), period(100.0, 6, 6)],
        )
        .unwrap();
        assert_eq!(
            plan.monthly_contributions(7),
            vec![0.0, 100.0, 100.0, 0.0, 0.0, 100.0, 0.0]
        );
    }

    #[test]
    fn test_touching_month_accumulates() {
        let plan = ContributionPlan::new(
            flat_asset(),
            vec![period(100.0, 1, 12), period(200.0, 12, 24)],
        )
        .unwrap();
        let schedule = plan.monthly_contributions(24);

        assert_eq!(schedule[10], 100.0);
        assert_eq!(schedule[11], 300.0);
        assert_eq!(schedule[12], 200.0);
    }

    #[test]
    fn test_schedule_truncated_to_horizon() {
        let plan = ContributionPlan::new(
            flat_asset(),
            vec![period(100.0, 1, 12), period(50.0, 20, 40)],
        )
        .unwrap();
        let schedule = plan.monthly_contributions(10);

        assert_eq!(schedule.len(), 10);
        assert!(schedule.iter().all(|&c| c == 100.0));
        assert_eq!(plan.total_scheduled(), 100.0 * 12.0 + 50.0 * 21.0);
    }
}
