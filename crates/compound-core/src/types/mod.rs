//! Domain types for contribution projections.
//!
//! - [`Asset`]: the projected stock and its monthly rates
//! - [`ContributionPeriod`]: a fixed monthly contribution over a month range
//! - [`MonthlyReturn`]: income and capital earned in a single month
//! - [`PerformanceRecord`]: one month of the cumulative output series

mod asset;
mod performance;
mod period;

pub use asset::Asset;
pub use performance::{MonthlyReturn, PerformanceRecord};
pub use period::ContributionPeriod;
