//! Error types for contribution plans.
//!
//! Every error here is raised while building a [`ContributionPlan`] or
//! loading a [`ProjectionConfig`]. The compounding pass itself cannot fail.
//!
//! [`ContributionPlan`]: crate::ContributionPlan
//! [`ProjectionConfig`]: crate::ProjectionConfig

use thiserror::Error;

/// A specialized Result type for plan construction.
pub type PlanResult<T> = Result<T, PlanError>;

/// Validation failures for a contribution plan or projection config.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// No period with a positive amount was supplied.
    #[error("Empty plan: no contribution period with a positive amount")]
    EmptyPlan,

    /// A period starts or ends at month 0. Months are 1-indexed.
    #[error("Invalid period: months start at 1 (got {start_month}..={end_month})")]
    ZeroMonth {
        /// First month of the offending period.
        start_month: u32,
        /// Last month of the offending period.
        end_month: u32,
    },

    /// A period's start month is after its end month.
    #[error("Inverted period: start month {start_month} is after end month {end_month}")]
    InvertedPeriod {
        /// First month of the offending period.
        start_month: u32,
        /// Last month of the offending period.
        end_month: u32,
    },

    /// Two consecutive periods overlap once sorted by start month.
    #[error(
        "Overlapping periods: a period ending at month {previous_end} overlaps the next period starting at month {next_start}"
    )]
    OverlappingPeriods {
        /// End month of the earlier period.
        previous_end: u32,
        /// Start month of the later period.
        next_start: u32,
    },

    /// Projection configuration is unusable.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the configuration error.
        reason: String,
    },
}

impl PlanError {
    /// Creates an inverted period error.
    #[must_use]
    pub fn inverted(start_month: u32, end_month: u32) -> Self {
        Self::InvertedPeriod {
            start_month,
            end_month,
        }
    }

    /// Creates an overlapping periods error.
    #[must_use]
    pub fn overlapping(previous_end: u32, next_start: u32) -> Self {
        Self::OverlappingPeriods {
            previous_end,
            next_start,
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}
