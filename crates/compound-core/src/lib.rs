//! # Compound Core
//!
//! Contribution schedules and compounding performance projection for a
//! single asset.
//!
//! This crate provides the building blocks of a monthly projection:
//!
//! - **Types**: [`Asset`], [`ContributionPeriod`], [`MonthlyReturn`], [`PerformanceRecord`]
//! - **Plan**: [`ContributionPlan`] validates contribution periods and derives
//!   the per-month contribution schedule
//! - **Engine**: [`PerformanceEngine`] compounds the schedule against the
//!   asset's monthly rates and caches the resulting series
//! - **Config**: [`ProjectionConfig`] carries the projection horizon
//!
//! ## Example
//!
//! ```rust
//! use compound_core::prelude::*;
//!
//! let asset = Asset::new("Index Fund", 0.005, 0.001);
//! let plan = ContributionPlan::new(
//!     asset,
//!     vec![
//!         ContributionPeriod::new(1000.0, 1, 12),
//!         ContributionPeriod::new(2000.0, 13, 24),
//!     ],
//! )?;
//!
//! let engine = PerformanceEngine::with_horizon(plan, 36);
//! let series = engine.monthly_performances();
//! assert_eq!(series.len(), 36);
//! assert_eq!(series[23].investment, 36_000.0);
//! # Ok::<(), compound_core::PlanError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]

pub mod config;
pub mod engine;
pub mod error;
pub mod plan;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::{ProjectionConfig, DEFAULT_HORIZON_MONTHS};
    pub use crate::engine::{PerformanceEngine, ProjectionSummary};
    pub use crate::error::{PlanError, PlanResult};
    pub use crate::plan::ContributionPlan;
    pub use crate::types::{Asset, ContributionPeriod, MonthlyReturn, PerformanceRecord};
}

// Re-export commonly used types at crate root
pub use config::{ProjectionConfig, DEFAULT_HORIZON_MONTHS};
pub use engine::{PerformanceEngine, ProjectionSummary};
pub use error::{PlanError, PlanResult};
pub use plan::ContributionPlan;
pub use types::{Asset, ContributionPeriod, MonthlyReturn, PerformanceRecord};
