//! The aggregation and reporting pipeline.
//!
//! Every stage is a pure function over borrowed movement slices: nothing
//! here performs I/O, holds state between calls, or mutates its inputs.
//! Data flows forward only:
//!
//! ```text
//! movements ─► filter_by_range ─► amount_in ─► breakdown_by_category
//!                                           ├► compare_to_prior_period
//!                                           └► project_next_period
//! ```
//!
//! [`compute_statistics`] runs the whole pipeline for one range and is
//! what [`crate::dashboard::Dashboard`] calls.

mod category;
mod comparison;
mod currency;
mod filter;
mod projection;
mod range;
mod statistics;

pub use category::{
    CategoryAggregate, CategoryBreakdown, OTHERS_LABEL, UNCATEGORIZED_LABEL,
    aggregate_by_category, breakdown_by_category, canonical_category,
};
pub use comparison::{
    PeriodComparison, PeriodTotals, PriorPeriodComparison, RateComparison,
    compare_to_prior_period, percentage_point_difference, period_totals, relative_variance,
    savings_rate,
};
pub use currency::{amount_in, total_in};
pub use filter::{FilterSet, MovementFilter};
pub use projection::{IncomeBasis, ProjectionEstimate, project_from_history, project_next_period};
pub use range::filter_by_range;
pub use statistics::{Statistics, compute_statistics};
