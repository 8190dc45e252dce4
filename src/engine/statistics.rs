//! Full statistics pass for one reporting window.

use serde::{Deserialize, Serialize};

use super::category::{CategoryBreakdown, breakdown_by_category};
use super::comparison::{PeriodTotals, PriorPeriodComparison, compare_to_prior_period};
use super::filter::MovementFilter;
use super::projection::{ProjectionEstimate, project_from_history};
use super::range::filter_by_range;
use crate::models::{Currency, DateRange, Movement, MovementKind};

/// Everything the statistics view shows for one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Reporting window.
    pub range: DateRange,
    /// Reporting currency.
    pub currency: Currency,
    /// Totals of the filtered movements in the window.
    pub totals: PeriodTotals,
    /// Income by category.
    pub income: CategoryBreakdown,
    /// Expenses by category.
    pub expense: CategoryBreakdown,
    /// Comparison against the preceding window.
    pub comparison: PriorPeriodComparison,
    /// Projection of the equal-length window after `range`.
    pub projection: ProjectionEstimate,
}

/// Runs every stage for `range`.
///
/// Totals, breakdowns and the current side of the comparison honor
/// `filter`. The comparison baseline and the projection look at all
/// movements: they describe overall behavior, not the filtered view.
#[inline]
#[must_use]
pub fn compute_statistics(
    all_movements: &[Movement],
    range: &DateRange,
    currency: Currency,
    filter: &MovementFilter,
) -> Statistics {
    let in_range = filter.apply(&filter_by_range(all_movements, range));
    let comparison = compare_to_prior_period(all_movements, range, currency, filter);

    Statistics {
        range: *range,
        currency,
        totals: comparison.current,
        income: breakdown_by_category(&in_range, MovementKind::Income, currency),
        expense: breakdown_by_category(&in_range, MovementKind::Expense, currency),
        comparison,
        projection: project_from_history(all_movements, range, currency),
    }
}
