//! Period comparator stage.
//!
//! Two variance styles are exposed as separate operations:
//! [`relative_variance`] for amounts (percent change) and
//! [`percentage_point_difference`] for values that are already
//! percentages, such as the savings rate.

use serde::{Deserialize, Serialize};

use super::currency::total_in;
use super::filter::MovementFilter;
use super::range::filter_by_range;
use crate::models::{Currency, DateRange, Movement, MovementKind};

/// Income and expense totals of one period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodTotals {
    /// Sum of income amounts.
    pub income: f64,
    /// Sum of expense amounts, as a positive magnitude.
    pub expense: f64,
    /// `income - expense`.
    pub balance: f64,
    /// See [`savings_rate`].
    pub savings_rate: f64,
    /// Number of movements considered, transfers included.
    pub movement_count: usize,
}

/// An amount compared with the same amount in the prior period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodComparison {
    /// Value in the current period.
    pub current_total: f64,
    /// Value in the prior period.
    pub prior_total: f64,
    /// Relative change in percent; `None` when the prior value is zero.
    pub variance_percent: Option<f64>,
}

impl PeriodComparison {
    /// Compares `current` against `prior` with [`relative_variance`].
    #[inline]
    #[must_use]
    pub fn between(current: f64, prior: f64) -> Self {
        Self {
            current_total: current,
            prior_total: prior,
            variance_percent: relative_variance(current, prior),
        }
    }
}

/// A percentage compared with the prior period's percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateComparison {
    /// Rate in the current period, in percent.
    pub current_rate: f64,
    /// Rate in the prior period, in percent.
    pub prior_rate: f64,
    /// `current_rate - prior_rate`, in percentage points.
    pub point_difference: f64,
}

impl RateComparison {
    /// Compares `current` against `prior` with
    /// [`percentage_point_difference`].
    #[inline]
    #[must_use]
    pub fn between(current: f64, prior: f64) -> Self {
        Self {
            current_rate: current,
            prior_rate: prior,
            point_difference: percentage_point_difference(current, prior),
        }
    }
}

/// The current period measured against the immediately preceding one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorPeriodComparison {
    /// Window being reported on.
    pub current_range: DateRange,
    /// Equal-length window ending the day before `current_range.from`.
    pub prior_range: DateRange,
    /// Totals of the current window, display filters applied.
    pub current: PeriodTotals,
    /// Totals of the prior window over all movements.
    pub prior: PeriodTotals,
    /// Income comparison.
    pub income_comparison: PeriodComparison,
    /// Expense comparison.
    pub expense_comparison: PeriodComparison,
    /// Balance comparison.
    pub balance_comparison: PeriodComparison,
    /// Savings rate comparison, in percentage points.
    pub savings_rate_comparison: RateComparison,
}

/// Relative change from `prior` to `current`, in percent.
///
/// Returns `None` when `prior` is exactly zero, which keeps "no baseline"
/// distinguishable from "no change". The denominator is `|prior|` so a
/// negative balance that improves reads as a positive change.
#[inline]
#[must_use]
pub fn relative_variance(current: f64, prior: f64) -> Option<f64> {
    (prior != 0.0_f64).then(|| (current - prior) / prior.abs() * 100.0_f64)
}

/// Difference between two percentages, in percentage points.
#[inline]
#[must_use]
pub fn percentage_point_difference(current_rate: f64, prior_rate: f64) -> f64 {
    current_rate - prior_rate
}

/// Share of income kept after expenses, in percent; `0` without income.
#[inline]
#[must_use]
pub fn savings_rate(income: f64, expense: f64) -> f64 {
    if income > 0.0_f64 {
        (income - expense) / income * 100.0_f64
    } else {
        0.0_f64
    }
}

/// Computes income, expense, balance and savings rate of `movements`.
///
/// Transfers move money between the user's own accounts and are counted
/// but not summed.
#[inline]
#[must_use]
pub fn period_totals(movements: &[Movement], currency: Currency) -> PeriodTotals {
    let income = total_in(
        movements.iter().filter(|mv| mv.kind == MovementKind::Income),
        currency,
    );
    let expense = total_in(
        movements.iter().filter(|mv| mv.kind == MovementKind::Expense),
        currency,
    );
    PeriodTotals {
        income,
        expense,
        balance: income - expense,
        savings_rate: savings_rate(income, expense),
        movement_count: movements.len(),
    }
}

/// Compares the current window with the equal-length window before it.
///
/// Current totals use the movements inside `current_range` that pass
/// `filter`. Prior totals use every movement inside the prior window,
/// ignoring `filter`, so the baseline reflects overall history rather than
/// the slice currently on screen.
///
/// # Examples
///
/// ```
/// use finanzas_rs::engine::{MovementFilter, compare_to_prior_period};
/// use finanzas_rs::models::{Currency, DateRange, Movement, MovementId, MovementKind, NaiveDate};
///
/// let day = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap();
/// let movements = vec![
///     Movement::new(MovementId::from("jan"), MovementKind::Income, day(1, 10)).with_primary(1000.0),
///     Movement::new(MovementId::from("feb"), MovementKind::Income, day(2, 10)).with_primary(1200.0),
/// ];
/// let february = DateRange::new(day(2, 1), day(2, 29));
/// let cmp = compare_to_prior_period(&movements, &february, Currency::Ars, &MovementFilter::new());
/// assert!((cmp.income_comparison.variance_percent.unwrap() - 20.0).abs() < 1e-9);
/// ```
#[inline]
#[must_use]
pub fn compare_to_prior_period(
    all_movements: &[Movement],
    current_range: &DateRange,
    currency: Currency,
    filter: &MovementFilter,
) -> PriorPeriodComparison {
    let prior_range = current_range.preceding();

    let current_movements = filter.apply(&filter_by_range(all_movements, current_range));
    let prior_movements = filter_by_range(all_movements, &prior_range);

    let current = period_totals(&current_movements, currency);
    let prior = period_totals(&prior_movements, currency);

    tracing::debug!(
        current_range = %current_range,
        prior_range = %prior_range,
        current_income = current.income,
        prior_income = prior.income,
        "compared periods"
    );

    PriorPeriodComparison {
        current_range: *current_range,
        prior_range,
        current,
        prior,
        income_comparison: PeriodComparison::between(current.income, prior.income),
        expense_comparison: PeriodComparison::between(current.expense, prior.expense),
        balance_comparison: PeriodComparison::between(current.balance, prior.balance),
        savings_rate_comparison: RateComparison::between(current.savings_rate, prior.savings_rate),
    }
}
