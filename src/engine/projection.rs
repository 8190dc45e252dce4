//! Projection engine stage.
//!
//! Estimates how much room the next period leaves once recurring income,
//! already-scheduled installments and ordinary spending are accounted for.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::category::{breakdown_by_category, canonical_category};
use super::currency::{amount_in, total_in};
use super::range::filter_by_range;
use crate::models::{Currency, DateRange, Movement, MovementKind};

/// How the recurring income figure was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IncomeBasis {
    /// Income categories present in both the current and prior period.
    RepeatedCategories,
    /// No prior income existed; the largest current income category was
    /// taken as the primary source.
    LargestCategory,
    /// No income in the current period.
    NoIncome,
}

impl IncomeBasis {
    /// Returns a short human-readable description.
    #[inline]
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::RepeatedCategories => "categories repeated from the prior period",
            Self::LargestCategory => "largest income category (no prior income)",
            Self::NoIncome => "no income in the period",
        }
    }
}

/// Forward-looking estimate of the next period's free margin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionEstimate {
    /// Income expected to repeat next period.
    pub recurring_income: f64,
    /// Installments already scheduled inside the next period.
    pub committed_installments: f64,
    /// Current-period spending with financed purchases backed out.
    pub baseline_recurring_expense: f64,
    /// `recurring_income - committed_installments - baseline_recurring_expense`.
    /// May be negative.
    pub available_margin: f64,
    /// Margin as a percentage of recurring income; `None` without income.
    pub margin_percent_of_income: Option<f64>,
    /// How `recurring_income` was derived.
    pub income_basis: IncomeBasis,
    /// Display labels of the income categories counted as recurring.
    pub recurring_categories: Vec<String>,
}

/// Projects the next period's available margin.
///
/// * `current_period` – movements of the period being reported on.
/// * `all_movements` – full history, used to find the period before it.
/// * `next_period_committed` – movements dated in the next period, which
///   should span as many days as `current_range`; only expenses carrying
///   an installment id count as committed.
/// * `current_range` – window of `current_period`.
///
/// Recurring income is the current income of every category that also
/// received income in the immediately preceding window. When that window
/// has no income at all, the single largest current income category is
/// used instead.
#[inline]
#[must_use]
pub fn project_next_period(
    current_period: &[Movement],
    all_movements: &[Movement],
    next_period_committed: &[Movement],
    current_range: &DateRange,
    currency: Currency,
) -> ProjectionEstimate {
    let prior_period = filter_by_range(all_movements, &current_range.preceding());
    let prior_income_keys: HashSet<String> = prior_period
        .iter()
        .filter(|mv| mv.kind == MovementKind::Income)
        .map(|mv| canonical_category(mv.category.as_deref()))
        .collect();

    let incomes = breakdown_by_category(current_period, MovementKind::Income, currency);
    let (income_basis, recurring): (IncomeBasis, Vec<&str>) = if incomes.is_empty() {
        (IncomeBasis::NoIncome, Vec::new())
    } else if prior_income_keys.is_empty() {
        (
            IncomeBasis::LargestCategory,
            incomes.largest().map(|agg| agg.key.as_str()).into_iter().collect(),
        )
    } else {
        (
            IncomeBasis::RepeatedCategories,
            incomes
                .categories
                .iter()
                .filter(|agg| prior_income_keys.contains(&agg.key))
                .map(|agg| agg.key.as_str())
                .collect(),
        )
    };

    let recurring_aggregates: Vec<_> = incomes
        .categories
        .iter()
        .filter(|agg| recurring.contains(&agg.key.as_str()))
        .collect();
    let recurring_income: f64 = recurring_aggregates
        .iter()
        .map(|agg| agg.total_in(currency))
        .sum();

    let committed_installments = total_in(
        next_period_committed
            .iter()
            .filter(|mv| mv.is_expense() && mv.is_installment()),
        currency,
    );

    // Sum of non-installment expenses, i.e. total expenses minus the
    // installment-tagged ones, which never drops below zero.
    let baseline_recurring_expense: f64 = current_period
        .iter()
        .filter(|mv| mv.is_expense() && !mv.is_installment())
        .map(|mv| amount_in(mv, currency))
        .sum();

    let available_margin = recurring_income - committed_installments - baseline_recurring_expense;
    let margin_percent_of_income =
        (recurring_income > 0.0_f64).then(|| available_margin / recurring_income * 100.0_f64);

    tracing::debug!(
        basis = income_basis.describe(),
        recurring_income,
        committed_installments,
        baseline_recurring_expense,
        available_margin,
        "projected next period"
    );

    ProjectionEstimate {
        recurring_income,
        committed_installments,
        baseline_recurring_expense,
        available_margin,
        margin_percent_of_income,
        income_basis,
        recurring_categories: recurring_aggregates
            .into_iter()
            .map(|agg| agg.name.clone())
            .collect(),
    }
}

/// Slices `all_movements` around `current_range` and projects the window
/// that follows it.
///
/// The next period is [`DateRange::following`]: same length as
/// `current_range`, starting the day after it ends. Income, baseline
/// expense and committed installments therefore cover equal spans, just
/// as the comparator's prior window does.
#[inline]
#[must_use]
pub fn project_from_history(
    all_movements: &[Movement],
    current_range: &DateRange,
    currency: Currency,
) -> ProjectionEstimate {
    let current_period = filter_by_range(all_movements, current_range);
    let next_period = filter_by_range(all_movements, &current_range.following());
    project_next_period(
        &current_period,
        all_movements,
        &next_period,
        current_range,
        currency,
    )
}
