//! Textual export of derived structures.
//!
//! Builds [`comfy_table::Table`]s for each derived structure. The tables
//! carry no preset of their own: [`markdown_report`] renders them as
//! markdown, and the CLI renders the same tables with box-drawing borders.

use comfy_table::presets::ASCII_MARKDOWN;
use comfy_table::{Cell, CellAlignment, Table};

use crate::engine::{
    CategoryBreakdown, PeriodComparison, PeriodTotals, PriorPeriodComparison, ProjectionEstimate,
    Statistics,
};
use crate::models::Currency;

/// Placeholder for values that are undefined (no baseline, no income).
const UNDEFINED: &str = "n/a";

/// Formats an amount with two decimals.
#[inline]
#[must_use]
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Formats a percentage with one decimal.
#[inline]
#[must_use]
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.1}%")
}

/// Formats a relative variance with an explicit sign, or `n/a`.
#[inline]
#[must_use]
pub fn format_variance(variance: Option<f64>) -> String {
    variance.map_or_else(|| UNDEFINED.to_owned(), |pct| format!("{pct:+.1}%"))
}

/// Formats a percentage-point difference with an explicit sign.
#[inline]
#[must_use]
pub fn format_points(points: f64) -> String {
    format!("{points:+.1} pp")
}

/// Creates a table with a plain header row.
fn table_with_header(headers: &[&str]) -> Table {
    let mut table = Table::new();
    _ = table.set_header(headers.iter().map(|&title| Cell::new(title)).collect::<Vec<_>>());
    table
}

/// Right-aligned cell for numeric values.
fn number_cell(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Income, expense, balance and savings rate of one period.
#[inline]
#[must_use]
pub fn totals_table(totals: &PeriodTotals, currency: Currency) -> Table {
    let mut table = table_with_header(&["Concept", currency.code()]);
    let rows = [
        ("Income", format_amount(totals.income)),
        ("Expense", format_amount(totals.expense)),
        ("Balance", format_amount(totals.balance)),
        ("Savings rate", format_percent(totals.savings_rate)),
    ];
    for (label, value) in rows {
        _ = table.add_row(vec![Cell::new(label), number_cell(value)]);
    }
    table
}

/// The `top` largest categories plus an "Otros" row for the rest.
#[inline]
#[must_use]
pub fn categories_table(breakdown: &CategoryBreakdown, top: usize) -> Table {
    let mut table = table_with_header(&["Category", "ARS", "USD", "Share", "Movements"]);
    for agg in breakdown.top(top) {
        _ = table.add_row(vec![
            Cell::new(&agg.name),
            number_cell(format_amount(agg.total_primary)),
            number_cell(format_amount(agg.total_secondary)),
            number_cell(format_percent(agg.percentage_of_type_total)),
            number_cell(agg.count.to_string()),
        ]);
    }
    table
}

/// Current against prior period for income, expense, balance and
/// savings rate.
#[inline]
#[must_use]
pub fn comparison_table(comparison: &PriorPeriodComparison) -> Table {
    let mut table = table_with_header(&["Concept", "Current", "Prior", "Change"]);
    let amounts: [(&str, &PeriodComparison); 3] = [
        ("Income", &comparison.income_comparison),
        ("Expense", &comparison.expense_comparison),
        ("Balance", &comparison.balance_comparison),
    ];
    for (label, cmp) in amounts {
        _ = table.add_row(vec![
            Cell::new(label),
            number_cell(format_amount(cmp.current_total)),
            number_cell(format_amount(cmp.prior_total)),
            number_cell(format_variance(cmp.variance_percent)),
        ]);
    }
    let rate = &comparison.savings_rate_comparison;
    _ = table.add_row(vec![
        Cell::new("Savings rate"),
        number_cell(format_percent(rate.current_rate)),
        number_cell(format_percent(rate.prior_rate)),
        number_cell(format_points(rate.point_difference)),
    ]);
    table
}

/// Components of the next-period projection.
#[inline]
#[must_use]
pub fn projection_table(projection: &ProjectionEstimate) -> Table {
    let mut table = table_with_header(&["Concept", "Amount"]);
    let rows = [
        ("Recurring income", format_amount(projection.recurring_income)),
        (
            "Committed installments",
            format_amount(projection.committed_installments),
        ),
        (
            "Baseline expense",
            format_amount(projection.baseline_recurring_expense),
        ),
        ("Available margin", format_amount(projection.available_margin)),
        (
            "Margin of income",
            projection
                .margin_percent_of_income
                .map_or_else(|| UNDEFINED.to_owned(), format_percent),
        ),
    ];
    for (label, value) in rows {
        _ = table.add_row(vec![Cell::new(label), number_cell(value)]);
    }
    table
}

/// Renders `table` as a markdown table.
fn as_markdown(mut table: Table) -> String {
    _ = table.load_preset(ASCII_MARKDOWN).force_no_tty();
    table.to_string()
}

/// Renders a full statistics pass as a markdown document.
///
/// Category sections show the `top` largest categories and fold the rest
/// into "Otros".
#[inline]
#[must_use]
pub fn markdown_report(stats: &Statistics, top: usize) -> String {
    let projection = &stats.projection;
    let sections = [
        format!("# Report {} ({})", stats.range, stats.currency),
        format!(
            "## Summary\n\n{}",
            as_markdown(totals_table(&stats.totals, stats.currency))
        ),
        format!(
            "## Income by category\n\n{}",
            as_markdown(categories_table(&stats.income, top))
        ),
        format!(
            "## Expenses by category\n\n{}",
            as_markdown(categories_table(&stats.expense, top))
        ),
        format!(
            "## Compared with {}\n\n{}",
            stats.comparison.prior_range,
            as_markdown(comparison_table(&stats.comparison))
        ),
        format!(
            "## Next period projection\n\n{}\n\nRecurring income basis: {}.",
            as_markdown(projection_table(projection)),
            projection.income_basis.describe()
        ),
    ];
    let mut report = sections.join("\n\n");
    report.push('\n');
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{MovementFilter, compute_statistics};
    use crate::models::{DateRange, Movement, MovementId, MovementKind, NaiveDate};

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn stats() -> Statistics {
        let movements = vec![
            Movement::new(MovementId::from("1"), MovementKind::Income, day(2, 5))
                .with_category("Salary")
                .with_primary(1000.0),
            Movement::new(MovementId::from("2"), MovementKind::Expense, day(2, 6))
                .with_category("Rent")
                .with_primary(600.0),
            Movement::new(MovementId::from("3"), MovementKind::Expense, day(2, 7))
                .with_category("Food")
                .with_primary(300.0),
            Movement::new(MovementId::from("4"), MovementKind::Expense, day(2, 8))
                .with_category("Taxi")
                .with_primary(100.0),
        ];
        compute_statistics(
            &movements,
            &DateRange::new(day(2, 1), day(2, 29)),
            Currency::Ars,
            &MovementFilter::new(),
        )
    }

    #[test]
    fn formatting_helpers() {
        assert_eq!(format_amount(1234.5), "1234.50");
        assert_eq!(format_percent(12.345), "12.3%");
        assert_eq!(format_variance(Some(20.0)), "+20.0%");
        assert_eq!(format_variance(Some(-5.0)), "-5.0%");
        assert_eq!(format_variance(None), "n/a");
        assert_eq!(format_points(10.0), "+10.0 pp");
    }

    #[test]
    fn markdown_report_has_every_section() {
        let report = markdown_report(&stats(), 5);
        assert!(report.starts_with("# Report 2024-02-01 .. 2024-02-29 (ARS)"));
        for heading in [
            "## Summary",
            "## Income by category",
            "## Expenses by category",
            "## Compared with 2024-01-03 .. 2024-01-31",
            "## Next period projection",
        ] {
            assert!(report.contains(heading), "missing {heading}");
        }
        assert!(report.contains("Salary"));
        assert!(report.contains("1000.00"));
        assert!(report.contains('|'));
    }

    #[test]
    fn markdown_report_marks_missing_baseline() {
        let report = markdown_report(&stats(), 5);
        assert!(report.contains("n/a"));
        assert!(report.contains("largest income category"));
    }

    #[test]
    fn categories_table_folds_remainder() {
        let rendered = as_markdown(categories_table(&stats().expense, 1));
        assert!(rendered.contains("Rent"));
        assert!(rendered.contains("Otros"));
        assert!(!rendered.contains("Taxi"));
        assert!(rendered.contains("40.0%"));
    }

    #[test]
    fn projection_table_shows_negative_margin() {
        let projection = ProjectionEstimate {
            recurring_income: 1000.0,
            committed_installments: 200.0,
            baseline_recurring_expense: 900.0,
            available_margin: -100.0,
            margin_percent_of_income: Some(-10.0),
            income_basis: crate::engine::IncomeBasis::RepeatedCategories,
            recurring_categories: vec!["Salary".to_owned()],
        };
        let rendered = as_markdown(projection_table(&projection));
        assert!(rendered.contains("-100.00"));
        assert!(rendered.contains("-10.0%"));
    }
}
