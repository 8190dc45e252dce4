//! Category aggregator stage.
//!
//! Groups movements of one kind by category, using an emoji-stripped form
//! of the label as the grouping key so that `"🍔 Food"` and `"Food"` land
//! in the same bucket.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::currency::amount_in;
use crate::models::{Currency, Movement, MovementKind};

/// Label used for movements whose category is empty or absent.
pub const UNCATEGORIZED_LABEL: &str = "Sin categoría";

/// Label of the synthetic bucket produced by [`CategoryBreakdown::top`].
pub const OTHERS_LABEL: &str = "Otros";

/// Totals for one category within one movement kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAggregate {
    /// Display label: the first label variant encountered for this key.
    pub name: String,
    /// Canonical grouping key (label without leading pictographs).
    pub key: String,
    /// Sum of ARS amounts.
    pub total_primary: f64,
    /// Sum of USD amounts.
    pub total_secondary: f64,
    /// Share of the kind's total in the breakdown currency, `0..=100`.
    pub percentage_of_type_total: f64,
    /// Number of movements folded into this aggregate.
    pub count: usize,
}

impl CategoryAggregate {
    /// Creates an empty aggregate for `key` displayed as `name`.
    fn empty(name: String, key: String) -> Self {
        Self {
            name,
            key,
            total_primary: 0.0_f64,
            total_secondary: 0.0_f64,
            percentage_of_type_total: 0.0_f64,
            count: 0,
        }
    }

    /// Returns the total in `currency`.
    #[inline]
    #[must_use]
    pub const fn total_in(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Ars => self.total_primary,
            Currency::Usd => self.total_secondary,
        }
    }
}

/// Every category of one kind, ranked, with the kind's full totals.
///
/// Percentages are always relative to the full totals, so truncating the
/// list with [`CategoryBreakdown::top`] never changes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    /// Movement kind that was aggregated.
    pub kind: MovementKind,
    /// Currency used for ranking and percentages.
    pub currency: Currency,
    /// Sum of ARS amounts over all categories.
    pub total_primary: f64,
    /// Sum of USD amounts over all categories.
    pub total_secondary: f64,
    /// Categories sorted by descending total in `currency`.
    pub categories: Vec<CategoryAggregate>,
}

impl CategoryBreakdown {
    /// Returns the kind's total in the breakdown currency.
    #[inline]
    #[must_use]
    pub const fn total(&self) -> f64 {
        match self.currency {
            Currency::Ars => self.total_primary,
            Currency::Usd => self.total_secondary,
        }
    }

    /// Returns `true` when no movement of the kind was found.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Looks up a category by label, matching on its canonical key.
    #[inline]
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&CategoryAggregate> {
        let key = canonical_category(Some(label));
        self.categories.iter().find(|agg| agg.key == key)
    }

    /// Returns the largest category, if any.
    #[inline]
    #[must_use]
    pub fn largest(&self) -> Option<&CategoryAggregate> {
        self.categories.first()
    }

    /// Returns the `n` largest categories followed by an [`OTHERS_LABEL`]
    /// bucket holding the sum of the rest.
    ///
    /// The bucket is only appended when something was actually cut off. A
    /// real category keyed [`OTHERS_LABEL`] never takes one of the `n`
    /// slots; it is folded into the bucket so no two rows share a name.
    #[inline]
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<CategoryAggregate> {
        let mut head: Vec<CategoryAggregate> = Vec::new();
        let mut rest: Vec<&CategoryAggregate> = Vec::new();
        for agg in &self.categories {
            if head.len() < n && agg.key != OTHERS_LABEL {
                head.push(agg.clone());
            } else {
                rest.push(agg);
            }
        }
        if rest.is_empty() {
            return head;
        }
        let mut others = CategoryAggregate::empty(OTHERS_LABEL.to_owned(), OTHERS_LABEL.to_owned());
        for agg in rest {
            others.total_primary += agg.total_primary;
            others.total_secondary += agg.total_secondary;
            others.percentage_of_type_total += agg.percentage_of_type_total;
            others.count += agg.count;
        }
        head.push(others);
        head
    }
}

/// Aggregates movements of `kind` by category.
///
/// Shorthand for [`breakdown_by_category`] when only the ranked list is
/// needed. Zero matching movements yield an empty list.
///
/// # Examples
///
/// ```
/// use finanzas_rs::engine::aggregate_by_category;
/// use finanzas_rs::models::{Currency, Movement, MovementId, MovementKind, NaiveDate};
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
/// let movements = vec![
///     Movement::new(MovementId::from("a"), MovementKind::Expense, date)
///         .with_category("🍔 Food")
///         .with_primary(300.0),
///     Movement::new(MovementId::from("b"), MovementKind::Expense, date)
///         .with_category("Food")
///         .with_primary(100.0),
/// ];
/// let aggregates = aggregate_by_category(&movements, MovementKind::Expense, Currency::Ars);
/// assert_eq!(aggregates.len(), 1);
/// assert_eq!(aggregates[0].name, "🍔 Food");
/// assert!((aggregates[0].total_primary - 400.0).abs() < 1e-9);
/// ```
#[inline]
#[must_use]
pub fn aggregate_by_category(
    movements: &[Movement],
    kind: MovementKind,
    currency: Currency,
) -> Vec<CategoryAggregate> {
    breakdown_by_category(movements, kind, currency).categories
}

/// Groups movements of `kind` by canonical category and ranks them.
///
/// Categories are sorted by descending total in `currency`; ties keep the
/// order in which each category was first seen. Each aggregate's
/// percentage is its share of the kind's total, or `0` when that total is
/// zero.
#[inline]
#[must_use]
pub fn breakdown_by_category(
    movements: &[Movement],
    kind: MovementKind,
    currency: Currency,
) -> CategoryBreakdown {
    let mut categories: Vec<CategoryAggregate> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for mv in movements.iter().filter(|mv| mv.kind == kind) {
        let key = canonical_category(mv.category.as_deref());
        let slot = match index.get(&key) {
            Some(&existing) => existing,
            None => {
                let fresh = categories.len();
                categories.push(CategoryAggregate::empty(
                    display_label(mv.category.as_deref()),
                    key.clone(),
                ));
                let _previous = index.insert(key, fresh);
                fresh
            }
        };
        if let Some(agg) = categories.get_mut(slot) {
            agg.total_primary += amount_in(mv, Currency::Ars);
            agg.total_secondary += amount_in(mv, Currency::Usd);
            agg.count += 1;
        }
    }

    let total_primary: f64 = categories.iter().map(|agg| agg.total_primary).sum();
    let total_secondary: f64 = categories.iter().map(|agg| agg.total_secondary).sum();
    let type_total = match currency {
        Currency::Ars => total_primary,
        Currency::Usd => total_secondary,
    };

    for agg in &mut categories {
        agg.percentage_of_type_total = share_of(agg.total_in(currency), type_total);
    }
    // `sort_by` is stable, so equal totals keep first-seen order.
    categories.sort_by(|a, b| b.total_in(currency).total_cmp(&a.total_in(currency)));

    tracing::trace!(
        kind = %kind,
        currency = %currency,
        categories = categories.len(),
        total = type_total,
        "aggregated categories"
    );

    CategoryBreakdown {
        kind,
        currency,
        total_primary,
        total_secondary,
        categories,
    }
}

/// Returns the grouping key for a category label.
///
/// Leading emoji (including modifiers, joiners and variation selectors) and
/// surrounding whitespace are removed. Empty or absent labels map to
/// [`UNCATEGORIZED_LABEL`]; a label made only of emoji is kept as-is.
#[inline]
#[must_use]
pub fn canonical_category(label: Option<&str>) -> String {
    let trimmed = label.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return UNCATEGORIZED_LABEL.to_owned();
    }
    let stripped = trimmed
        .trim_start_matches(|ch: char| is_pictographic(ch) || ch.is_whitespace())
        .trim_end();
    if stripped.is_empty() {
        trimmed.to_owned()
    } else {
        stripped.to_owned()
    }
}

/// Returns the label shown for a category.
fn display_label(label: Option<&str>) -> String {
    match label.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => trimmed.to_owned(),
        Some(_) | None => UNCATEGORIZED_LABEL.to_owned(),
    }
}

/// Percentage of `part` in `whole`, `0` when `whole` is zero.
fn share_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0_f64 {
        0.0_f64
    } else {
        part / whole * 100.0_f64
    }
}

/// Returns `true` for emoji and the code points that glue them together.
const fn is_pictographic(ch: char) -> bool {
    matches!(
        ch,
        '\u{00A9}'
            | '\u{00AE}'
            | '\u{200D}'
            | '\u{203C}'
            | '\u{2049}'
            | '\u{20E3}'
            | '\u{2122}'
            | '\u{2139}'
            | '\u{2194}'..='\u{21AA}'
            | '\u{231A}'..='\u{23FF}'
            | '\u{24C2}'
            | '\u{25AA}'..='\u{25FE}'
            | '\u{2600}'..='\u{27BF}'
            | '\u{2934}'..='\u{2935}'
            | '\u{2B05}'..='\u{2B55}'
            | '\u{3030}'
            | '\u{303D}'
            | '\u{3297}'
            | '\u{3299}'
            | '\u{FE0E}'..='\u{FE0F}'
            | '\u{1F000}'..='\u{1FAFF}'
            | '\u{1FC00}'..='\u{1FFFD}'
            | '\u{E0020}'..='\u{E007F}'
    )
}
