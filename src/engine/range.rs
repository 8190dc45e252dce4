//! Range filter stage.

use crate::models::{DateRange, Movement};

/// Returns the movements dated inside `range`, bounds included.
///
/// Input order is preserved. An unset range selects nothing: callers
/// that forget to pick a window get an empty report rather than a report
/// over all history.
///
/// # Examples
///
/// ```
/// use finanzas_rs::engine::filter_by_range;
/// use finanzas_rs::models::{DateRange, Movement, MovementId, MovementKind, NaiveDate};
///
/// let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
/// let movements = vec![
///     Movement::new(MovementId::from("a"), MovementKind::Expense, day(1)),
///     Movement::new(MovementId::from("b"), MovementKind::Expense, day(20)),
/// ];
/// let selected = filter_by_range(&movements, &DateRange::new(day(1), day(10)));
/// assert_eq!(selected.len(), 1);
/// assert!(filter_by_range(&movements, &DateRange::unset()).is_empty());
/// ```
#[inline]
#[must_use]
pub fn filter_by_range(movements: &[Movement], range: &DateRange) -> Vec<Movement> {
    if !range.is_set() {
        tracing::debug!("date range unset, selecting no movements");
        return Vec::new();
    }
    movements
        .iter()
        .filter(|mv| range.contains(mv.date))
        .cloned()
        .collect()
}
