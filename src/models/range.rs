//! Inclusive calendar date windows.

use chrono::{Datelike as _, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// An inclusive `[from, to]` calendar window.
///
/// Either bound may be absent, in which case the range is *unset* and
/// selects no movements at all. `to >= from` is the caller's
/// responsibility and is not re-validated here.
///
/// # Examples
///
/// ```
/// use finanzas_rs::models::{DateRange, NaiveDate};
///
/// let january = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
/// );
/// let december = january.preceding();
/// assert_eq!(december.from, NaiveDate::from_ymd_opt(2023, 12, 1));
/// assert_eq!(december.to, NaiveDate::from_ymd_opt(2023, 12, 31));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the window (inclusive).
    pub from: Option<NaiveDate>,
    /// Last day of the window (inclusive).
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Creates a window with both bounds set.
    #[inline]
    #[must_use]
    pub const fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    /// Creates a window with neither bound set.
    #[inline]
    #[must_use]
    pub const fn unset() -> Self {
        Self {
            from: None,
            to: None,
        }
    }

    /// Returns both bounds, or `None` if either is missing.
    #[inline]
    #[must_use]
    pub const fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.from, self.to) {
            (Some(from), Some(to)) => Some((from, to)),
            (Some(_) | None, None) | (None, Some(_)) => None,
        }
    }

    /// Returns `true` when both bounds are present.
    #[inline]
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.bounds().is_some()
    }

    /// Returns `true` if `date` lies inside the window, bounds included.
    ///
    /// An unset window contains nothing.
    #[inline]
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.bounds()
            .is_some_and(|(from, to)| from <= date && date <= to)
    }

    /// Number of days covered, counting both bounds.
    #[inline]
    #[must_use]
    pub fn length_in_days(&self) -> Option<i64> {
        self.bounds()
            .map(|(from, to)| to.signed_duration_since(from).num_days() + 1)
    }

    /// Returns the window of equal length that ends the day before `from`.
    ///
    /// The result is unset when this window is unset or the arithmetic
    /// leaves chrono's supported date range.
    #[inline]
    #[must_use]
    pub fn preceding(&self) -> Self {
        self.span()
            .and_then(|(from, days)| {
                let prior_to = from.pred_opt()?;
                let prior_from = from.checked_sub_days(Days::new(days.checked_add(1)?))?;
                Some(Self::new(prior_from, prior_to))
            })
            .unwrap_or_default()
    }

    /// Returns the window of equal length that starts the day after `to`.
    #[inline]
    #[must_use]
    pub fn following(&self) -> Self {
        self.bounds()
            .and_then(|(from, to)| {
                let days = u64::try_from(to.signed_duration_since(from).num_days()).ok()?;
                let next_from = to.succ_opt()?;
                let next_to = to.checked_add_days(Days::new(days.checked_add(1)?))?;
                Some(Self::new(next_from, next_to))
            })
            .unwrap_or_default()
    }

    /// Returns the calendar month containing `date`.
    #[inline]
    #[must_use]
    pub fn month_of(date: NaiveDate) -> Self {
        first_of_month(date)
            .zip(last_of_month(date))
            .map_or_else(Self::unset, |(first, last)| Self::new(first, last))
    }

    /// Returns `from` and `to - from` in whole days.
    fn span(&self) -> Option<(NaiveDate, u64)> {
        let (from, to) = self.bounds()?;
        let days = u64::try_from(to.signed_duration_since(from).num_days()).ok()?;
        Some((from, days))
    }
}

impl core::fmt::Display for DateRange {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.bounds() {
            Some((from, to)) => write!(f, "{from} .. {to}"),
            None => f.write_str("(unset)"),
        }
    }
}

/// First day of the month containing `date`.
fn first_of_month(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(1)
}

/// Last day of the month containing `date`.
fn last_of_month(date: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = if date.month() == 12 {
        (date.year().checked_add(1)?, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)?.pred_opt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn contains_is_inclusive_on_both_ends() {
        let range = DateRange::new(day(2024, 1, 1), day(2024, 1, 31));
        assert!(range.contains(day(2024, 1, 1)));
        assert!(range.contains(day(2024, 1, 31)));
        assert!(range.contains(day(2024, 1, 15)));
        assert!(!range.contains(day(2023, 12, 31)));
        assert!(!range.contains(day(2024, 2, 1)));
    }

    #[test]
    fn unset_range_contains_nothing() {
        let half = DateRange {
            from: Some(day(2024, 1, 1)),
            to: None,
        };
        assert!(!half.is_set());
        assert!(!half.contains(day(2024, 1, 1)));
        assert!(!DateRange::unset().contains(day(2024, 1, 1)));
        assert!(DateRange::unset().length_in_days().is_none());
    }

    #[test]
    fn length_counts_both_bounds() {
        let single = DateRange::new(day(2024, 3, 10), day(2024, 3, 10));
        assert_eq!(single.length_in_days(), Some(1));
        let leap_feb = DateRange::new(day(2024, 2, 1), day(2024, 2, 29));
        assert_eq!(leap_feb.length_in_days(), Some(29));
    }

    #[test]
    fn preceding_is_contiguous_and_equal_length() {
        let ranges = [
            DateRange::new(day(2024, 1, 1), day(2024, 1, 31)),
            DateRange::new(day(2024, 3, 1), day(2024, 3, 31)),
            DateRange::new(day(2024, 6, 15), day(2024, 6, 15)),
            DateRange::new(day(2023, 1, 1), day(2023, 12, 31)),
        ];
        for range in ranges {
            let prior = range.preceding();
            assert_eq!(prior.length_in_days(), range.length_in_days());
            assert_eq!(prior.to.unwrap().succ_opt(), range.from);
            assert!(prior.to.unwrap() < range.from.unwrap());
        }
    }

    #[test]
    fn preceding_of_january_is_december() {
        let prior = DateRange::new(day(2024, 1, 1), day(2024, 1, 31)).preceding();
        assert_eq!(prior, DateRange::new(day(2023, 12, 1), day(2023, 12, 31)));
    }

    #[test]
    fn preceding_of_unset_is_unset() {
        assert!(!DateRange::unset().preceding().is_set());
    }

    #[test]
    fn following_is_contiguous_and_equal_length() {
        let range = DateRange::new(day(2024, 1, 1), day(2024, 1, 10));
        let next = range.following();
        assert_eq!(next, DateRange::new(day(2024, 1, 11), day(2024, 1, 20)));
        let quarter = DateRange::new(day(2024, 1, 1), day(2024, 3, 31));
        assert_eq!(
            quarter.following(),
            DateRange::new(day(2024, 4, 1), day(2024, 6, 30))
        );
        assert!(!DateRange::unset().following().is_set());
    }

    #[test]
    fn month_of_handles_december_and_leap_years() {
        assert_eq!(
            DateRange::month_of(day(2023, 12, 25)),
            DateRange::new(day(2023, 12, 1), day(2023, 12, 31))
        );
        assert_eq!(
            DateRange::month_of(day(2024, 2, 10)),
            DateRange::new(day(2024, 2, 1), day(2024, 2, 29))
        );
    }

    #[test]
    fn display_formats_bounds() {
        let range = DateRange::new(day(2024, 1, 1), day(2024, 1, 31));
        assert_eq!(range.to_string(), "2024-01-01 .. 2024-01-31");
        assert_eq!(DateRange::unset().to_string(), "(unset)");
    }
}
