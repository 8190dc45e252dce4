//! Currency normalizer stage.
//!
//! Each movement records its ARS and USD amounts independently. This stage
//! picks the field matching the reporting currency; it never converts one
//! into the other.

use crate::models::{Currency, Movement};

/// Returns the amount of `movement` in `currency`.
///
/// For [`Currency::Ars`] this is `amount_primary`, falling back to the
/// legacy `amount` field. For [`Currency::Usd`] it is `amount_secondary`.
/// Missing amounts count as zero, so a movement without a USD figure adds
/// nothing to USD totals.
#[inline]
#[must_use]
pub fn amount_in(movement: &Movement, currency: Currency) -> f64 {
    match currency {
        Currency::Ars => movement
            .amount_primary
            .or(movement.amount)
            .unwrap_or(0.0_f64),
        Currency::Usd => movement.amount_secondary.unwrap_or(0.0_f64),
    }
}

/// Sums [`amount_in`] over `movements`.
#[inline]
#[must_use]
pub fn total_in<'mv, I>(movements: I, currency: Currency) -> f64
where
    I: IntoIterator<Item = &'mv Movement>,
{
    movements
        .into_iter()
        .map(|mv| amount_in(mv, currency))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MovementId, MovementKind, NaiveDate};

    fn base() -> Movement {
        Movement::new(
            MovementId::from("mv"),
            MovementKind::Expense,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn ars_reads_primary_amount() {
        let mv = base().with_primary(1500.0).with_secondary(1.5);
        assert!((amount_in(&mv, Currency::Ars) - 1500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ars_falls_back_to_legacy_amount() {
        let mut mv = base();
        mv.amount = Some(700.0);
        assert!((amount_in(&mv, Currency::Ars) - 700.0).abs() < f64::EPSILON);
    }

    #[test]
    fn primary_wins_over_legacy_amount() {
        let mut mv = base().with_primary(10.0);
        mv.amount = Some(999.0);
        assert!((amount_in(&mv, Currency::Ars) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn usd_reads_secondary_amount() {
        let mv = base().with_primary(1500.0).with_secondary(1.5);
        assert!((amount_in(&mv, Currency::Usd) - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn usd_without_secondary_is_zero_not_converted() {
        let mv = base().with_primary(100_000.0);
        assert!(amount_in(&mv, Currency::Usd).abs() < f64::EPSILON);
    }

    #[test]
    fn no_amounts_at_all_is_zero() {
        let mv = base();
        assert!(amount_in(&mv, Currency::Ars).abs() < f64::EPSILON);
        assert!(amount_in(&mv, Currency::Usd).abs() < f64::EPSILON);
    }

    #[test]
    fn total_sums_per_currency() {
        let movements = vec![
            base().with_primary(100.0).with_secondary(1.0),
            base().with_primary(50.0),
        ];
        assert!((total_in(&movements, Currency::Ars) - 150.0).abs() < 1e-9);
        assert!((total_in(&movements, Currency::Usd) - 1.0).abs() < 1e-9);
    }
}
