//! High-level facade tying a [`MovementSource`] to the engine.
//!
//! Each call loads the history from the source once and runs the pure
//! stages from [`crate::engine`] over it. The facade holds no derived
//! state: changing the range, currency or filters simply means calling
//! again.

use crate::engine::{
    CategoryBreakdown, MovementFilter, PriorPeriodComparison, ProjectionEstimate, Statistics,
    breakdown_by_category, compare_to_prior_period, compute_statistics, filter_by_range,
    project_from_history,
};
use crate::error::{FinanzasError, Result};
use crate::models::{AccountName, Currency, DateRange, Movement, MovementKind};
use crate::source::MovementSource;

/// Builder for [`Dashboard`].
#[derive(Debug)]
pub struct DashboardBuilder<S: MovementSource> {
    /// Movement source.
    source: Option<S>,
    /// Reporting currency.
    currency: Currency,
    /// Display filters.
    filter: MovementFilter,
}

impl<S: MovementSource> DashboardBuilder<S> {
    /// Sets the movement source.
    #[inline]
    #[must_use]
    pub fn source(mut self, source: S) -> Self {
        self.source = Some(source);
        self
    }

    /// Sets the reporting currency (default: ARS).
    #[inline]
    #[must_use]
    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Sets the display filters (default: none).
    #[inline]
    #[must_use]
    pub fn filter(mut self, filter: MovementFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Builds the dashboard.
    ///
    /// # Errors
    ///
    /// Returns [`FinanzasError::Source`] if no source was provided.
    #[inline]
    pub fn build(self) -> Result<Dashboard<S>> {
        let source = self
            .source
            .ok_or_else(|| FinanzasError::Source("movement source is required".into()))?;
        Ok(Dashboard {
            source,
            currency: self.currency,
            filter: self.filter,
        })
    }
}

/// Statistics dashboard over a movement source.
///
/// # Examples
///
/// ```
/// use finanzas_rs::dashboard::Dashboard;
/// use finanzas_rs::models::{Currency, DateRange, Movement, MovementId, MovementKind, NaiveDate};
/// use finanzas_rs::source::InMemorySource;
///
/// let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
/// let source = InMemorySource::with_movements(vec![
///     Movement::new(MovementId::from("1"), MovementKind::Income, day(5))
///         .with_category("Salary")
///         .with_primary(1000.0),
/// ]);
/// let dashboard = Dashboard::builder()
///     .source(source)
///     .currency(Currency::Ars)
///     .build()
///     .unwrap();
/// let income = dashboard
///     .categories(&DateRange::new(day(1), day(31)), MovementKind::Income)
///     .unwrap();
/// assert_eq!(income.categories[0].name, "Salary");
/// ```
#[derive(Debug)]
pub struct Dashboard<S: MovementSource> {
    /// Movement source.
    source: S,
    /// Reporting currency.
    currency: Currency,
    /// Display filters.
    filter: MovementFilter,
}

impl<S: MovementSource> Dashboard<S> {
    /// Creates a new builder for configuring the dashboard.
    #[inline]
    #[must_use]
    pub fn builder() -> DashboardBuilder<S> {
        DashboardBuilder {
            source: None,
            currency: Currency::default(),
            filter: MovementFilter::new(),
        }
    }

    /// Returns the reporting currency.
    #[inline]
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the display filters.
    #[inline]
    #[must_use]
    pub const fn filter(&self) -> &MovementFilter {
        &self.filter
    }

    /// Replaces the display filters, keeping source and currency.
    #[inline]
    #[must_use]
    pub fn with_filter(mut self, filter: MovementFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Returns the underlying source.
    #[inline]
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Returns the movements inside `range` that pass the display filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails to load.
    #[tracing::instrument(skip_all, fields(range = %range))]
    #[inline]
    pub fn movements(&self, range: &DateRange) -> Result<Vec<Movement>> {
        let all = self.source.movements()?;
        Ok(self.filter.apply(&filter_by_range(&all, range)))
    }

    /// Returns the category breakdown of `kind` inside `range`.
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails to load.
    #[inline]
    pub fn categories(&self, range: &DateRange, kind: MovementKind) -> Result<CategoryBreakdown> {
        let selected = self.movements(range)?;
        Ok(breakdown_by_category(&selected, kind, self.currency))
    }

    /// Compares `range` with the equal-length window before it.
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails to load.
    #[tracing::instrument(skip_all, fields(range = %range))]
    #[inline]
    pub fn compare(&self, range: &DateRange) -> Result<PriorPeriodComparison> {
        let all = self.source.movements()?;
        Ok(compare_to_prior_period(&all, range, self.currency, &self.filter))
    }

    /// Projects the equal-length window after `range`.
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails to load.
    #[tracing::instrument(skip_all, fields(range = %range))]
    #[inline]
    pub fn project(&self, range: &DateRange) -> Result<ProjectionEstimate> {
        let all = self.source.movements()?;
        Ok(project_from_history(&all, range, self.currency))
    }

    /// Runs every stage for `range`.
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails to load.
    #[tracing::instrument(skip_all, fields(range = %range, currency = %self.currency))]
    #[inline]
    pub fn statistics(&self, range: &DateRange) -> Result<Statistics> {
        let all = self.source.movements()?;
        tracing::debug!(movements = all.len(), "computing statistics");
        Ok(compute_statistics(&all, range, self.currency, &self.filter))
    }

    /// Returns every account name seen in the history, sorted and
    /// deduplicated.
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails to load.
    #[inline]
    pub fn accounts(&self) -> Result<Vec<AccountName>> {
        let all = self.source.movements()?;
        let mut names: Vec<AccountName> = all
            .into_iter()
            .flat_map(|mv| [mv.account, mv.destination_account])
            .flatten()
            .collect();
        names.sort();
        names.dedup();
        Ok(names)
    }
}
