//! Movement model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{AccountName, InstallmentId, MovementId, MovementKind};

/// A single recorded financial event.
///
/// Amounts are stored independently per currency: `amount_primary` in the
/// accounts' native ARS and `amount_secondary` in USD. Older records carry a
/// single `amount` field instead of `amount_primary`; both shapes are read.
///
/// Amounts are non-negative magnitudes. Whether they add or subtract is
/// decided by [`MovementKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    /// Unique identifier.
    pub id: MovementId,
    /// Income, expense or transfer.
    pub kind: MovementKind,
    /// Calendar date (day granularity).
    pub date: NaiveDate,
    /// Free-text category label (incomes and expenses only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Amount in ARS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_primary: Option<f64>,
    /// Legacy single-amount field (ARS), superseded by `amount_primary`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Independently recorded amount in USD.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_secondary: Option<f64>,
    /// Account the movement is posted against (source account for
    /// transfers).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<AccountName>,
    /// Destination account (transfers only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_account: Option<AccountName>,
    /// Purchase identifier shared by sibling installments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installment_id: Option<InstallmentId>,
    /// User note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Movement {
    /// Creates a movement with no category, amounts or account set.
    #[inline]
    #[must_use]
    pub const fn new(id: MovementId, kind: MovementKind, date: NaiveDate) -> Self {
        Self {
            id,
            kind,
            date,
            category: None,
            amount_primary: None,
            amount: None,
            amount_secondary: None,
            account: None,
            destination_account: None,
            installment_id: None,
            description: None,
        }
    }

    /// Sets the category label.
    #[inline]
    #[must_use]
    pub fn with_category<T: Into<String>>(mut self, category: T) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the ARS amount.
    #[inline]
    #[must_use]
    pub const fn with_primary(mut self, amount: f64) -> Self {
        self.amount_primary = Some(amount);
        self
    }

    /// Sets the USD amount.
    #[inline]
    #[must_use]
    pub const fn with_secondary(mut self, amount: f64) -> Self {
        self.amount_secondary = Some(amount);
        self
    }

    /// Sets the account.
    #[inline]
    #[must_use]
    pub fn with_account<T: Into<AccountName>>(mut self, account: T) -> Self {
        self.account = Some(account.into());
        self
    }

    /// Marks the movement as one installment of a financed purchase.
    #[inline]
    #[must_use]
    pub fn with_installment<T: Into<InstallmentId>>(mut self, id: T) -> Self {
        self.installment_id = Some(id.into());
        self
    }

    /// Returns `true` for income movements.
    #[inline]
    #[must_use]
    pub const fn is_income(&self) -> bool {
        matches!(self.kind, MovementKind::Income)
    }

    /// Returns `true` for expense movements.
    #[inline]
    #[must_use]
    pub const fn is_expense(&self) -> bool {
        matches!(self.kind, MovementKind::Expense)
    }

    /// Returns `true` if the movement belongs to a financed purchase.
    #[inline]
    #[must_use]
    pub const fn is_installment(&self) -> bool {
        self.installment_id.is_some()
    }
}
