//! Enumeration types for constrained values.

use serde::{Deserialize, Serialize};

use crate::error::FinanzasError;

/// Kind of a financial movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MovementKind {
    /// Money coming in.
    Income,
    /// Money going out.
    Expense,
    /// Money moved between two of the user's own accounts.
    Transfer,
}

impl MovementKind {
    /// Returns the lowercase name used in JSON and on the command line.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Transfer => "transfer",
        }
    }
}

impl core::fmt::Display for MovementKind {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for MovementKind {
    type Err = FinanzasError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            "transfer" => Ok(Self::Transfer),
            other => Err(FinanzasError::Config(format!(
                "unknown movement kind `{other}` (expected income, expense or transfer)"
            ))),
        }
    }
}

/// Reporting currency.
///
/// Every movement carries an amount per currency recorded independently;
/// there is no exchange rate between them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// Argentine peso, the accounts' native currency.
    #[default]
    #[serde(rename = "ARS")]
    Ars,
    /// US dollar, the alternate currency.
    #[serde(rename = "USD")]
    Usd,
}

impl Currency {
    /// Returns the ISO 4217 code.
    #[inline]
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ars => "ARS",
            Self::Usd => "USD",
        }
    }
}

impl core::fmt::Display for Currency {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl core::str::FromStr for Currency {
    type Err = FinanzasError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ARS" => Ok(Self::Ars),
            "USD" => Ok(Self::Usd),
            other => Err(FinanzasError::Config(format!(
                "unknown currency `{other}` (expected ARS or USD)"
            ))),
        }
    }
}
