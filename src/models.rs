//! Input data models consumed by the engine.
//!
//! This module contains the [`Movement`] record, the [`DateRange`] window,
//! newtype identifiers, and enumeration types for constrained values.
//! Derived structures live next to the stage that computes them in
//! [`crate::engine`].

mod enums;
mod ids;
mod movement;
mod range;

pub use chrono::NaiveDate;
pub use enums::{Currency, MovementKind};
pub use ids::{AccountName, InstallmentId, MovementId};
pub use movement::Movement;
pub use range::DateRange;
