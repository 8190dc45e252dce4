//! Aggregation and reporting engine for personal finance movements.
//!
//! Takes a list of dated, dual-currency (ARS/USD) movements and a
//! reporting window, and derives category breakdowns, period-over-period
//! comparisons and a next-period cash-flow projection.
//!
//! The [`engine`] module holds the pure pipeline. [`dashboard`] wraps it
//! around a pluggable [`source`] of movements, and `report` renders the
//! results as markdown tables.

extern crate alloc;

pub mod config;
pub mod dashboard;
pub mod engine;
pub mod error;
pub mod models;
#[cfg(feature = "report")]
pub mod report;
pub mod source;
