//! Error types for the finanzas library.
//!
//! The aggregation engine itself cannot fail; these errors come from the
//! edges around it: loading movements and reading configuration.

/// All errors that can occur when loading data or configuration.
#[derive(Debug, thiserror::Error)]
pub enum FinanzasError {
    /// JSON serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Movement source backend failed.
    #[error("movement source error: {0}")]
    Source(Box<dyn core::error::Error + Send + Sync>),

    /// A configuration value is missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, FinanzasError>;
