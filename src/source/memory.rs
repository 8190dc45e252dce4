//! In-memory movement source.

use std::sync::{Mutex, PoisonError};

use super::MovementSource;
use crate::error::{FinanzasError, Result};
use crate::models::Movement;

/// Thread-safe in-memory movement source.
///
/// Movements can be appended after construction, so a long-lived
/// [`crate::dashboard::Dashboard`] sees new records on its next call.
///
/// # Example
///
/// ```rust
/// use finanzas_rs::source::{InMemorySource, MovementSource};
///
/// let source = InMemorySource::new();
/// assert!(source.movements().unwrap().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct InMemorySource {
    /// Stored movements, in insertion order.
    inner: Mutex<Vec<Movement>>,
}

impl InMemorySource {
    /// Creates an empty source.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source holding `movements`.
    #[inline]
    #[must_use]
    pub const fn with_movements(movements: Vec<Movement>) -> Self {
        Self {
            inner: Mutex::new(movements),
        }
    }

    /// Appends movements.
    ///
    /// # Errors
    ///
    /// Returns an error if the internal lock is poisoned.
    #[inline]
    pub fn extend(&self, movements: Vec<Movement>) -> Result<()> {
        let mut inner = self.inner.lock().map_err(|err| lock_error(&err))?;
        inner.extend(movements);
        Ok(())
    }
}

impl MovementSource for InMemorySource {
    #[inline]
    fn movements(&self) -> Result<Vec<Movement>> {
        let inner = self.inner.lock().map_err(|err| lock_error(&err))?;
        Ok(inner.clone())
    }
}

/// Wraps a mutex poison error into a [`FinanzasError::Source`].
fn lock_error<T>(err: &PoisonError<T>) -> FinanzasError {
    FinanzasError::Source(err.to_string().into())
}
