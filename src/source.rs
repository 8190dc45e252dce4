//! Pluggable sources of movement records.
//!
//! The engine never loads data itself; a [`MovementSource`] hands it an
//! already-loaded history. [`InMemorySource`] serves tests and embedding
//! callers, [`JsonFileSource`] reads an exported JSON array from disk.

#[cfg(feature = "storage-file")]
mod file;
mod memory;

#[cfg(feature = "storage-file")]
pub use file::JsonFileSource;
pub use memory::InMemorySource;

use crate::error::Result;
use crate::models::Movement;

/// Read-only backend yielding the movement history.
pub trait MovementSource: core::fmt::Debug + Send + Sync {
    /// Returns every stored movement.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to read or decode its data.
    fn movements(&self) -> Result<Vec<Movement>>;
}
