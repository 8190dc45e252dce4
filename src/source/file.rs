//! JSON-file movement source.
//!
//! Reads a single JSON array of movements, by default from
//! `$XDG_DATA_HOME/finanzas-rs/movements.json`.

use std::fs;
use std::path::{Path, PathBuf};

use super::MovementSource;
use crate::error::{FinanzasError, Result};
use crate::models::Movement;

/// Application name used for the XDG data directory.
const APP_NAME: &str = "finanzas-rs";

/// Default file name for the movement export.
const MOVEMENTS_FILE: &str = "movements.json";

/// File-backed source reading an exported JSON array.
///
/// A missing file is treated as an empty history, matching a fresh
/// install with nothing recorded yet.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    /// Path of the JSON file.
    path: PathBuf,
}

impl JsonFileSource {
    /// Creates a source reading from `path`.
    #[inline]
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the default XDG-compliant path of the movements file.
    ///
    /// On Linux: `$XDG_DATA_HOME/finanzas-rs/movements.json` (typically
    /// `~/.local/share/finanzas-rs/movements.json`).
    ///
    /// # Errors
    ///
    /// Returns an error if the platform data directory cannot be determined.
    #[inline]
    pub fn default_path() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|data_path| data_path.join(APP_NAME).join(MOVEMENTS_FILE))
            .ok_or_else(|| {
                FinanzasError::Source("could not determine platform data directory".into())
            })
    }

    /// Returns the path this source reads from.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MovementSource for JsonFileSource {
    #[tracing::instrument(skip_all, fields(path = %self.path.display()))]
    #[inline]
    fn movements(&self) -> Result<Vec<Movement>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let movements: Vec<Movement> = serde_json::from_str(&contents)?;
                tracing::debug!(count = movements.len(), "loaded movements");
                Ok(movements)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("movements file not found, treating history as empty");
                Ok(Vec::new())
            }
            Err(err) => Err(FinanzasError::Source(Box::new(err))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MovementKind;

    const SAMPLE: &str = r#"[
        {"id": "1", "kind": "income", "date": "2024-01-05", "category": "Sueldo", "amountPrimary": 1000},
        {"id": "2", "kind": "expense", "date": "2024-01-06", "category": "🍔 Comida", "amount": 150},
        {"id": "3", "kind": "transfer", "date": "2024-01-07", "amountPrimary": 50,
         "account": "Banco", "destinationAccount": "Efectivo"}
    ]"#;

    #[test]
    fn reads_both_schema_shapes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MOVEMENTS_FILE);
        fs::write(&path, SAMPLE).unwrap();

        let source = JsonFileSource::new(path);
        let movements = source.movements().unwrap();
        assert_eq!(movements.len(), 3);
        assert_eq!(movements[0].kind, MovementKind::Income);
        assert!(movements[1].amount.is_some());
        assert!(movements[1].amount_primary.is_none());
        assert_eq!(movements[2].kind, MovementKind::Transfer);
    }

    #[test]
    fn missing_file_is_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("absent.json"));
        assert!(source.movements().unwrap().is_empty());
    }

    #[test]
    fn malformed_file_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MOVEMENTS_FILE);
        fs::write(&path, "{ not an array").unwrap();
        let err = JsonFileSource::new(path).movements().unwrap_err();
        assert!(matches!(err, FinanzasError::Serialization(_)));
    }

    #[test]
    fn directory_path_is_source_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonFileSource::new(dir.path().to_path_buf())
            .movements()
            .unwrap_err();
        assert!(matches!(err, FinanzasError::Source(_)));
    }

    #[test]
    fn default_path_ends_with_file_name() {
        if let Ok(path) = JsonFileSource::default_path() {
            assert!(path.ends_with(Path::new(APP_NAME).join(MOVEMENTS_FILE)));
        }
    }
}
