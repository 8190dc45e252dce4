//! Runtime settings resolved from environment variables.
//!
//! | Variable                  | Meaning                         | Default |
//! |---------------------------|---------------------------------|---------|
//! | `FINANZAS_CURRENCY`       | reporting currency (ARS or USD) | ARS     |
//! | `FINANZAS_DATA_FILE`      | movements JSON file             | XDG data dir |
//! | `FINANZAS_TOP_CATEGORIES` | categories shown before "Otros" | 5       |

use std::path::PathBuf;

use crate::error::{FinanzasError, Result};
use crate::models::Currency;

/// Environment variable for the reporting currency.
pub const CURRENCY_ENV: &str = "FINANZAS_CURRENCY";
/// Environment variable for the movements file path.
pub const DATA_FILE_ENV: &str = "FINANZAS_DATA_FILE";
/// Environment variable for the number of categories shown in full.
pub const TOP_CATEGORIES_ENV: &str = "FINANZAS_TOP_CATEGORIES";

/// Number of categories shown before the rest are folded into "Otros".
pub const DEFAULT_TOP_CATEGORIES: usize = 5;

/// Resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Reporting currency.
    pub currency: Currency,
    /// Explicit movements file, if configured.
    pub data_file: Option<PathBuf>,
    /// Categories shown in full in truncated views.
    pub top_categories: usize,
}

impl Default for Settings {
    #[inline]
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            data_file: None,
            top_categories: DEFAULT_TOP_CATEGORIES,
        }
    }
}

impl Settings {
    /// Reads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`FinanzasError::Config`] if a variable is set to an invalid
    /// value.
    #[inline]
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its
    /// value. Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`FinanzasError::Config`] if a variable is set to an invalid
    /// value.
    #[inline]
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|val| !val.trim().is_empty());
        let mut settings = Self::default();

        if let Some(raw) = read(CURRENCY_ENV) {
            settings.currency = raw.parse()?;
        }
        if let Some(raw) = read(DATA_FILE_ENV) {
            settings.data_file = Some(PathBuf::from(raw));
        }
        if let Some(raw) = read(TOP_CATEGORIES_ENV) {
            settings.top_categories = raw.trim().parse().map_err(|err| {
                FinanzasError::Config(format!("{TOP_CATEGORIES_ENV}=`{raw}`: {err}"))
            })?;
        }
        tracing::debug!(
            currency = %settings.currency,
            top_categories = settings.top_categories,
            "resolved settings"
        );
        Ok(settings)
    }

    /// Returns the configured movements file or the platform default.
    ///
    /// # Errors
    ///
    /// Returns an error if no file is configured and the platform data
    /// directory cannot be determined.
    #[cfg(feature = "storage-file")]
    #[inline]
    pub fn data_file_or_default(&self) -> Result<PathBuf> {
        self.data_file
            .clone()
            .map_or_else(crate::source::JsonFileSource::default_path, Ok)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|&(key, val)| (key.to_owned(), val.to_owned()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.top_categories, DEFAULT_TOP_CATEGORIES);
    }

    #[test]
    fn reads_all_variables() {
        let settings = Settings::from_lookup(lookup(&[
            (CURRENCY_ENV, "usd"),
            (DATA_FILE_ENV, "/tmp/movs.json"),
            (TOP_CATEGORIES_ENV, " 8 "),
        ]))
        .unwrap();
        assert_eq!(settings.currency, Currency::Usd);
        assert_eq!(settings.data_file, Some(PathBuf::from("/tmp/movs.json")));
        assert_eq!(settings.top_categories, 8);
    }

    #[test]
    fn empty_values_are_ignored() {
        let settings = Settings::from_lookup(lookup(&[(CURRENCY_ENV, "  ")])).unwrap();
        assert_eq!(settings.currency, Currency::Ars);
    }

    #[test]
    fn invalid_currency_is_config_error() {
        let err = Settings::from_lookup(lookup(&[(CURRENCY_ENV, "EUR")])).unwrap_err();
        assert!(matches!(err, FinanzasError::Config(_)));
    }

    #[test]
    fn invalid_top_is_config_error() {
        let err = Settings::from_lookup(lookup(&[(TOP_CATEGORIES_ENV, "many")])).unwrap_err();
        assert!(err.to_string().contains(TOP_CATEGORIES_ENV));
    }

    #[cfg(feature = "storage-file")]
    #[test]
    fn explicit_data_file_wins_over_default() {
        let settings = Settings {
            data_file: Some(PathBuf::from("/data/m.json")),
            ..Settings::default()
        };
        assert_eq!(
            settings.data_file_or_default().unwrap(),
            PathBuf::from("/data/m.json")
        );
    }
}
