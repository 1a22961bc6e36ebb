//! Catalog configuration loaded from environment variables.
//!
//! ```text
//! FOLIO_DATA_PATH        record file to load         (default: "testBase.dat")
//! FOLIO_CAPACITY         max records to load, > 0    (default: 4000)
//! FOLIO_PAGE_SIZE        rows per page, > 0          (default: 20)
//! FOLIO_PAD_TO_CAPACITY  pad with empty placeholders (default: false)
//! ```
//!
//! Unset variables take their default. Set but unparsable ones are errors,
//! never silently replaced.

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

pub const ENV_DATA_PATH: &str = "FOLIO_DATA_PATH";
pub const ENV_CAPACITY: &str = "FOLIO_CAPACITY";
pub const ENV_PAGE_SIZE: &str = "FOLIO_PAGE_SIZE";
pub const ENV_PAD_TO_CAPACITY: &str = "FOLIO_PAD_TO_CAPACITY";

/// Errors returned when a configuration value cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: &'static str, message: String },
}

/// Everything needed to open a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Flat file of fixed-width records.
    pub data_path: PathBuf,
    /// Upper bound on records read from `data_path`.
    pub capacity: usize,
    /// Rows per rendered page.
    pub page_size: usize,
    /// Pad the store with zeroed placeholder records up to `capacity`.
    /// Placeholders have an empty sort key, sort first and match the empty
    /// query.
    pub pad_to_capacity: bool,
}

impl CatalogConfig {
    pub const DEFAULT_DATA_PATH: &'static str = "testBase.dat";
    pub const DEFAULT_CAPACITY: usize = 4000;
    pub const DEFAULT_PAGE_SIZE: usize = 20;

    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through `lookup`, which returns the raw value of
    /// a variable or `None` when it is unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_path = lookup(ENV_DATA_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_DATA_PATH));

        let capacity = parse_or(&lookup, ENV_CAPACITY, Self::DEFAULT_CAPACITY)?;
        if capacity == 0 {
            return Err(invalid(ENV_CAPACITY, "must be greater than 0"));
        }

        let page_size = parse_or(&lookup, ENV_PAGE_SIZE, Self::DEFAULT_PAGE_SIZE)?;
        if page_size == 0 {
            return Err(invalid(ENV_PAGE_SIZE, "must be greater than 0"));
        }

        let pad_to_capacity = parse_or(&lookup, ENV_PAD_TO_CAPACITY, false)?;

        Ok(Self {
            data_path,
            capacity,
            page_size,
            pad_to_capacity,
        })
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(Self::DEFAULT_DATA_PATH),
            capacity: Self::DEFAULT_CAPACITY,
            page_size: Self::DEFAULT_PAGE_SIZE,
            pad_to_capacity: false,
        }
    }
}

fn invalid(name: &'static str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        name,
        message: message.into(),
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| invalid(name, format!("{raw:?}: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<CatalogConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CatalogConfig::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(load(&[]).unwrap(), CatalogConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let cfg = load(&[
            (ENV_DATA_PATH, "/tmp/books.dat"),
            (ENV_CAPACITY, "10"),
            (ENV_PAGE_SIZE, " 5 "),
            (ENV_PAD_TO_CAPACITY, "true"),
        ])
        .unwrap();

        assert_eq!(cfg.data_path, PathBuf::from("/tmp/books.dat"));
        assert_eq!(cfg.capacity, 10);
        assert_eq!(cfg.page_size, 5);
        assert!(cfg.pad_to_capacity);
    }

    #[test]
    fn garbage_number_is_an_error() {
        let err = load(&[(ENV_PAGE_SIZE, "twenty")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { name: ENV_PAGE_SIZE, .. }
        ));
    }

    #[test]
    fn zero_capacity_and_page_size_are_rejected() {
        assert!(load(&[(ENV_CAPACITY, "0")]).is_err());
        assert!(load(&[(ENV_PAGE_SIZE, "0")]).is_err());
    }

    #[test]
    fn bad_bool_is_an_error() {
        let err = load(&[(ENV_PAD_TO_CAPACITY, "yes")]).unwrap_err();
        assert!(err.to_string().contains(ENV_PAD_TO_CAPACITY));
    }
}
