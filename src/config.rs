//! Locator configuration.
//!
//! Configuration is built once by the caller and passed explicitly to
//! [`CarrierLocator::from_config`](crate::locator::engine::CarrierLocator::from_config).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable overriding [`LocatorConfig::data_path`].
pub const DATA_PATH_ENV: &str = "CARRIER_DATA_PATH";
/// Environment variable overriding [`LocatorConfig::default_count`].
pub const DEFAULT_COUNT_ENV: &str = "CARRIER_DEFAULT_COUNT";

/// Where the carrier table lives and how many carriers a query returns
/// by default. Missing fields take their [`Default`] values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocatorConfig {
    /// Geocoded carrier table (delimited text with a header row)
    pub data_path: PathBuf,
    /// Number of carriers returned when the caller does not ask for a
    /// specific count
    pub default_count: usize,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("Data/pdf_folder/geocoded_data.csv"),
            default_count: 3,
        }
    }
}

impl LocatorConfig {
    /// Reads overrides from [`DATA_PATH_ENV`] and [`DEFAULT_COUNT_ENV`].
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup` on top of the defaults.
    /// Unparsable or zero counts are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(DATA_PATH_ENV) {
            config.data_path = PathBuf::from(path);
        }
        if let Some(count) = lookup(DEFAULT_COUNT_ENV) {
            match count.trim().parse::<usize>() {
                Ok(n) if n > 0 => config.default_count = n,
                _ => warn!("Ignoring invalid {}: {:?}", DEFAULT_COUNT_ENV, count),
            }
        }

        config
    }
}
