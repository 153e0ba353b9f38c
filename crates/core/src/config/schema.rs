//! Configuration schema definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ConfigSchema {
    /// Reject values that would only fail later, deep inside a load.
    pub fn validate(&self) -> Result<()> {
        if self.data.restaurants_csv.as_os_str().is_empty() {
            return Err(Error::invalid_config("data.restaurants_csv", "path is empty"));
        }
        if self.data.cuisines_csv.as_os_str().is_empty() {
            return Err(Error::invalid_config("data.cuisines_csv", "path is empty"));
        }
        if self.data.cache_dir.as_os_str().is_empty() {
            return Err(Error::invalid_config("data.cache_dir", "path is empty"));
        }
        if !self.data.delimiter.is_ascii() {
            return Err(Error::invalid_config(
                "data.delimiter",
                format!("'{}' is not a single-byte character", self.data.delimiter),
            ));
        }
        Ok(())
    }
}

/// Where the source tables live and where converted records are cached
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Restaurants CSV file
    #[serde(default = "default_restaurants_csv")]
    pub restaurants_csv: PathBuf,

    /// Cuisines CSV file
    #[serde(default = "default_cuisines_csv")]
    pub cuisines_csv: PathBuf,

    /// Directory holding the converted JSON records
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,

    /// Field delimiter of the source files
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            restaurants_csv: default_restaurants_csv(),
            cuisines_csv: default_cuisines_csv(),
            cache_dir: default_cache_dir(),
            delimiter: default_delimiter(),
        }
    }
}

fn default_restaurants_csv() -> PathBuf {
    PathBuf::from("csv/restaurants.csv")
}

fn default_cuisines_csv() -> PathBuf {
    PathBuf::from("csv/cuisines.csv")
}

fn default_cache_dir() -> PathBuf {
    PathBuf::from("json")
}

fn default_delimiter() -> char {
    ','
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
