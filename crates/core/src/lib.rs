//! Core data handling for dinefind
//!
//! This crate provides everything a search needs before it can run:
//!
//! - **Error handling**: errors with codes, context, and recovery suggestions
//! - **Records**: restaurant and cuisine rows as read from their tables
//! - **Conversion**: CSV tables into records
//! - **Caching**: converted records persisted as JSON with integrity checks
//! - **Dataset loading**: the [`DataSource`](dataset::DataSource) seam used by the searcher
//! - **Configuration**: TOML-based configuration with validation
//!
//! # Example
//!
//! ```rust,no_run
//! use dinefind_core::{config::Config, dataset::{CsvDataSource, DataSource}};
//!
//! let config = Config::load(None).expect("invalid configuration");
//! let source = CsvDataSource::new(config.schema.data);
//! let dataset = source.load().expect("could not load dataset");
//! println!("{} restaurants", dataset.restaurants.len());
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod config;
pub mod convert;
pub mod dataset;
pub mod error;
pub mod records;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::cache::{CacheStats, RecordCache};
    pub use crate::config::{Config, ConfigSchema, DataConfig};
    pub use crate::dataset::{CsvDataSource, DataSource, Dataset, StaticSource};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
    pub use crate::records::{Cuisine, Restaurant};
}
