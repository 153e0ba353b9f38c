//! Dataset loading
//!
//! A [`DataSource`] produces the two record collections a search runs over.
//! [`CsvDataSource`] converts the source tables once and serves later loads
//! from the [`RecordCache`]; each table is checked independently, so removing
//! one cached file only regenerates that table.

use crate::cache::RecordCache;
use crate::config::DataConfig;
use crate::convert;
use crate::error::{Result, ResultExt};
use crate::records::{Cuisine, Restaurant};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::path::Path;

/// Cache entry name for restaurants
pub const RESTAURANTS: &str = "restaurants";
/// Cache entry name for cuisines
pub const CUISINES: &str = "cuisines";

/// Both record collections, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub restaurants: Vec<Restaurant>,
    pub cuisines: Vec<Cuisine>,
}

impl Dataset {
    pub fn from_records(restaurants: Vec<Restaurant>, cuisines: Vec<Cuisine>) -> Self {
        Self {
            restaurants,
            cuisines,
        }
    }
}

/// Anything that can produce a [`Dataset`].
pub trait DataSource: Send + Sync {
    /// Load both collections. Called at most once per successful search context.
    fn load(&self) -> Result<Dataset>;

    /// Short label for logs
    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}

/// A fixed dataset, handy for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    dataset: Dataset,
}

impl StaticSource {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }
}

impl DataSource for StaticSource {
    fn load(&self) -> Result<Dataset> {
        Ok(self.dataset.clone())
    }
}

/// CSV tables with a converted-JSON cache in front of them.
#[derive(Debug, Clone)]
pub struct CsvDataSource {
    config: DataConfig,
}

impl CsvDataSource {
    pub fn new(config: DataConfig) -> Self {
        Self { config }
    }

    /// Open (and create if needed) the cache directory
    pub fn cache(&self) -> Result<RecordCache> {
        RecordCache::new(&self.config.cache_dir)
            .context(format!("While preparing cache directory {}", self.config.cache_dir.display()))
    }

    /// Drop any cached conversion and convert both tables again
    pub fn refresh(&self) -> Result<Dataset> {
        self.cache()?.clear()?;
        tracing::info!(cache_dir = %self.config.cache_dir.display(), "Cleared converted records");
        self.load()
    }

    fn load_table<T>(&self, cache: &RecordCache, name: &str, source: &Path) -> Result<Vec<T>>
    where
        T: Serialize + DeserializeOwned,
    {
        if let Some(records) = cache.get::<T>(name, Some(source))? {
            return Ok(records);
        }

        tracing::info!(dataset = name, source = %source.display(), "Converting source table");
        let records: Vec<T> = convert::read_csv(source, self.config.delimiter as u8)
            .context(format!("While converting {}", name))?;
        cache.set(name, &records, Some(source))?;

        Ok(records)
    }
}

impl DataSource for CsvDataSource {
    fn load(&self) -> Result<Dataset> {
        let cache = self.cache()?;

        let restaurants = self.load_table(&cache, RESTAURANTS, &self.config.restaurants_csv)?;
        let cuisines = self.load_table(&cache, CUISINES, &self.config.cuisines_csv)?;

        tracing::info!(
            restaurants = restaurants.len(),
            cuisines = cuisines.len(),
            "Dataset loaded"
        );
        Ok(Dataset::from_records(restaurants, cuisines))
    }

    fn describe(&self) -> String {
        format!(
            "{} + {} (cache: {})",
            self.config.restaurants_csv.display(),
            self.config.cuisines_csv.display(),
            self.config.cache_dir.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::fs;
    use tempfile::TempDir;

    const RESTAURANTS_CSV: &str = "name,customer_rating,distance,price,cuisine_id,id\n\
                                   Deliciousgenix,4,1,10,2,1\n\
                                   Grill Palace,3,5,25,1,2\n";
    const CUISINES_CSV: &str = "id,name\n1,American\n2,Chinese\n";

    fn fixture() -> (TempDir, DataConfig) {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("csv")).unwrap();
        fs::write(dir.path().join("csv/restaurants.csv"), RESTAURANTS_CSV).unwrap();
        fs::write(dir.path().join("csv/cuisines.csv"), CUISINES_CSV).unwrap();

        let config = DataConfig {
            restaurants_csv: dir.path().join("csv/restaurants.csv"),
            cuisines_csv: dir.path().join("csv/cuisines.csv"),
            cache_dir: dir.path().join("json"),
            delimiter: ',',
        };
        (dir, config)
    }

    #[test]
    fn test_load_converts_and_caches() {
        let (dir, config) = fixture();
        let source = CsvDataSource::new(config);

        let dataset = source.load().unwrap();
        assert_eq!(dataset.restaurants.len(), 2);
        assert_eq!(dataset.cuisines[1], Cuisine::new("2", "Chinese"));
        assert!(dir.path().join("json/restaurants.json").exists());
        assert!(dir.path().join("json/cuisines.json").exists());
    }

    #[test]
    fn test_second_load_uses_cache() {
        let (dir, config) = fixture();
        let source = CsvDataSource::new(config);
        let first = source.load().unwrap();

        // Sources are gone; only the cache can answer now.
        fs::remove_dir_all(dir.path().join("csv")).unwrap();

        let second = source.load().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_cache_file_regenerates_only_that_table() {
        let (dir, config) = fixture();
        let source = CsvDataSource::new(config);
        source.load().unwrap();

        fs::remove_file(dir.path().join("json/cuisines.json")).unwrap();
        fs::write(dir.path().join("csv/cuisines.csv"), "id,name\n1,American\n2,Thai\n").unwrap();
        fs::remove_file(dir.path().join("csv/restaurants.csv")).unwrap();

        let dataset = source.load().unwrap();
        assert_eq!(dataset.cuisines[1].name, "Thai");
        assert_eq!(dataset.restaurants.len(), 2);
    }

    #[test]
    fn test_corrupt_metadata_regenerates() {
        let (dir, config) = fixture();
        let source = CsvDataSource::new(config);
        let first = source.load().unwrap();

        fs::write(dir.path().join("json/cuisines.meta"), [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let second = source.load().unwrap();
        assert_eq!(first, second);
        assert!(dir.path().join("json/cuisines.meta").exists());
    }

    #[test]
    fn test_changed_source_path_reconverts() {
        let (dir, mut config) = fixture();
        CsvDataSource::new(config.clone()).load().unwrap();

        fs::write(dir.path().join("csv/other.csv"), "id,name
5,Korean
").unwrap();
        config.cuisines_csv = dir.path().join("csv/other.csv");

        let dataset = CsvDataSource::new(config).load().unwrap();
        assert_eq!(dataset.cuisines, vec![Cuisine::new("5", "Korean")]);
    }

    #[test]
    fn test_refresh_reconverts() {
        let (dir, config) = fixture();
        let source = CsvDataSource::new(config);
        source.load().unwrap();

        fs::write(dir.path().join("csv/cuisines.csv"), "id,name\n7,Greek\n").unwrap();

        let dataset = source.refresh().unwrap();
        assert_eq!(dataset.cuisines, vec![Cuisine::new("7", "Greek")]);
    }

    #[test]
    fn test_missing_source_is_load_error() {
        let (dir, config) = fixture();
        fs::remove_file(dir.path().join("csv/restaurants.csv")).unwrap();

        let err = CsvDataSource::new(config).load().unwrap_err();
        assert_eq!(err.code, ErrorCode::FileNotFound);
        assert!(err.context.unwrap().contains("restaurants"));
    }

    #[test]
    fn test_malformed_source_is_load_error() {
        let (dir, config) = fixture();
        fs::write(dir.path().join("csv/cuisines.csv"), "id,name\n1\n").unwrap();

        let err = CsvDataSource::new(config).load().unwrap_err();
        assert_eq!(err.code, ErrorCode::DataParse);
        assert!(!dir.path().join("json/cuisines.json").exists());
    }

    #[test]
    fn test_static_source() {
        let dataset = Dataset::from_records(vec![], vec![Cuisine::new("1", "American")]);
        let source = StaticSource::new(dataset.clone());
        assert_eq!(source.load().unwrap(), dataset);
        assert_eq!(source.describe(), "in-memory");
    }
}
