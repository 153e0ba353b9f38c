//! On-disk cache of converted records
//!
//! Each dataset is stored as two files in the cache directory:
//! - `<name>.json`: the records as a JSON array
//! - `<name>.meta`: entry metadata with a SHA-256 of the JSON bytes
//!
//! An entry is only served when both files exist, the hash matches and it was
//! converted from the source the caller expects. Anything else counts as a
//! miss so the caller regenerates it from source.
//!
//! # Example
//!
//! ```rust,ignore
//! use dinefind_core::cache::RecordCache;
//!
//! let cache = RecordCache::new("json")?;
//! cache.set("cuisines", &cuisines, Some(Path::new("csv/cuisines.csv")))?;
//!
//! if let Some(cuisines) = cache.get::<Cuisine>("cuisines", Some(Path::new("csv/cuisines.csv")))? {
//!     println!("{} cuisines cached", cuisines.len());
//! }
//! ```

use crate::error::{Error, ErrorCode, Result};
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

/// Cache entry metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheEntry {
    /// When the entry was written
    created_at: DateTime<Utc>,
    /// Number of records in the data file
    record_count: usize,
    /// Size of the data file in bytes
    size_bytes: u64,
    /// Hash of the data file for integrity
    hash: String,
    /// Source the records were converted from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source: Option<PathBuf>,
}

/// File-based cache for converted record collections
#[derive(Debug, Clone)]
pub struct RecordCache {
    dir: PathBuf,
}

impl RecordCache {
    /// Create a cache rooted at `dir`, creating the directory if needed
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Cache directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Get the cached records for `name`, if a valid entry exists
    ///
    /// With `source` set, an entry converted from any other path is a miss.
    pub fn get<T: DeserializeOwned>(&self, name: &str, source: Option<&Path>) -> Result<Option<Vec<T>>> {
        if !self.entry_path(name).exists() || !self.data_path(name).exists() {
            return Ok(None);
        }

        match self.read_entry(name, source) {
            Ok(records) => {
                tracing::debug!(dataset = name, records = records.len(), "Cache hit");
                Ok(Some(records))
            }
            Err(e) if e.code == ErrorCode::CacheCorrupt => {
                tracing::warn!(dataset = name, code = %e.code, error = %e.message, "Discarding cache entry");
                self.discard(name);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Store records for `name`, replacing any previous entry
    pub fn set<T: Serialize>(&self, name: &str, records: &[T], source: Option<&Path>) -> Result<()> {
        let data = serde_json::to_vec_pretty(records)?;

        let entry = CacheEntry {
            created_at: Utc::now(),
            record_count: records.len(),
            size_bytes: data.len() as u64,
            hash: hash_data(&data),
            source: source.map(Path::to_path_buf),
        };

        // Data first so a crash between the writes leaves a hash mismatch, not stale data.
        fs::write(self.data_path(name), &data)?;
        fs::write(self.entry_path(name), serde_json::to_string_pretty(&entry)?)?;

        tracing::debug!(dataset = name, records = records.len(), bytes = data.len(), "Cached records");
        Ok(())
    }

    /// Remove the entry for `name`; returns whether one existed
    pub fn remove(&self, name: &str) -> Result<bool> {
        let existed = self.entry_path(name).exists() || self.data_path(name).exists();
        self.discard(name);
        Ok(existed)
    }

    /// Remove every entry in the cache directory
    pub fn clear(&self) -> Result<()> {
        if self.dir.exists() {
            for entry in fs::read_dir(&self.dir)? {
                let path = entry?.path();
                if is_cache_file(&path) {
                    let _ = fs::remove_file(&path);
                }
            }
        }
        Ok(())
    }

    /// Get cache statistics
    pub fn stats(&self) -> Result<CacheStats> {
        let mut entries = Vec::new();

        if self.dir.exists() {
            for dir_entry in fs::read_dir(&self.dir)? {
                let path = dir_entry?.path();
                if path.extension().map_or(false, |e| e == "meta") {
                    let Ok(content) = fs::read(&path) else { continue };
                    let Ok(entry) = serde_json::from_slice::<CacheEntry>(&content) else { continue };
                    let name = path
                        .file_stem()
                        .map(|s| s.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    entries.push(CacheEntryStats {
                        name,
                        record_count: entry.record_count,
                        size_bytes: entry.size_bytes,
                        created_at: entry.created_at,
                    });
                }
            }
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(CacheStats {
            total_size_bytes: entries.iter().map(|e| e.size_bytes).sum(),
            entries,
            cache_dir: self.dir.clone(),
        })
    }

    fn read_entry<T: DeserializeOwned>(&self, name: &str, source: Option<&Path>) -> Result<Vec<T>> {
        let meta = fs::read(self.entry_path(name))?;
        let entry: CacheEntry = serde_json::from_slice(&meta)
            .map_err(|e| Error::cache_corrupt(name, format!("unreadable metadata: {}", e)))?;

        if let Some(expected) = source {
            if entry.source.as_deref() != Some(expected) {
                return Err(Error::cache_corrupt(
                    name,
                    format!(
                        "converted from {}, expected {}",
                        entry.source.as_deref().map_or_else(|| "an unknown source".to_string(), |p| p.display().to_string()),
                        expected.display()
                    ),
                ));
            }
        }

        let data = fs::read(self.data_path(name))?;
        if hash_data(&data) != entry.hash {
            return Err(Error::cache_corrupt(name, "hash mismatch"));
        }

        serde_json::from_slice(&data)
            .map_err(|e| Error::cache_corrupt(name, format!("records do not match the schema: {}", e)))
    }

    fn discard(&self, name: &str) {
        let _ = fs::remove_file(self.entry_path(name));
        let _ = fs::remove_file(self.data_path(name));
    }

    fn entry_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.meta", name))
    }

    fn data_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", name))
    }
}

fn hash_data(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

fn is_cache_file(path: &Path) -> bool {
    path.extension().map_or(false, |e| e == "meta" || e == "json")
}

/// Cache statistics
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    /// One line per valid entry, sorted by name
    pub entries: Vec<CacheEntryStats>,
    /// Total size of cached data in bytes
    pub total_size_bytes: u64,
    /// Path to the cache directory
    pub cache_dir: PathBuf,
}

/// Statistics for a single cached dataset
#[derive(Debug, Clone, Serialize)]
pub struct CacheEntryStats {
    pub name: String,
    pub record_count: usize,
    pub size_bytes: u64,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Cuisine;
    use tempfile::TempDir;

    fn test_cache() -> (RecordCache, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let cache = RecordCache::new(temp_dir.path().join("json")).unwrap();
        (cache, temp_dir)
    }

    fn cuisines() -> Vec<Cuisine> {
        vec![Cuisine::new("1", "American"), Cuisine::new("2", "Chinese")]
    }

    #[test]
    fn test_new_creates_directory() {
        let (cache, _temp) = test_cache();
        assert!(cache.dir().is_dir());
    }

    #[test]
    fn test_set_and_get() {
        let (cache, _temp) = test_cache();

        cache.set("cuisines", &cuisines(), None).unwrap();
        let value: Option<Vec<Cuisine>> = cache.get("cuisines", None).unwrap();

        assert_eq!(value, Some(cuisines()));
    }

    #[test]
    fn test_get_missing() {
        let (cache, _temp) = test_cache();

        let value: Option<Vec<Cuisine>> = cache.get("nonexistent", None).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_data_without_metadata_is_a_miss() {
        let (cache, _temp) = test_cache();
        fs::write(cache.dir().join("cuisines.json"), "[]").unwrap();

        assert!(cache.get::<Cuisine>("cuisines", None).unwrap().is_none());
    }

    #[test]
    fn test_tampered_data_is_discarded() {
        let (cache, _temp) = test_cache();
        cache.set("cuisines", &cuisines(), None).unwrap();

        fs::write(cache.dir().join("cuisines.json"), r#"[{"id":"9","name":"Fake"}]"#).unwrap();

        assert!(cache.get::<Cuisine>("cuisines", None).unwrap().is_none());
        assert!(!cache.dir().join("cuisines.meta").exists());
        assert!(!cache.dir().join("cuisines.json").exists());
    }

    #[test]
    fn test_non_utf8_metadata_is_discarded() {
        let (cache, _temp) = test_cache();
        cache.set("cuisines", &cuisines(), None).unwrap();

        fs::write(cache.dir().join("cuisines.meta"), [0xff, 0xfe, 0x00, 0x80]).unwrap();

        assert!(cache.get::<Cuisine>("cuisines", None).unwrap().is_none());
        assert!(!cache.dir().join("cuisines.json").exists());
    }

    #[test]
    fn test_entry_from_other_source_is_a_miss() {
        let (cache, _temp) = test_cache();
        cache.set("cuisines", &cuisines(), Some(Path::new("csv/cuisines.csv"))).unwrap();

        let hit: Option<Vec<Cuisine>> = cache.get("cuisines", Some(Path::new("csv/cuisines.csv"))).unwrap();
        assert_eq!(hit, Some(cuisines()));

        let moved: Option<Vec<Cuisine>> = cache.get("cuisines", Some(Path::new("other/cuisines.csv"))).unwrap();
        assert!(moved.is_none());
        assert!(!cache.dir().join("cuisines.meta").exists());
    }

    #[test]
    fn test_remove() {
        let (cache, _temp) = test_cache();

        cache.set("cuisines", &cuisines(), None).unwrap();
        assert!(cache.remove("cuisines").unwrap());
        assert!(cache.get::<Cuisine>("cuisines", None).unwrap().is_none());
        assert!(!cache.remove("cuisines").unwrap());
    }

    #[test]
    fn test_clear_leaves_foreign_files() {
        let (cache, _temp) = test_cache();
        cache.set("cuisines", &cuisines(), None).unwrap();
        fs::write(cache.dir().join("notes.txt"), "keep me").unwrap();

        cache.clear().unwrap();

        assert!(cache.get::<Cuisine>("cuisines", None).unwrap().is_none());
        assert!(cache.dir().join("notes.txt").exists());
    }

    #[test]
    fn test_stats() {
        let (cache, _temp) = test_cache();

        cache.set("cuisines", &cuisines(), Some(Path::new("csv/cuisines.csv"))).unwrap();
        cache.set("restaurants", &Vec::<Cuisine>::new(), None).unwrap();

        let stats = cache.stats().unwrap();
        assert_eq!(stats.entries.len(), 2);
        assert_eq!(stats.entries[0].name, "cuisines");
        assert_eq!(stats.entries[0].record_count, 2);
        assert_eq!(stats.entries[1].record_count, 0);
        assert!(stats.total_size_bytes > 0);
    }
}
