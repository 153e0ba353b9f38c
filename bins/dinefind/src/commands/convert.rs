//! CSV conversion command

use anyhow::Result;
use dinefind_cli::output::{format_count, Status};
use dinefind_cli::progress;
use dinefind_core::dataset::{CsvDataSource, DataSource};
use dinefind_search::SearchError;

/// Convert both tables into the record cache and report what is cached
///
/// A table that cannot be loaded fails the same way a search would.
pub fn run(source: &CsvDataSource, force: bool) -> Result<()> {
    let pb = progress::spinner(if force {
        "Reconverting CSV tables..."
    } else {
        "Converting CSV tables..."
    });

    let loaded = if force { source.refresh() } else { source.load() };
    let dataset = match loaded {
        Ok(dataset) => {
            progress::finish_success(&pb, "Conversion complete");
            dataset
        }
        Err(e) => {
            progress::finish_error(&pb, "Conversion failed");
            return Err(SearchError::Load(e).into());
        }
    };

    Status::success(&format!(
        "{} and {} ready",
        format_count(dataset.restaurants.len(), "restaurant", "restaurants"),
        format_count(dataset.cuisines.len(), "cuisine", "cuisines")
    ));

    let stats = source.cache()?.stats()?;
    Status::info(&format!("Cache directory: {}", stats.cache_dir.display()));
    for entry in &stats.entries {
        println!(
            "  {:<12} {:>6} records  {:>8} bytes  {}",
            entry.name,
            entry.record_count,
            entry.size_bytes,
            entry.created_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }

    Ok(())
}
