//! CSV to record conversion
//!
//! Header names map onto record fields through serde. Surrounding whitespace
//! in headers and values is trimmed; columns the record does not know are
//! ignored.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::Path;

/// Read every row of a CSV file into records.
pub fn read_csv<T: DeserializeOwned>(path: &Path, delimiter: u8) -> Result<Vec<T>> {
    if !path.exists() {
        return Err(Error::file_not_found(path));
    }

    let file = std::fs::File::open(path)?;
    let records = read_csv_from(file, delimiter, path)?;

    tracing::debug!(path = %path.display(), rows = records.len(), "Converted CSV");
    Ok(records)
}

/// Read CSV rows from any reader; `origin` names the source in errors.
pub fn read_csv_from<T, R>(reader: R, delimiter: u8, origin: &Path) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: T = result.map_err(|e| {
            let line = e
                .position()
                .map(|p| format!("line {}", p.line()))
                .unwrap_or_else(|| "unknown line".to_string());
            Error::data_parse(origin, format!("{}: {}", line, e)).with_source(e)
        })?;
        records.push(record);
    }

    Ok(records)
}
