//! Error types for the search crate.

use dinefind_core::error::exit_codes;
use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur during a search.
///
/// An empty result is not an error; it is how "nothing matched" is reported.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The request was rejected before any data was touched
    #[error("Invalid search request: {0}")]
    Validation(String),

    /// The dataset could not be read or converted
    #[error("Failed to load restaurant data: {0}")]
    Load(#[from] dinefind_core::Error),
}

impl SearchError {
    /// Exit code a CLI should use for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            SearchError::Validation(_) => exit_codes::VALIDATION_ERROR,
            SearchError::Load(_) => exit_codes::DATA_ERROR,
        }
    }
}
