//! Terminal output for dinefind
//!
//! Provides shared CLI functionality:
//! - Status messages
//! - Result tables
//! - A spinner for the one-time data load

pub mod output;
pub mod progress;
