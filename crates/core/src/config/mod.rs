//! Configuration loading and schema definitions
//!
//! Data file locations and logging defaults, read from TOML.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
