//! Restaurant search for dinefind.
//!
//! This crate provides:
//! - Leading-integer parsing of numeric-as-string fields
//! - A cuisine index keyed by lowercase name, in source order
//! - The filter pipeline (name, rating, distance, price, cuisine)
//! - Ranking by distance, rating and price, capped at five results
//! - A searcher that loads its data once and validates untyped requests
//!
//! # Example
//!
//! ```
//! use dinefind_core::dataset::{Dataset, StaticSource};
//! use dinefind_core::records::{Cuisine, Restaurant};
//! use dinefind_search::{SearchRequest, Searcher};
//!
//! # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
//! let dataset = Dataset::from_records(
//!     vec![
//!         Restaurant::new("1", "Deliciouszilla", "1", "2", "4", "15"),
//!         Restaurant::new("2", "Grill House", "2", "5", "3", "30"),
//!     ],
//!     vec![Cuisine::new("1", "Chinese"), Cuisine::new("2", "American")],
//! );
//! let searcher = Searcher::new(StaticSource::new(dataset));
//!
//! let found = searcher.search(&SearchRequest::new().with_cuisine("chi")).await.unwrap();
//! assert_eq!(found[0].name, "Deliciouszilla");
//! # });
//! ```

mod cuisine;
mod error;
pub mod filter;
mod numeric;
pub mod rank;
mod request;
mod searcher;

pub use cuisine::CuisineIndex;
pub use error::{Result, SearchError};
pub use filter::Filter;
pub use numeric::{at_least, at_most, parse_leading_int};
pub use rank::{RankKey, TOP_N};
pub use request::SearchRequest;
pub use searcher::{DataContext, Searcher};
