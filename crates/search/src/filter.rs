//! The filter pipeline.
//!
//! Each predicate takes the current candidates and returns the ones it keeps,
//! leaving its input untouched. [`apply`] runs the request's filters in order
//! over the full collection.

use crate::cuisine::CuisineIndex;
use crate::numeric::{at_least, at_most};
use crate::request::SearchRequest;
use dinefind_core::records::Restaurant;

/// One narrowing step, holding its already-trimmed parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter<'a> {
    /// Case-insensitive substring of the name
    Name(&'a str),
    /// Minimum customer rating
    Rating(&'a str),
    /// Maximum distance
    Distance(&'a str),
    /// Maximum price
    Price(&'a str),
    /// Prefix of a cuisine name
    Cuisine(&'a str),
}

impl Filter<'_> {
    /// Short name for logs
    pub fn label(&self) -> &'static str {
        match self {
            Filter::Name(_) => "name",
            Filter::Rating(_) => "rating",
            Filter::Distance(_) => "distance",
            Filter::Price(_) => "price",
            Filter::Cuisine(_) => "cuisine",
        }
    }

    /// Run this step over `candidates`.
    pub fn apply<'r>(&self, candidates: &[&'r Restaurant], index: &CuisineIndex) -> Vec<&'r Restaurant> {
        match *self {
            Filter::Name(name) => by_name(candidates, name),
            Filter::Rating(rating) => by_rating(candidates, rating),
            Filter::Distance(distance) => by_distance(candidates, distance),
            Filter::Price(price) => by_price(candidates, price),
            Filter::Cuisine(cuisine) => by_cuisine(candidates, index, cuisine),
        }
    }
}

/// Keep restaurants whose name contains `name`, ignoring case.
pub fn by_name<'r>(candidates: &[&'r Restaurant], name: &str) -> Vec<&'r Restaurant> {
    let needle = name.to_lowercase();
    candidates
        .iter()
        .copied()
        .filter(|r| r.name.to_lowercase().contains(&needle))
        .collect()
}

/// Keep restaurants rated at least `rating`.
pub fn by_rating<'r>(candidates: &[&'r Restaurant], rating: &str) -> Vec<&'r Restaurant> {
    candidates
        .iter()
        .copied()
        .filter(|r| at_least(&r.customer_rating, rating))
        .collect()
}

/// Keep restaurants no further than `distance`.
pub fn by_distance<'r>(candidates: &[&'r Restaurant], distance: &str) -> Vec<&'r Restaurant> {
    candidates
        .iter()
        .copied()
        .filter(|r| at_most(&r.distance, distance))
        .collect()
}

/// Keep restaurants costing at most `price`.
pub fn by_price<'r>(candidates: &[&'r Restaurant], price: &str) -> Vec<&'r Restaurant> {
    candidates
        .iter()
        .copied()
        .filter(|r| at_most(&r.price, price))
        .collect()
}

/// Keep restaurants of the first cuisine whose name starts with `cuisine`.
///
/// When no cuisine matches, nothing is kept.
pub fn by_cuisine<'r>(
    candidates: &[&'r Restaurant],
    index: &CuisineIndex,
    cuisine: &str,
) -> Vec<&'r Restaurant> {
    let Some((matched, id)) = index.find_prefix(cuisine) else {
        tracing::debug!(cuisine, "No cuisine matches prefix");
        return Vec::new();
    };

    tracing::debug!(cuisine, matched, id, "Resolved cuisine prefix");
    candidates
        .iter()
        .copied()
        .filter(|r| r.cuisine_id == id)
        .collect()
}

/// Run every filter the request asks for over `restaurants`.
pub fn apply<'r>(
    restaurants: &'r [Restaurant],
    index: &CuisineIndex,
    request: &SearchRequest,
) -> Vec<&'r Restaurant> {
    let mut candidates: Vec<&Restaurant> = restaurants.iter().collect();

    for filter in request.filters() {
        candidates = filter.apply(&candidates, index);
        tracing::debug!(filter = filter.label(), remaining = candidates.len(), "Applied filter");
    }

    candidates
}
