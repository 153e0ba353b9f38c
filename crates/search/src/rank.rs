//! Result ordering.
//!
//! Closest first, then best rated, then cheapest. The sort is stable, so
//! restaurants tied on all three keys keep their source order. A value that
//! does not parse as a number sorts after every number on its key.

use crate::numeric::parse_leading_int;
use dinefind_core::records::Restaurant;
use std::cmp::{Ordering, Reverse};

/// How many restaurants a search returns at most.
pub const TOP_N: usize = 5;

/// Sort key for one restaurant. `true` in the flag marks not-a-number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RankKey {
    distance: (bool, i64),
    rating: (bool, Reverse<i64>),
    price: (bool, i64),
}

impl RankKey {
    pub fn of(restaurant: &Restaurant) -> Self {
        let distance = parse_leading_int(&restaurant.distance);
        let rating = parse_leading_int(&restaurant.customer_rating);
        let price = parse_leading_int(&restaurant.price);

        Self {
            distance: (distance.is_none(), distance.unwrap_or_default()),
            rating: (rating.is_none(), Reverse(rating.unwrap_or_default())),
            price: (price.is_none(), price.unwrap_or_default()),
        }
    }
}

/// Compare two restaurants by rank.
pub fn compare(a: &Restaurant, b: &Restaurant) -> Ordering {
    RankKey::of(a).cmp(&RankKey::of(b))
}

/// Sort `candidates` by rank and keep the first `limit`.
pub fn top<'r>(mut candidates: Vec<&'r Restaurant>, limit: usize) -> Vec<&'r Restaurant> {
    candidates.sort_by_cached_key(|r| RankKey::of(r));
    candidates.truncate(limit);
    candidates
}
