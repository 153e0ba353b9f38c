//! Restaurant and cuisine records
//!
//! Records keep every field as the string read from the source table.
//! Numeric interpretation happens at search time.

use serde::{Deserialize, Serialize};

/// A restaurant row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    /// Matches a [`Cuisine::id`]
    pub cuisine_id: String,
    pub distance: String,
    pub customer_rating: String,
    pub price: String,
}

impl Restaurant {
    /// Convenience constructor used by in-memory sources and tests.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        cuisine_id: impl Into<String>,
        distance: impl Into<String>,
        customer_rating: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cuisine_id: cuisine_id.into(),
            distance: distance.into(),
            customer_rating: customer_rating.into(),
            price: price.into(),
        }
    }
}

/// A cuisine row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cuisine {
    pub id: String,
    pub name: String,
}

impl Cuisine {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
