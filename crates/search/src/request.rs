//! Search requests and their validation.

use crate::error::{Result, SearchError};
use crate::filter::Filter;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What to search for. Every field is optional.
///
/// Field names serialise in camelCase (`restaurantName`, `customerRating`)
/// so requests can be written as plain JSON objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_rating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
}

impl SearchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.restaurant_name = Some(name.into());
        self
    }

    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.customer_rating = Some(rating.into());
        self
    }

    pub fn with_distance(mut self, distance: impl Into<String>) -> Self {
        self.distance = Some(distance.into());
        self
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    /// Validate an untyped request.
    ///
    /// The value must be an object and every field in it, known or not, must
    /// be a string. Unknown string fields are ignored.
    pub fn from_value(value: &Value) -> Result<Self> {
        let Value::Object(fields) = value else {
            return Err(SearchError::Validation(format!(
                "expected an object, got {}",
                kind(value)
            )));
        };

        if let Some((name, bad)) = fields.iter().find(|(_, v)| !v.is_string()) {
            return Err(SearchError::Validation(format!(
                "field '{}' must be a string, got {}",
                name,
                kind(bad)
            )));
        }

        let text = |key: &str| fields.get(key).and_then(Value::as_str).map(String::from);
        Ok(Self {
            restaurant_name: text("restaurantName"),
            customer_rating: text("customerRating"),
            distance: text("distance"),
            price: text("price"),
            cuisine: text("cuisine"),
        })
    }

    /// Parse and validate a JSON request.
    pub fn from_json(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input)
            .map_err(|e| SearchError::Validation(format!("request is not valid JSON: {}", e)))?;
        Self::from_value(&value)
    }

    /// Filters to run, in pipeline order: name, rating, distance, price, cuisine.
    ///
    /// A field takes part when it is present and non-empty; its value is
    /// trimmed afterwards, so a whitespace-only field still runs with `""`.
    pub fn filters(&self) -> Vec<Filter<'_>> {
        let mut filters = Vec::with_capacity(5);
        if let Some(name) = active(&self.restaurant_name) {
            filters.push(Filter::Name(name));
        }
        if let Some(rating) = active(&self.customer_rating) {
            filters.push(Filter::Rating(rating));
        }
        if let Some(distance) = active(&self.distance) {
            filters.push(Filter::Distance(distance));
        }
        if let Some(price) = active(&self.price) {
            filters.push(Filter::Price(price));
        }
        if let Some(cuisine) = active(&self.cuisine) {
            filters.push(Filter::Cuisine(cuisine));
        }
        filters
    }
}

fn active(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty()).map(str::trim)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
