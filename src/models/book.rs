//! Book model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Fields a client may select with `?fields=`
pub const BOOK_FIELDS: [&str; 6] = ["id", "title", "author", "price", "created_at", "updated_at"];

/// Book record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: Uuid,
    #[schema(example = "Trumpbook")]
    pub title: String,
    #[schema(example = "Trump")]
    pub author: Option<String>,
    /// Non-negative price
    #[schema(example = 33.33)]
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[validate(range(min = 0.0, message = "Price must be non-negative"))]
    pub price: f64,
}

/// Replace book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ReplaceBook {
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[validate(range(min = 0.0, message = "Price must be non-negative"))]
    pub price: f64,
}

/// Update book request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    pub title: Option<String>,
    /// `null` clears the author
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub author: Option<Option<String>>,
    #[validate(range(min = 0.0, message = "Price must be non-negative"))]
    pub price: Option<f64>,
}

fn default_limit() -> usize {
    10
}

/// Book query parameters
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// Filter by author (exact match)
    pub author: Option<String>,
    /// Filter by title containing substring (case-insensitive)
    pub title_contains: Option<String>,
    /// Minimum price, inclusive
    #[validate(range(min = 0.0, message = "min_price must be non-negative"))]
    pub min_price: Option<f64>,
    /// Maximum price, inclusive
    #[validate(range(min = 0.0, message = "max_price must be non-negative"))]
    pub max_price: Option<f64>,
    /// Number of results to return (1-20)
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 20, message = "limit must be between 1 and 20"))]
    pub limit: usize,
    /// Number of results to skip
    #[serde(default)]
    pub offset: usize,
}

impl Default for BookQuery {
    fn default() -> Self {
        Self {
            author: None,
            title_contains: None,
            min_price: None,
            max_price: None,
            limit: default_limit(),
            offset: 0,
        }
    }
}

/// Field selection for a single book
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookFieldsQuery {
    /// Fields to return separated by comma (e.g. "title,price")
    pub fields: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_negative_price_rejected() {
        let book: CreateBook = serde_json::from_value(json!({
            "id": Uuid::new_v4(),
            "title": "A",
            "price": -1.0,
        }))
        .unwrap();
        assert!(book.validate().is_err());

        let update: UpdateBook = serde_json::from_value(json!({ "price": -0.5 })).unwrap();
        assert!(update.validate().is_err());
    }

    #[test]
    fn test_query_limit_bounds() {
        let query = BookQuery { limit: 21, ..Default::default() };
        assert!(query.validate().is_err());

        let query = BookQuery { limit: 0, ..Default::default() };
        assert!(query.validate().is_err());

        assert!(BookQuery::default().validate().is_ok());
    }
}
