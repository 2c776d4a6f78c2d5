//! Address model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Address record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Address {
    pub id: Uuid,
    pub street: String,
    pub city: String,
    /// State or region
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create address request, also used for addresses embedded in a person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAddress {
    pub id: Uuid,
    #[validate(length(min = 1, message = "Street must not be empty"))]
    pub street: String,
    #[validate(length(min = 1, message = "City must not be empty"))]
    pub city: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[validate(length(min = 1, message = "Country must not be empty"))]
    pub country: String,
}

/// Replace address request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ReplaceAddress {
    #[validate(length(min = 1, message = "Street must not be empty"))]
    pub street: String,
    #[validate(length(min = 1, message = "City must not be empty"))]
    pub city: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[validate(length(min = 1, message = "Country must not be empty"))]
    pub country: String,
}

/// Update address request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateAddress {
    #[validate(length(min = 1, message = "Street must not be empty"))]
    pub street: Option<String>,
    #[validate(length(min = 1, message = "City must not be empty"))]
    pub city: Option<String>,
    /// `null` clears the state
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub state: Option<Option<String>>,
    /// `null` clears the postal code
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub postal_code: Option<Option<String>>,
    #[validate(length(min = 1, message = "Country must not be empty"))]
    pub country: Option<String>,
}

/// Address query parameters
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AddressQuery {
    /// Filter by street
    pub street: Option<String>,
    /// Filter by city
    pub city: Option<String>,
    /// Filter by state/region
    pub state: Option<String>,
    /// Filter by postal code
    pub postal_code: Option<String>,
    /// Filter by country
    pub country: Option<String>,
    /// Number of results to return
    #[validate(range(min = 1, message = "limit must be at least 1"))]
    pub limit: Option<usize>,
    /// Number of results to skip
    #[serde(default)]
    pub offset: usize,
}
