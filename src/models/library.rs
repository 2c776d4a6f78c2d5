//! Library model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Library record; `code` and `name` are unique ignoring case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Library {
    pub id: Uuid,
    #[schema(example = "BUT")]
    pub code: String,
    #[schema(example = "Butler Library")]
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create library request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLibrary {
    pub id: Uuid,
    #[validate(length(min = 1, message = "Code must not be empty"))]
    pub code: String,
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
}

/// Replace library request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ReplaceLibrary {
    #[validate(length(min = 1, message = "Code must not be empty"))]
    pub code: String,
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
}

/// Update library request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateLibrary {
    #[validate(length(min = 1, message = "Code must not be empty"))]
    pub code: Option<String>,
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
}

fn default_limit() -> usize {
    20
}

/// Library query parameters; every match ignores case
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LibraryQuery {
    /// Filter by code
    pub code: Option<String>,
    /// Filter by name
    pub name: Option<String>,
    /// Filter by name containing substring
    pub name_contains: Option<String>,
    /// Number of results to return (1-20)
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 20, message = "limit must be between 1 and 20"))]
    pub limit: usize,
    /// Number of results to skip
    #[serde(default)]
    pub offset: usize,
}

impl Default for LibraryQuery {
    fn default() -> Self {
        Self {
            code: None,
            name: None,
            name_contains: None,
            limit: default_limit(),
            offset: 0,
        }
    }
}
