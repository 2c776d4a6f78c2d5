//! Person model

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::address::CreateAddress;

/// University identifier: 2-3 lowercase letters followed by 1-4 digits
static UNI_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]{2,3}\d{1,4}$").expect("valid UNI regex"));

/// Person record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Person {
    pub id: Uuid,
    /// Columbia University UNI
    pub uni: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    /// Addresses embedded by value, not linked to the address collection
    pub addresses: Vec<CreateAddress>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create person request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePerson {
    pub id: Uuid,
    #[validate(regex(path = *UNI_REGEX, message = "UNI must be 2-3 lowercase letters followed by 1-4 digits"))]
    pub uni: String,
    #[validate(length(min = 1, message = "First name must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name must not be empty"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    #[validate(nested)]
    pub addresses: Vec<CreateAddress>,
}

/// Replace person request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ReplacePerson {
    #[validate(regex(path = *UNI_REGEX, message = "UNI must be 2-3 lowercase letters followed by 1-4 digits"))]
    pub uni: String,
    #[validate(length(min = 1, message = "First name must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name must not be empty"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    #[validate(nested)]
    pub addresses: Vec<CreateAddress>,
}

/// Update person request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdatePerson {
    #[validate(regex(path = *UNI_REGEX, message = "UNI must be 2-3 lowercase letters followed by 1-4 digits"))]
    pub uni: Option<String>,
    #[validate(length(min = 1, message = "First name must not be empty"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, message = "Last name must not be empty"))]
    pub last_name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub phone: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<NaiveDate>)]
    pub birth_date: Option<Option<NaiveDate>>,
    /// Replaces the whole address list when present
    #[validate(nested)]
    pub addresses: Option<Vec<CreateAddress>>,
}

/// Person query parameters
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PersonQuery {
    /// Filter by Columbia UNI
    pub uni: Option<String>,
    /// Filter by first name
    pub first_name: Option<String>,
    /// Filter by last name
    pub last_name: Option<String>,
    /// Filter by email
    pub email: Option<String>,
    /// Filter by phone number
    pub phone: Option<String>,
    /// Filter by date of birth (YYYY-MM-DD)
    pub birth_date: Option<String>,
    /// Filter by city of at least one address
    pub city: Option<String>,
    /// Filter by country of at least one address
    pub country: Option<String>,
    /// Number of results to return
    #[validate(range(min = 1, message = "limit must be at least 1"))]
    pub limit: Option<usize>,
    /// Number of results to skip
    #[serde(default)]
    pub offset: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(uni: &str, email: &str) -> serde_json::Value {
        json!({
            "id": Uuid::new_v4(),
            "uni": uni,
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": email,
        })
    }

    #[test]
    fn test_valid_person_passes() {
        let person: CreatePerson = serde_json::from_value(payload("al1234", "ada@example.com")).unwrap();
        assert!(person.validate().is_ok());
        assert!(person.addresses.is_empty());
    }

    #[test]
    fn test_bad_uni_and_email_rejected() {
        let person: CreatePerson = serde_json::from_value(payload("ADA", "ada@example.com")).unwrap();
        assert!(person.validate().is_err());

        let person: CreatePerson = serde_json::from_value(payload("al1", "not-an-email")).unwrap();
        assert!(person.validate().is_err());
    }

    #[test]
    fn test_nested_addresses_validated() {
        let mut value = payload("al1", "ada@example.com");
        value["addresses"] = json!([{
            "id": Uuid::new_v4(),
            "street": "",
            "city": "New York",
            "country": "USA",
        }]);
        let person: CreatePerson = serde_json::from_value(value).unwrap();
        assert!(person.validate().is_err());
    }

    #[test]
    fn test_update_distinguishes_null_from_absent() {
        let update: UpdatePerson = serde_json::from_value(json!({ "phone": null })).unwrap();
        assert_eq!(update.phone, Some(None));
        assert_eq!(update.birth_date, None);
    }
}
