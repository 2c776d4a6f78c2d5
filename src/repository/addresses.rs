//! Address storage rules

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::collection::{Page, Resource};
use crate::models::address::{Address, AddressQuery, CreateAddress, ReplaceAddress, UpdateAddress};

impl Resource for Address {
    type Create = CreateAddress;
    type Update = UpdateAddress;
    type Replace = ReplaceAddress;

    const NAME: &'static str = "Address";

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_create(data: CreateAddress, now: DateTime<Utc>) -> Self {
        Self {
            id: data.id,
            street: data.street,
            city: data.city,
            state: data.state,
            postal_code: data.postal_code,
            country: data.country,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, data: UpdateAddress) {
        if let Some(street) = data.street {
            self.street = street;
        }
        if let Some(city) = data.city {
            self.city = city;
        }
        if let Some(state) = data.state {
            self.state = state;
        }
        if let Some(postal_code) = data.postal_code {
            self.postal_code = postal_code;
        }
        if let Some(country) = data.country {
            self.country = country;
        }
    }

    fn from_replace(id: Uuid, data: ReplaceAddress, now: DateTime<Utc>) -> Self {
        Self::from_create(
            CreateAddress {
                id,
                street: data.street,
                city: data.city,
                state: data.state,
                postal_code: data.postal_code,
                country: data.country,
            },
            now,
        )
    }
}

impl AddressQuery {
    pub fn matches(&self, address: &Address) -> bool {
        fn eq(filter: &Option<String>, value: &str) -> bool {
            filter.as_deref().map_or(true, |wanted| wanted == value)
        }

        eq(&self.street, &address.street)
            && eq(&self.city, &address.city)
            && self.state.as_ref().map_or(true, |state| address.state.as_ref() == Some(state))
            && self
                .postal_code
                .as_ref()
                .map_or(true, |code| address.postal_code.as_ref() == Some(code))
            && eq(&self.country, &address.country)
    }

    pub fn page(&self) -> Page {
        Page::new(self.offset, self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(state: Option<&str>) -> Address {
        Address::from_create(
            CreateAddress {
                id: Uuid::new_v4(),
                street: "116th St".into(),
                city: "New York".into(),
                state: state.map(Into::into),
                postal_code: None,
                country: "USA".into(),
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_matches_exact_and_case_sensitive() {
        let query = AddressQuery { city: Some("New York".into()), ..Default::default() };
        assert!(query.matches(&address(None)));

        let query = AddressQuery { city: Some("new york".into()), ..Default::default() };
        assert!(!query.matches(&address(None)));
    }

    #[test]
    fn test_optional_field_filter_skips_missing_values() {
        let query = AddressQuery { state: Some("NY".into()), ..Default::default() };
        assert!(query.matches(&address(Some("NY"))));
        assert!(!query.matches(&address(None)));
    }

    #[test]
    fn test_update_clears_nullable_field_only_when_null() {
        let mut stored = address(Some("NY"));
        stored.apply_update(UpdateAddress { city: Some("Albany".into()), ..Default::default() });
        assert_eq!(stored.state.as_deref(), Some("NY"));
        assert_eq!(stored.city, "Albany");

        stored.apply_update(UpdateAddress { state: Some(None), ..Default::default() });
        assert_eq!(stored.state, None);
    }

    #[test]
    fn test_replace_keeps_only_id() {
        let mut stored = address(Some("NY"));
        stored.postal_code = Some("10027".into());

        let replaced = Address::from_replace(
            stored.id,
            ReplaceAddress {
                street: "Rue de Rivoli".into(),
                city: "Paris".into(),
                state: None,
                postal_code: None,
                country: "France".into(),
            },
            Utc::now(),
        );
        assert_eq!(replaced.id, stored.id);
        assert_eq!(replaced.city, "Paris");
        assert_eq!(replaced.state, None);
        assert_eq!(replaced.postal_code, None);
    }
}
