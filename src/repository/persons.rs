//! Person storage rules

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::collection::{Page, Resource};
use crate::models::person::{CreatePerson, Person, PersonQuery, ReplacePerson, UpdatePerson};

impl Resource for Person {
    type Create = CreatePerson;
    type Update = UpdatePerson;
    type Replace = ReplacePerson;

    const NAME: &'static str = "Person";

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_create(data: CreatePerson, now: DateTime<Utc>) -> Self {
        Self {
            id: data.id,
            uni: data.uni,
            first_name: data.first_name,
            last_name: data.last_name,
            email: data.email,
            phone: data.phone,
            birth_date: data.birth_date,
            addresses: data.addresses,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, data: UpdatePerson) {
        if let Some(uni) = data.uni {
            self.uni = uni;
        }
        if let Some(first_name) = data.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = data.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = data.email {
            self.email = email;
        }
        if let Some(phone) = data.phone {
            self.phone = phone;
        }
        if let Some(birth_date) = data.birth_date {
            self.birth_date = birth_date;
        }
        if let Some(addresses) = data.addresses {
            self.addresses = addresses;
        }
    }

    fn from_replace(id: Uuid, data: ReplacePerson, now: DateTime<Utc>) -> Self {
        Self {
            id,
            uni: data.uni,
            first_name: data.first_name,
            last_name: data.last_name,
            email: data.email,
            phone: data.phone,
            birth_date: data.birth_date,
            addresses: data.addresses,
            created_at: now,
            updated_at: now,
        }
    }
}

impl PersonQuery {
    pub fn matches(&self, person: &Person) -> bool {
        fn eq(filter: &Option<String>, value: &str) -> bool {
            filter.as_deref().map_or(true, |wanted| wanted == value)
        }

        eq(&self.uni, &person.uni)
            && eq(&self.first_name, &person.first_name)
            && eq(&self.last_name, &person.last_name)
            && eq(&self.email, &person.email)
            && self.phone.as_ref().map_or(true, |phone| person.phone.as_ref() == Some(phone))
            && self.birth_date.as_deref().map_or(true, |date| {
                person.birth_date.map(|d| d.to_string()).as_deref() == Some(date)
            })
            // Nested filters match when any embedded address does
            && self.city.as_deref().map_or(true, |city| {
                person.addresses.iter().any(|address| address.city == city)
            })
            && self.country.as_deref().map_or(true, |country| {
                person.addresses.iter().any(|address| address.country == country)
            })
    }

    pub fn page(&self) -> Page {
        Page::new(self.offset, self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::address::CreateAddress;
    use chrono::NaiveDate;

    fn embedded(city: &str, country: &str) -> CreateAddress {
        CreateAddress {
            id: Uuid::new_v4(),
            street: "Main St".into(),
            city: city.into(),
            state: None,
            postal_code: None,
            country: country.into(),
        }
    }

    fn person() -> Person {
        Person::from_create(
            CreatePerson {
                id: Uuid::new_v4(),
                uni: "ab123".into(),
                first_name: "Ada".into(),
                last_name: "Lovelace".into(),
                email: "ada@example.com".into(),
                phone: None,
                birth_date: NaiveDate::from_ymd_opt(1815, 12, 10),
                addresses: vec![embedded("London", "UK"), embedded("Paris", "France")],
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_nested_city_matches_any_address() {
        let query = PersonQuery { city: Some("Paris".into()), ..Default::default() };
        assert!(query.matches(&person()));

        let query = PersonQuery { city: Some("Berlin".into()), ..Default::default() };
        assert!(!query.matches(&person()));
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let query = PersonQuery {
            city: Some("London".into()),
            country: Some("France".into()),
            ..Default::default()
        };
        // Different addresses may satisfy different nested filters
        assert!(query.matches(&person()));

        let query = PersonQuery {
            first_name: Some("Ada".into()),
            last_name: Some("Byron".into()),
            ..Default::default()
        };
        assert!(!query.matches(&person()));
    }

    #[test]
    fn test_birth_date_compared_as_iso_string() {
        let query = PersonQuery { birth_date: Some("1815-12-10".into()), ..Default::default() };
        assert!(query.matches(&person()));

        let query = PersonQuery { birth_date: Some("1815-12-11".into()), ..Default::default() };
        assert!(!query.matches(&person()));
    }

    #[test]
    fn test_update_merges_and_clears_nullable_fields() {
        let mut stored = person();
        stored.phone = Some("555-0100".into());

        stored.apply_update(UpdatePerson::default());
        assert_eq!(stored.phone.as_deref(), Some("555-0100"));
        assert_eq!(stored.addresses.len(), 2);

        stored.apply_update(UpdatePerson {
            email: Some("ada@lovelace.org".into()),
            phone: Some(None),
            birth_date: Some(None),
            addresses: Some(vec![embedded("Oxford", "UK")]),
            ..Default::default()
        });
        assert_eq!(stored.email, "ada@lovelace.org");
        assert_eq!(stored.first_name, "Ada");
        assert_eq!(stored.phone, None);
        assert_eq!(stored.birth_date, None);
        assert_eq!(stored.addresses.len(), 1);
        assert_eq!(stored.addresses[0].city, "Oxford");
    }

    #[test]
    fn test_replace_keeps_only_id() {
        let stored = person();
        let replaced = Person::from_replace(
            stored.id,
            ReplacePerson {
                uni: "cb99".into(),
                first_name: "Charles".into(),
                last_name: "Babbage".into(),
                email: "charles@example.com".into(),
                phone: None,
                birth_date: None,
                addresses: Vec::new(),
            },
            Utc::now(),
        );
        assert_eq!(replaced.id, stored.id);
        assert_eq!(replaced.uni, "cb99");
        assert_eq!(replaced.birth_date, None);
        assert!(replaced.addresses.is_empty());
        assert_eq!(replaced.created_at, replaced.updated_at);
    }
}
