//! Library storage rules
//!
//! Library codes and names are unique ignoring case; the check runs against
//! every other library on create, patch and replace.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::collection::{Page, Resource};
use crate::{
    error::{AppError, AppResult},
    models::library::{CreateLibrary, Library, LibraryQuery, ReplaceLibrary, UpdateLibrary},
};

impl Resource for Library {
    type Create = CreateLibrary;
    type Update = UpdateLibrary;
    type Replace = ReplaceLibrary;

    const NAME: &'static str = "Library";

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_create(data: CreateLibrary, now: DateTime<Utc>) -> Self {
        Self {
            id: data.id,
            code: data.code,
            name: data.name,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, data: UpdateLibrary) {
        if let Some(code) = data.code {
            self.code = code;
        }
        if let Some(name) = data.name {
            self.name = name;
        }
    }

    fn from_replace(id: Uuid, data: ReplaceLibrary, now: DateTime<Utc>) -> Self {
        Self::from_create(
            CreateLibrary {
                id,
                code: data.code,
                name: data.name,
            },
            now,
        )
    }

    fn check_unique(&self, other: &Self) -> AppResult<()> {
        if other.code.to_lowercase() == self.code.to_lowercase() {
            return Err(AppError::Conflict(
                "A library with this code already exists".to_string(),
            ));
        }
        if other.name.to_lowercase() == self.name.to_lowercase() {
            return Err(AppError::Conflict(
                "A library with this name already exists".to_string(),
            ));
        }
        Ok(())
    }
}

impl LibraryQuery {
    pub fn matches(&self, library: &Library) -> bool {
        let code = library.code.to_lowercase();
        let name = library.name.to_lowercase();

        self.code.as_ref().map_or(true, |wanted| wanted.to_lowercase() == code)
            && self.name.as_ref().map_or(true, |wanted| wanted.to_lowercase() == name)
            && self
                .name_contains
                .as_ref()
                .map_or(true, |needle| name.contains(&needle.to_lowercase()))
    }

    pub fn page(&self) -> Page {
        Page::new(self.offset, Some(self.limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::collection::Collection;

    fn create(code: &str, name: &str) -> CreateLibrary {
        CreateLibrary {
            id: Uuid::new_v4(),
            code: code.into(),
            name: name.into(),
        }
    }

    fn conflict_message(result: AppResult<Library>) -> String {
        match result {
            Err(AppError::Conflict(message)) => message,
            other => panic!("expected conflict, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_code_and_name_unique_ignoring_case() {
        let libraries = Collection::<Library>::new();
        libraries.create(create("BUT", "Butler Library")).await.unwrap();

        let message = conflict_message(libraries.create(create("but", "Other")).await);
        assert_eq!(message, "A library with this code already exists");

        let message = conflict_message(libraries.create(create("NEW", "BUTLER library")).await);
        assert_eq!(message, "A library with this name already exists");

        assert_eq!(libraries.len().await, 1);
    }

    #[tokio::test]
    async fn test_code_reported_before_name() {
        let libraries = Collection::<Library>::new();
        libraries.create(create("BUT", "Butler Library")).await.unwrap();

        let message = conflict_message(libraries.create(create("BUT", "Butler Library")).await);
        assert_eq!(message, "A library with this code already exists");
    }

    #[tokio::test]
    async fn test_patch_and_replace_may_collide_with_self() {
        let libraries = Collection::<Library>::new();
        let butler = libraries.create(create("BUT", "Butler Library")).await.unwrap();
        let avery = libraries.create(create("AVY", "Avery Library")).await.unwrap();

        let patched = libraries
            .update(butler.id, UpdateLibrary { code: Some("but".into()), name: None })
            .await
            .unwrap();
        assert_eq!(patched.code, "but");

        let replaced = libraries
            .replace(
                butler.id,
                ReplaceLibrary { code: "BUT".into(), name: "butler library".into() },
            )
            .await
            .unwrap();
        assert_eq!(replaced.name, "butler library");

        let message = conflict_message(
            libraries
                .update(butler.id, UpdateLibrary { code: None, name: Some("AVERY LIBRARY".into()) })
                .await,
        );
        assert_eq!(message, "A library with this name already exists");

        let message = conflict_message(
            libraries
                .replace(avery.id, ReplaceLibrary { code: "But".into(), name: "Avery".into() })
                .await,
        );
        assert_eq!(message, "A library with this code already exists");
    }

    #[test]
    fn test_query_matches_ignore_case() {
        let library = Library::from_create(create("SEL", "Science & Engineering Library"), Utc::now());

        let query = LibraryQuery { code: Some("sel".into()), ..Default::default() };
        assert!(query.matches(&library));

        let query = LibraryQuery { name_contains: Some("ENGINEERING".into()), ..Default::default() };
        assert!(query.matches(&library));

        let query = LibraryQuery { name: Some("Science".into()), ..Default::default() };
        assert!(!query.matches(&library));
    }
}
