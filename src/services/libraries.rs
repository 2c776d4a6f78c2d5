//! Library service
//!
//! Code and name uniqueness is enforced by the library collection itself, so
//! conflicts surface from every write below.

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::library::{Library, LibraryQuery, CreateLibrary, ReplaceLibrary, UpdateLibrary},
    repository::Repository,
};

#[derive(Clone)]
pub struct LibrariesService {
    repository: Repository,
}

impl LibrariesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &LibraryQuery) -> AppResult<Vec<Library>> {
        let libraries = self
            .repository
            .libraries
            .list(|library| query.matches(library), query.page())
            .await;
        tracing::debug!("Listed {} libraries", libraries.len());
        Ok(libraries)
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Library> {
        self.repository.libraries.get(id).await
    }

    pub async fn create(&self, data: CreateLibrary) -> AppResult<Library> {
        let library = self.repository.libraries.create(data).await?;
        tracing::info!("Created library {}", library.id);
        Ok(library)
    }

    pub async fn update(&self, id: Uuid, data: UpdateLibrary) -> AppResult<Library> {
        let library = self.repository.libraries.update(id, data).await?;
        tracing::info!("Updated library {}", id);
        Ok(library)
    }

    pub async fn replace(&self, id: Uuid, data: ReplaceLibrary) -> AppResult<Library> {
        let library = self.repository.libraries.replace(id, data).await?;
        tracing::info!("Replaced library {}", id);
        Ok(library)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.libraries.delete(id).await?;
        tracing::info!("Deleted library {}", id);
        Ok(())
    }
}
