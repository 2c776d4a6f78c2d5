//! Person service

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::person::{Person, PersonQuery, CreatePerson, ReplacePerson, UpdatePerson},
    repository::Repository,
};

#[derive(Clone)]
pub struct PersonsService {
    repository: Repository,
}

impl PersonsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &PersonQuery) -> AppResult<Vec<Person>> {
        let persons = self
            .repository
            .persons
            .list(|person| query.matches(person), query.page())
            .await;
        tracing::debug!("Listed {} persons", persons.len());
        Ok(persons)
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Person> {
        self.repository.persons.get(id).await
    }

    pub async fn create(&self, data: CreatePerson) -> AppResult<Person> {
        let person = self.repository.persons.create(data).await?;
        tracing::info!("Created person {}", person.id);
        Ok(person)
    }

    pub async fn update(&self, id: Uuid, data: UpdatePerson) -> AppResult<Person> {
        let person = self.repository.persons.update(id, data).await?;
        tracing::info!("Updated person {}", id);
        Ok(person)
    }

    pub async fn replace(&self, id: Uuid, data: ReplacePerson) -> AppResult<Person> {
        let person = self.repository.persons.replace(id, data).await?;
        tracing::info!("Replaced person {}", id);
        Ok(person)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.persons.delete(id).await?;
        tracing::info!("Deleted person {}", id);
        Ok(())
    }
}
