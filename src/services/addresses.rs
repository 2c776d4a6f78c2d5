//! Address service

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::address::{Address, AddressQuery, CreateAddress, ReplaceAddress, UpdateAddress},
    repository::Repository,
};

#[derive(Clone)]
pub struct AddressesService {
    repository: Repository,
}

impl AddressesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &AddressQuery) -> AppResult<Vec<Address>> {
        let addresses = self
            .repository
            .addresses
            .list(|address| query.matches(address), query.page())
            .await;
        tracing::debug!("Listed {} addresses", addresses.len());
        Ok(addresses)
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Address> {
        self.repository.addresses.get(id).await
    }

    pub async fn create(&self, data: CreateAddress) -> AppResult<Address> {
        let address = self.repository.addresses.create(data).await?;
        tracing::info!("Created address {}", address.id);
        Ok(address)
    }

    pub async fn update(&self, id: Uuid, data: UpdateAddress) -> AppResult<Address> {
        let address = self.repository.addresses.update(id, data).await?;
        tracing::info!("Updated address {}", id);
        Ok(address)
    }

    pub async fn replace(&self, id: Uuid, data: ReplaceAddress) -> AppResult<Address> {
        let address = self.repository.addresses.replace(id, data).await?;
        tracing::info!("Replaced address {}", id);
        Ok(address)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.addresses.delete(id).await?;
        tracing::info!("Deleted address {}", id);
        Ok(())
    }
}
