//! Business logic services

pub mod addresses;
pub mod books;
pub mod libraries;
pub mod persons;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub addresses: addresses::AddressesService,
    pub persons: persons::PersonsService,
    pub books: books::BooksService,
    pub libraries: libraries::LibrariesService,
}

impl Services {
    /// Create all services over the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            addresses: addresses::AddressesService::new(repository.clone()),
            persons: persons::PersonsService::new(repository.clone()),
            books: books::BooksService::new(repository.clone()),
            libraries: libraries::LibrariesService::new(repository),
        }
    }
}
