//! Repository layer: one in-memory collection per resource type

pub mod addresses;
pub mod books;
pub mod collection;
pub mod libraries;
pub mod persons;
pub mod seed;

pub use collection::{Collection, Page, Resource};

use crate::models::{Address, Book, Library, Person};

/// Main repository struct holding every collection.
///
/// Cloning is cheap and every clone shares the same underlying records.
#[derive(Clone, Default)]
pub struct Repository {
    pub addresses: Collection<Address>,
    pub persons: Collection<Person>,
    pub books: Collection<Book>,
    pub libraries: Collection<Library>,
}

impl Repository {
    /// Create a repository with empty collections
    pub fn new() -> Self {
        Self::default()
    }
}
