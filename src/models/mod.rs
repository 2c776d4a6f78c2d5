//! Data models for the demo API
//!
//! Every resource comes in the same shapes: the stored record returned to
//! clients, a Create payload, an Update payload where every field is
//! optional, a Replace payload, and a list query.

pub mod address;
pub mod book;
pub mod library;
pub mod person;

use serde::Serialize;
use utoipa::ToSchema;

pub use address::{Address, AddressQuery, CreateAddress, ReplaceAddress, UpdateAddress};
pub use book::{Book, BookQuery, CreateBook, ReplaceBook, UpdateBook};
pub use library::{CreateLibrary, Library, LibraryQuery, ReplaceLibrary, UpdateLibrary};
pub use person::{CreatePerson, Person, PersonQuery, ReplacePerson, UpdatePerson};

/// Plain confirmation body
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
