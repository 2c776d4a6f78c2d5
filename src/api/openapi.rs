//! OpenAPI documentation

use axum::Json;
use utoipa::OpenApi;

use crate::api::{addresses, books, health, libraries, persons};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Person/Address/Book/Library API",
        version = "0.1.0",
        description = "Demo REST API for Person, Address, Book, and Library records"
    ),
    paths(
        // Service
        crate::api::root,
        health::health_check,
        health::health_check_with_echo,
        // Addresses
        addresses::list_addresses,
        addresses::get_address,
        addresses::create_address,
        addresses::update_address,
        addresses::replace_address,
        addresses::delete_address,
        // Persons
        persons::list_persons,
        persons::get_person,
        persons::create_person,
        persons::update_person,
        persons::replace_person,
        persons::delete_person,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::replace_book,
        books::delete_book,
        // Libraries
        libraries::list_libraries,
        libraries::get_library,
        libraries::create_library,
        libraries::update_library,
        libraries::replace_library,
        libraries::delete_library,
    ),
    components(
        schemas(
            // Addresses
            crate::models::address::Address,
            crate::models::address::CreateAddress,
            crate::models::address::UpdateAddress,
            crate::models::address::ReplaceAddress,
            // Persons
            crate::models::person::Person,
            crate::models::person::CreatePerson,
            crate::models::person::UpdatePerson,
            crate::models::person::ReplacePerson,
            // Books
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            crate::models::book::ReplaceBook,
            // Libraries
            crate::models::library::Library,
            crate::models::library::CreateLibrary,
            crate::models::library::UpdateLibrary,
            crate::models::library::ReplaceLibrary,
            // Service
            crate::models::MessageResponse,
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check and banner"),
        (name = "addresses", description = "Address management"),
        (name = "persons", description = "Person management"),
        (name = "books", description = "Book management"),
        (name = "libraries", description = "Library management")
    )
)]
pub struct ApiDoc;

/// Serve the generated OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_resource() {
        let doc = ApiDoc::openapi();
        for path in ["/health", "/addresses/{id}", "/persons", "/books/{id}", "/libraries"] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
