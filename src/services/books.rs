//! Book service

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookQuery, CreateBook, ReplaceBook, UpdateBook, BOOK_FIELDS},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &BookQuery) -> AppResult<Vec<Book>> {
        let books = self
            .repository
            .books
            .list(|book| query.matches(book), query.page())
            .await;
        tracing::debug!("Listed {} books", books.len());
        Ok(books)
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Book> {
        self.repository.books.get(id).await
    }

    /// Fetch a book restricted to the comma separated `fields`.
    ///
    /// Names are trimmed; unknown names are ignored.
    pub async fn get_fields(&self, id: Uuid, fields: &str) -> AppResult<Map<String, Value>> {
        let book = self.get_by_id(id).await?;
        let Value::Object(mut all) = serde_json::to_value(&book)? else {
            return Err(AppError::Internal("Book did not serialize to an object".to_string()));
        };

        Ok(fields
            .split(',')
            .map(str::trim)
            .filter(|field| BOOK_FIELDS.contains(field))
            .filter_map(|field| all.remove(field).map(|value| (field.to_string(), value)))
            .collect())
    }

    pub async fn create(&self, data: CreateBook) -> AppResult<Book> {
        let book = self.repository.books.create(data).await?;
        tracing::info!("Created book {}", book.id);
        Ok(book)
    }

    pub async fn update(&self, id: Uuid, data: UpdateBook) -> AppResult<Book> {
        let book = self.repository.books.update(id, data).await?;
        tracing::info!("Updated book {}", id);
        Ok(book)
    }

    pub async fn replace(&self, id: Uuid, data: ReplaceBook) -> AppResult<Book> {
        let book = self.repository.books.replace(id, data).await?;
        tracing::info!("Replaced book {}", id);
        Ok(book)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.books.delete(id).await?;
        tracing::info!("Deleted book {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn service_with_book() -> (BooksService, Uuid) {
        let service = BooksService::new(Repository::new());
        let id = Uuid::new_v4();
        service
            .create(CreateBook {
                id,
                title: "A".into(),
                author: Some("B".into()),
                price: 10.0,
            })
            .await
            .unwrap();
        (service, id)
    }

    #[tokio::test]
    async fn test_get_fields_projects_and_ignores_unknown() {
        let (service, id) = service_with_book().await;

        let projected = service.get_fields(id, "title, price,isbn").await.unwrap();
        assert_eq!(Value::Object(projected), json!({ "title": "A", "price": 10.0 }));

        let empty = service.get_fields(id, "").await.unwrap();
        assert!(empty.is_empty());
    }

    #[tokio::test]
    async fn test_get_fields_keeps_null_author() {
        let (service, id) = service_with_book().await;
        service
            .update(id, UpdateBook { author: Some(None), ..Default::default() })
            .await
            .unwrap();

        let projected = service.get_fields(id, "author").await.unwrap();
        assert_eq!(projected.get("author"), Some(&Value::Null));
    }

    #[tokio::test]
    async fn test_list_slices_after_filtering() {
        let service = BooksService::new(Repository::new());
        for (title, price) in [("a", 5.0), ("b", 10.0), ("c", 15.0), ("d", 20.0), ("e", 25.0)] {
            service
                .create(CreateBook { id: Uuid::new_v4(), title: title.into(), author: None, price })
                .await
                .unwrap();
        }

        let query = BookQuery {
            min_price: Some(10.0),
            max_price: Some(20.0),
            limit: 1,
            offset: 1,
            ..Default::default()
        };
        let books = service.list(&query).await.unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "c");
    }
}
