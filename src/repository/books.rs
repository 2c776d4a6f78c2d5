//! Book storage rules

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::collection::{Page, Resource};
use crate::models::book::{Book, BookQuery, CreateBook, ReplaceBook, UpdateBook};

impl Resource for Book {
    type Create = CreateBook;
    type Update = UpdateBook;
    type Replace = ReplaceBook;

    const NAME: &'static str = "Book";

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_create(data: CreateBook, now: DateTime<Utc>) -> Self {
        Self {
            id: data.id,
            title: data.title,
            author: data.author,
            price: data.price,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, data: UpdateBook) {
        if let Some(title) = data.title {
            self.title = title;
        }
        if let Some(author) = data.author {
            self.author = author;
        }
        if let Some(price) = data.price {
            self.price = price;
        }
    }

    fn from_replace(id: Uuid, data: ReplaceBook, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: data.title,
            author: data.author,
            price: data.price,
            created_at: now,
            updated_at: now,
        }
    }
}

impl BookQuery {
    pub fn matches(&self, book: &Book) -> bool {
        let title_contains = self.title_contains.as_deref().map(str::to_lowercase);

        self.author
            .as_ref()
            .map_or(true, |author| book.author.as_ref() == Some(author))
            && title_contains
                .as_deref()
                .map_or(true, |needle| book.title.to_lowercase().contains(needle))
            && self.min_price.map_or(true, |min| book.price >= min)
            && self.max_price.map_or(true, |max| book.price <= max)
    }

    pub fn page(&self) -> Page {
        Page::new(self.offset, Some(self.limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, author: Option<&str>, price: f64) -> Book {
        Book::from_create(
            CreateBook {
                id: Uuid::new_v4(),
                title: title.into(),
                author: author.map(Into::into),
                price,
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let query = BookQuery {
            min_price: Some(10.0),
            max_price: Some(20.0),
            ..Default::default()
        };
        assert!(query.matches(&book("a", None, 10.0)));
        assert!(query.matches(&book("b", None, 20.0)));
        assert!(!query.matches(&book("c", None, 9.99)));
        assert!(!query.matches(&book("d", None, 20.01)));
    }

    #[test]
    fn test_title_contains_ignores_case() {
        let query = BookQuery { title_contains: Some("RUST".into()), ..Default::default() };
        assert!(query.matches(&book("The Rust Book", None, 1.0)));
        assert!(!query.matches(&book("The Go Book", None, 1.0)));
    }

    #[test]
    fn test_author_filter_excludes_books_without_author() {
        let query = BookQuery { author: Some("Klabnik".into()), ..Default::default() };
        assert!(query.matches(&book("x", Some("Klabnik"), 1.0)));
        assert!(!query.matches(&book("x", Some("klabnik"), 1.0)));
        assert!(!query.matches(&book("x", None, 1.0)));
    }

    #[test]
    fn test_patch_price_only() {
        let mut stored = book("A", Some("B"), 10.0);
        stored.apply_update(UpdateBook { price: Some(12.5), ..Default::default() });
        assert_eq!(stored.title, "A");
        assert_eq!(stored.author.as_deref(), Some("B"));
        assert_eq!(stored.price, 12.5);
    }

    #[test]
    fn test_replace_drops_omitted_author() {
        let stored = book("A", Some("B"), 10.0);
        let replaced = Book::from_replace(
            stored.id,
            ReplaceBook { title: "C".into(), author: None, price: 3.0 },
            Utc::now(),
        );
        assert_eq!(replaced.id, stored.id);
        assert_eq!(replaced.author, None);
    }
}
