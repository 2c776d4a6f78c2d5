//! Sample records loaded at startup

use uuid::{uuid, Uuid};

use super::Repository;
use crate::{
    error::AppResult,
    models::{book::CreateBook, library::CreateLibrary},
};

const BOOKS: [(Uuid, &str, &str, f64); 3] = [
    (uuid!("90143569-66f2-493d-a4a6-b519bb75d10a"), "Tgggg", "Fgggg", 33.33),
    (uuid!("de1288cc-5eb7-42b1-9e66-5a4b9a29a261"), "Bidenbook", "Ggggg", 1333.99),
    (uuid!("634af327-9d9d-49fd-a671-2cef810de932"), "Ddddddd", "Hhhhhh", 14.00),
];

const LIBRARIES: [(Uuid, &str, &str); 3] = [
    (uuid!("7c8f1060-db19-4e6f-b087-2f944c4aede5"), "BUT", "Butler Library"),
    (uuid!("cc8b6202-2568-411a-aa47-e138c7bd0f4e"), "AVY", "Avery Architectural & Fine Arts Library"),
    (uuid!("b8a518f6-c4ff-459d-b5c1-973d1b8b3c7d"), "SEL", "Science & Engineering Library"),
];

impl Repository {
    /// Load the demo books and libraries
    pub async fn seed_demo_data(&self) -> AppResult<()> {
        for (id, title, author, price) in BOOKS {
            self.books
                .create(CreateBook {
                    id,
                    title: title.to_string(),
                    author: Some(author.to_string()),
                    price,
                })
                .await?;
        }

        for (id, code, name) in LIBRARIES {
            self.libraries
                .create(CreateLibrary {
                    id,
                    code: code.to_string(),
                    name: name.to_string(),
                })
                .await?;
        }

        tracing::info!("Book IDs: {:?}", BOOKS.map(|(id, ..)| id));
        tracing::info!("Library IDs: {:?}", LIBRARIES.map(|(id, ..)| id));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_loads_books_and_libraries() {
        let repository = Repository::new();
        repository.seed_demo_data().await.unwrap();

        assert_eq!(repository.books.len().await, 3);
        assert_eq!(repository.libraries.len().await, 3);
        assert!(repository.persons.is_empty().await);

        let butler = repository.libraries.get(LIBRARIES[0].0).await.unwrap();
        assert_eq!(butler.code, "BUT");
    }

    #[tokio::test]
    async fn test_seeding_twice_conflicts() {
        let repository = Repository::new();
        repository.seed_demo_data().await.unwrap();
        assert!(repository.seed_demo_data().await.is_err());
    }
}
