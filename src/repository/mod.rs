//! Repository layer for catalog persistence.
//!
//! Each entity has a store trait. [`Repository::postgres`] backs them with
//! sqlx repositories over one pool; [`Repository::in_memory`] backs all four
//! with a single [`memory::MemoryStore`].

pub mod authors;
pub mod book_instances;
pub mod books;
pub mod genres;
pub mod memory;

use std::sync::Arc;

use sqlx::{Pool, Postgres};

pub use authors::AuthorStore;
pub use book_instances::BookInstanceStore;
pub use books::BookStore;
pub use genres::GenreStore;

/// Main repository struct holding one store per entity
#[derive(Clone)]
pub struct Repository {
    pub authors: Arc<dyn AuthorStore>,
    pub genres: Arc<dyn GenreStore>,
    pub books: Arc<dyn BookStore>,
    pub book_instances: Arc<dyn BookInstanceStore>,
}

impl Repository {
    /// Create a repository backed by the given database pool
    pub fn postgres(pool: Pool<Postgres>) -> Self {
        Self {
            authors: Arc::new(authors::AuthorsRepository::new(pool.clone())),
            genres: Arc::new(genres::GenresRepository::new(pool.clone())),
            books: Arc::new(books::BooksRepository::new(pool.clone())),
            book_instances: Arc::new(book_instances::BookInstancesRepository::new(pool)),
        }
    }

    /// Create a repository whose records live in process memory
    pub fn in_memory() -> Self {
        let store = Arc::new(memory::MemoryStore::new());
        Self {
            authors: store.clone(),
            genres: store.clone(),
            books: store.clone(),
            book_instances: store,
        }
    }
}
