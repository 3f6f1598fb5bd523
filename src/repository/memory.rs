//! In-process store used by tests and by `database.backend = "memory"`.
//!
//! One `RwLock` guards all four tables, so a delete's child check and the
//! removal happen under the same write guard. Foreign references are checked
//! on write the way the database's constraints would, and violations surface
//! as `Internal` errors.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{AuthorStore, BookInstanceStore, BookStore, GenreStore};
use crate::{
    error::{AppError, AppResult},
    models::{
        Author, AuthorFields, Book, BookFields, BookInstance, BookInstanceFields, BookStatus,
        Genre, GenreFields,
    },
};

#[derive(Default)]
struct Tables {
    authors: HashMap<Uuid, Author>,
    genres: HashMap<Uuid, Genre>,
    books: HashMap<Uuid, Book>,
    book_instances: HashMap<Uuid, BookInstance>,
}

impl Tables {
    fn check_book_references(&self, data: &BookFields) -> AppResult<()> {
        if !self.authors.contains_key(&data.author_id) {
            return Err(AppError::Internal(format!(
                "Book references missing author {}",
                data.author_id
            )));
        }
        if let Some(missing) = data.genre_ids.iter().find(|id| !self.genres.contains_key(id)) {
            return Err(AppError::Internal(format!(
                "Book references missing genre {}",
                missing
            )));
        }
        Ok(())
    }

    fn check_instance_references(&self, data: &BookInstanceFields) -> AppResult<()> {
        if !self.books.contains_key(&data.book_id) {
            return Err(AppError::Internal(format!(
                "Book copy references missing book {}",
                data.book_id
            )));
        }
        Ok(())
    }

    fn books_sorted(&self, keep: impl Fn(&Book) -> bool) -> Vec<Book> {
        let mut books: Vec<Book> = self.books.values().filter(|b| keep(*b)).cloned().collect();
        books.sort_by(|a, b| a.title.cmp(&b.title));
        books
    }

    fn instances_sorted(&self, keep: impl Fn(&BookInstance) -> bool) -> Vec<BookInstance> {
        let mut instances: Vec<BookInstance> = self
            .book_instances
            .values()
            .filter(|i| keep(*i))
            .cloned()
            .collect();
        instances.sort_by(|a, b| (a.due_back, &a.imprint).cmp(&(b.due_back, &b.imprint)));
        instances
    }
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuthorStore for MemoryStore {
    async fn list(&self) -> AppResult<Vec<Author>> {
        let tables = self.tables.read().await;
        let mut authors: Vec<Author> = tables.authors.values().cloned().collect();
        authors.sort_by(|a, b| {
            (&a.family_name, &a.first_name).cmp(&(&b.family_name, &b.first_name))
        });
        Ok(authors)
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Author> {
        self.tables
            .read()
            .await
            .authors
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))
    }

    async fn create(&self, data: &AuthorFields) -> AppResult<Author> {
        let author = Author {
            id: Uuid::new_v4(),
            first_name: data.first_name.clone(),
            family_name: data.family_name.clone(),
            date_of_birth: data.date_of_birth,
            date_of_death: data.date_of_death,
        };
        self.tables.write().await.authors.insert(author.id, author.clone());
        Ok(author)
    }

    async fn update(&self, id: Uuid, data: &AuthorFields) -> AppResult<Author> {
        let mut tables = self.tables.write().await;
        let author = tables
            .authors
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))?;
        author.first_name = data.first_name.clone();
        author.family_name = data.family_name.clone();
        author.date_of_birth = data.date_of_birth;
        author.date_of_death = data.date_of_death;
        Ok(author.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut tables = self.tables.write().await;
        if !tables.authors.contains_key(&id) {
            return Err(AppError::NotFound(format!("Author {} not found", id)));
        }
        let books = tables.books.values().filter(|b| b.author_id == id).count();
        if books > 0 {
            return Err(AppError::Conflict(format!(
                "Author {} is referenced by {} book(s)",
                id, books
            )));
        }
        tables.authors.remove(&id);
        Ok(())
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.tables.read().await.authors.len() as i64)
    }
}

#[async_trait]
impl GenreStore for MemoryStore {
    async fn list(&self) -> AppResult<Vec<Genre>> {
        let tables = self.tables.read().await;
        let mut genres: Vec<Genre> = tables.genres.values().cloned().collect();
        genres.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(genres)
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Genre> {
        self.tables
            .read()
            .await
            .genres
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Genre {} not found", id)))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Genre>> {
        Ok(self
            .tables
            .read()
            .await
            .genres
            .values()
            .find(|g| g.name == name)
            .cloned())
    }

    async fn create(&self, data: &GenreFields) -> AppResult<Genre> {
        let genre = Genre {
            id: Uuid::new_v4(),
            name: data.name.clone(),
        };
        self.tables.write().await.genres.insert(genre.id, genre.clone());
        Ok(genre)
    }

    async fn update(&self, id: Uuid, data: &GenreFields) -> AppResult<Genre> {
        let mut tables = self.tables.write().await;
        let genre = tables
            .genres
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Genre {} not found", id)))?;
        genre.name = data.name.clone();
        Ok(genre.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut tables = self.tables.write().await;
        if !tables.genres.contains_key(&id) {
            return Err(AppError::NotFound(format!("Genre {} not found", id)));
        }
        let books = tables
            .books
            .values()
            .filter(|b| b.genre_ids.contains(&id))
            .count();
        if books > 0 {
            return Err(AppError::Conflict(format!(
                "Genre {} is referenced by {} book(s)",
                id, books
            )));
        }
        tables.genres.remove(&id);
        Ok(())
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.tables.read().await.genres.len() as i64)
    }
}

#[async_trait]
impl BookStore for MemoryStore {
    async fn list(&self) -> AppResult<Vec<Book>> {
        Ok(self.tables.read().await.books_sorted(|_| true))
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Book> {
        self.tables
            .read()
            .await
            .books
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    async fn find_by_author(&self, author_id: Uuid) -> AppResult<Vec<Book>> {
        Ok(self
            .tables
            .read()
            .await
            .books_sorted(|b| b.author_id == author_id))
    }

    async fn find_by_genre(&self, genre_id: Uuid) -> AppResult<Vec<Book>> {
        Ok(self
            .tables
            .read()
            .await
            .books_sorted(|b| b.genre_ids.contains(&genre_id)))
    }

    async fn create(&self, data: &BookFields) -> AppResult<Book> {
        let mut tables = self.tables.write().await;
        tables.check_book_references(data)?;
        let book = Book {
            id: Uuid::new_v4(),
            title: data.title.clone(),
            author_id: data.author_id,
            summary: data.summary.clone(),
            isbn: data.isbn.clone(),
            genre_ids: data.genre_ids.clone(),
        };
        tables.books.insert(book.id, book.clone());
        Ok(book)
    }

    async fn update(&self, id: Uuid, data: &BookFields) -> AppResult<Book> {
        let mut tables = self.tables.write().await;
        if !tables.books.contains_key(&id) {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        tables.check_book_references(data)?;
        let book = Book {
            id,
            title: data.title.clone(),
            author_id: data.author_id,
            summary: data.summary.clone(),
            isbn: data.isbn.clone(),
            genre_ids: data.genre_ids.clone(),
        };
        tables.books.insert(id, book.clone());
        Ok(book)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut tables = self.tables.write().await;
        if !tables.books.contains_key(&id) {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        let copies = tables
            .book_instances
            .values()
            .filter(|i| i.book_id == id)
            .count();
        if copies > 0 {
            return Err(AppError::Conflict(format!(
                "Book {} still has {} copy(ies)",
                id, copies
            )));
        }
        tables.books.remove(&id);
        Ok(())
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.tables.read().await.books.len() as i64)
    }
}

#[async_trait]
impl BookInstanceStore for MemoryStore {
    async fn list(&self) -> AppResult<Vec<BookInstance>> {
        Ok(self.tables.read().await.instances_sorted(|_| true))
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<BookInstance> {
        self.tables
            .read()
            .await
            .book_instances
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Book copy {} not found", id)))
    }

    async fn find_by_book(&self, book_id: Uuid) -> AppResult<Vec<BookInstance>> {
        Ok(self
            .tables
            .read()
            .await
            .instances_sorted(|i| i.book_id == book_id))
    }

    async fn create(&self, data: &BookInstanceFields) -> AppResult<BookInstance> {
        let mut tables = self.tables.write().await;
        tables.check_instance_references(data)?;
        let instance = BookInstance {
            id: Uuid::new_v4(),
            book_id: data.book_id,
            imprint: data.imprint.clone(),
            status: data.status,
            due_back: data.due_back,
        };
        tables.book_instances.insert(instance.id, instance.clone());
        Ok(instance)
    }

    async fn update(&self, id: Uuid, data: &BookInstanceFields) -> AppResult<BookInstance> {
        let mut tables = self.tables.write().await;
        if !tables.book_instances.contains_key(&id) {
            return Err(AppError::NotFound(format!("Book copy {} not found", id)));
        }
        tables.check_instance_references(data)?;
        let instance = BookInstance {
            id,
            book_id: data.book_id,
            imprint: data.imprint.clone(),
            status: data.status,
            due_back: data.due_back,
        };
        tables.book_instances.insert(id, instance.clone());
        Ok(instance)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.tables
            .write()
            .await
            .book_instances
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Book copy {} not found", id)))
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.tables.read().await.book_instances.len() as i64)
    }

    async fn count_by_status(&self, status: BookStatus) -> AppResult<i64> {
        Ok(self
            .tables
            .read()
            .await
            .book_instances
            .values()
            .filter(|i| i.status == status)
            .count() as i64)
    }
}
