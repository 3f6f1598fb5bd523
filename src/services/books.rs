//! Books service

use std::collections::HashMap;

use uuid::Uuid;

use super::{found, Deletion, Submission};
use crate::{
    error::{AppError, AppResult},
    models::{Author, Book, BookFields, BookForm, BookInstance, Genre},
    repository::Repository,
    validation::{self, FormErrors},
};

/// A book with its author resolved, for the list page
#[derive(Debug, Clone)]
pub struct BookListing {
    pub book: Book,
    pub author: Option<Author>,
}

/// Everything the book detail page shows
#[derive(Debug, Clone)]
pub struct BookDetail {
    pub book: Book,
    pub author: Author,
    pub genres: Vec<Genre>,
    pub instances: Vec<BookInstance>,
}

/// A genre checkbox on the book form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreChoice {
    pub genre: Genre,
    pub checked: bool,
}

/// Option lists for the book form's author select and genre checkboxes
#[derive(Debug, Clone, Default)]
pub struct BookFormOptions {
    pub authors: Vec<Author>,
    pub genres: Vec<GenreChoice>,
}

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<BookListing>> {
        let (books, authors) = tokio::try_join!(
            self.repository.books.list(),
            self.repository.authors.list(),
        )?;

        let authors: HashMap<Uuid, Author> = authors.into_iter().map(|a| (a.id, a)).collect();
        Ok(books
            .into_iter()
            .map(|book| BookListing {
                author: authors.get(&book.author_id).cloned(),
                book,
            })
            .collect())
    }

    pub async fn detail(&self, id: Uuid) -> AppResult<BookDetail> {
        let (book, instances) = tokio::try_join!(
            self.repository.books.get_by_id(id),
            self.repository.book_instances.find_by_book(id),
        )?;
        let (author, genres) = tokio::try_join!(
            self.repository.authors.get_by_id(book.author_id),
            self.repository.genres.list(),
        )?;

        let genres = genres
            .into_iter()
            .filter(|g| book.genre_ids.contains(&g.id))
            .collect();
        Ok(BookDetail {
            book,
            author,
            genres,
            instances,
        })
    }

    /// Authors and genres for the form, with `form`'s genres checked
    pub async fn form_options(&self, form: &BookForm) -> AppResult<BookFormOptions> {
        let (authors, genres) = tokio::try_join!(
            self.repository.authors.list(),
            self.repository.genres.list(),
        )?;
        Ok(BookFormOptions {
            authors,
            genres: genres
                .into_iter()
                .map(|genre| GenreChoice {
                    checked: form.has_genre(genre.id),
                    genre,
                })
                .collect(),
        })
    }

    pub async fn create(&self, form: BookForm) -> AppResult<Submission<Book, BookForm>> {
        let form = form.sanitize();
        let fields = match form.validate() {
            Ok(fields) => fields,
            Err(errors) => return Ok(Submission::Rejected { form, errors }),
        };

        let errors = self.unknown_references(&fields).await?;
        if !errors.is_empty() {
            return Ok(Submission::Rejected { form, errors });
        }

        let book = self.repository.books.create(&fields).await?;
        tracing::info!("Created book {} ({})", book.id, book.title);
        Ok(Submission::Saved(book))
    }

    /// Selected author and genres that name no stored record
    async fn unknown_references(&self, fields: &BookFields) -> AppResult<FormErrors> {
        let (author, genres) = tokio::try_join!(
            async { found(self.repository.authors.get_by_id(fields.author_id).await) },
            self.repository.genres.list(),
        )?;

        let mut errors = FormErrors::new();
        if author.is_none() {
            errors.push(
                "author",
                validation::rule_error("reference", "Author is not a valid selection"),
            );
        }
        if fields
            .genre_ids
            .iter()
            .any(|id| !genres.iter().any(|g| g.id == *id))
        {
            errors.push(
                "genre",
                validation::rule_error("reference", "Genre is not a valid selection"),
            );
        }
        Ok(errors)
    }

    /// Update form pre-filled from the stored book, with its genres checked
    pub async fn edit_form(&self, id: Uuid) -> AppResult<(BookForm, BookFormOptions)> {
        let (book, authors, genres) = tokio::try_join!(
            self.repository.books.get_by_id(id),
            self.repository.authors.list(),
            self.repository.genres.list(),
        )?;

        let options = BookFormOptions {
            authors,
            genres: genres
                .into_iter()
                .map(|genre| GenreChoice {
                    checked: book.genre_ids.contains(&genre.id),
                    genre,
                })
                .collect(),
        };
        Ok((BookForm::from(&book), options))
    }

    pub async fn update(&self, id: Uuid, form: BookForm) -> AppResult<Submission<Book, BookForm>> {
        let form = form.sanitize();
        let fields = match form.validate() {
            Ok(fields) => fields,
            Err(errors) => return Ok(Submission::Rejected { form, errors }),
        };

        let errors = self.unknown_references(&fields).await?;
        if !errors.is_empty() {
            return Ok(Submission::Rejected { form, errors });
        }

        let book = self.repository.books.update(id, &fields).await?;
        tracing::info!("Updated book {}", book.id);
        Ok(Submission::Saved(book))
    }

    /// The book together with its copies, for the delete confirmation page
    pub async fn delete_view(&self, id: Uuid) -> AppResult<(Book, Vec<BookInstance>)> {
        tokio::try_join!(
            self.repository.books.get_by_id(id),
            self.repository.book_instances.find_by_book(id),
        )
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<Deletion<(Book, Vec<BookInstance>)>> {
        match self.repository.books.delete(id).await {
            Ok(()) => {
                tracing::info!("Deleted book {}", id);
                Ok(Deletion::Deleted)
            }
            Err(AppError::NotFound(_)) => {
                tracing::debug!("Book {} already absent", id);
                Ok(Deletion::Deleted)
            }
            Err(AppError::Conflict(reason)) => {
                tracing::warn!("Refused to delete book: {}", reason);
                Ok(Deletion::Blocked(self.delete_view(id).await?))
            }
            Err(e) => Err(e),
        }
    }
}
