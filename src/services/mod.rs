//! Business logic services

pub mod authors;
pub mod book_instances;
pub mod books;
pub mod dashboard;
pub mod genres;

use crate::{
    error::{AppError, AppResult},
    repository::Repository,
    validation::FormErrors,
};

/// Outcome of a create or update form submission
#[derive(Debug)]
pub enum Submission<T, F> {
    /// The record was persisted (or, for genres, an identical one already existed)
    Saved(T),
    /// Validation failed; `form` holds the sanitized values to re-render
    Rejected { form: F, errors: FormErrors },
}

/// Outcome of a delete submission
#[derive(Debug)]
pub enum Deletion<T> {
    /// The record is gone, whether removed now or already absent
    Deleted,
    /// Other records still reference it; `T` is what the confirmation page shows
    Blocked(T),
}

/// A lookup whose missing record is an expected answer, not an error
pub(crate) fn found<T>(result: AppResult<T>) -> AppResult<Option<T>> {
    match result {
        Ok(record) => Ok(Some(record)),
        Err(AppError::NotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub authors: authors::AuthorsService,
    pub genres: genres::GenresService,
    pub books: books::BooksService,
    pub book_instances: book_instances::BookInstancesService,
    pub dashboard: dashboard::DashboardService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            authors: authors::AuthorsService::new(repository.clone()),
            genres: genres::GenresService::new(repository.clone()),
            books: books::BooksService::new(repository.clone()),
            book_instances: book_instances::BookInstancesService::new(repository.clone()),
            dashboard: dashboard::DashboardService::new(repository),
        }
    }
}
