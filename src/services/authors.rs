//! Authors service

use uuid::Uuid;

use super::{Deletion, Submission};
use crate::{
    error::{AppError, AppResult},
    models::{Author, AuthorForm, Book},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
}

impl AuthorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Author>> {
        self.repository.authors.list().await
    }

    /// The author together with the books written by them
    pub async fn detail(&self, id: Uuid) -> AppResult<(Author, Vec<Book>)> {
        tokio::try_join!(
            self.repository.authors.get_by_id(id),
            self.repository.books.find_by_author(id),
        )
    }

    pub async fn create(&self, form: AuthorForm) -> AppResult<Submission<Author, AuthorForm>> {
        let form = form.sanitize();
        let fields = match form.validate() {
            Ok(fields) => fields,
            Err(errors) => return Ok(Submission::Rejected { form, errors }),
        };

        let author = self.repository.authors.create(&fields).await?;
        tracing::info!("Created author {} ({})", author.id, author.name());
        Ok(Submission::Saved(author))
    }

    /// Update form pre-filled from the stored author
    pub async fn edit_form(&self, id: Uuid) -> AppResult<AuthorForm> {
        let author = self.repository.authors.get_by_id(id).await?;
        Ok(AuthorForm::from(&author))
    }

    pub async fn update(&self, id: Uuid, form: AuthorForm) -> AppResult<Submission<Author, AuthorForm>> {
        let form = form.sanitize();
        let fields = match form.validate() {
            Ok(fields) => fields,
            Err(errors) => return Ok(Submission::Rejected { form, errors }),
        };

        let author = self.repository.authors.update(id, &fields).await?;
        tracing::info!("Updated author {}", author.id);
        Ok(Submission::Saved(author))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<Deletion<(Author, Vec<Book>)>> {
        match self.repository.authors.delete(id).await {
            Ok(()) => {
                tracing::info!("Deleted author {}", id);
                Ok(Deletion::Deleted)
            }
            Err(AppError::NotFound(_)) => {
                tracing::debug!("Author {} already absent", id);
                Ok(Deletion::Deleted)
            }
            Err(AppError::Conflict(reason)) => {
                tracing::warn!("Refused to delete author: {}", reason);
                Ok(Deletion::Blocked(self.detail(id).await?))
            }
            Err(e) => Err(e),
        }
    }
}
