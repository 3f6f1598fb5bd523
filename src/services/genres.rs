//! Genres service

use uuid::Uuid;

use super::{Deletion, Submission};
use crate::{
    error::{AppError, AppResult},
    models::{Book, Genre, GenreForm},
    repository::Repository,
    validation::{self, FormErrors},
};

#[derive(Clone)]
pub struct GenresService {
    repository: Repository,
}

impl GenresService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Genre>> {
        self.repository.genres.list().await
    }

    /// The genre together with the books carrying it
    pub async fn detail(&self, id: Uuid) -> AppResult<(Genre, Vec<Book>)> {
        tokio::try_join!(
            self.repository.genres.get_by_id(id),
            self.repository.books.find_by_genre(id),
        )
    }

    /// Creating a name that already exists yields the existing genre
    pub async fn create(&self, form: GenreForm) -> AppResult<Submission<Genre, GenreForm>> {
        let form = form.sanitize();
        let fields = match form.validate() {
            Ok(fields) => fields,
            Err(errors) => return Ok(Submission::Rejected { form, errors }),
        };

        if let Some(existing) = self.repository.genres.find_by_name(&fields.name).await? {
            tracing::debug!("Genre {:?} already exists as {}", fields.name, existing.id);
            return Ok(Submission::Saved(existing));
        }

        let genre = self.repository.genres.create(&fields).await?;
        tracing::info!("Created genre {} ({})", genre.id, genre.name);
        Ok(Submission::Saved(genre))
    }

    pub async fn edit_form(&self, id: Uuid) -> AppResult<GenreForm> {
        let genre = self.repository.genres.get_by_id(id).await?;
        Ok(GenreForm::from(&genre))
    }

    /// Renaming onto a name held by another genre is rejected
    pub async fn update(&self, id: Uuid, form: GenreForm) -> AppResult<Submission<Genre, GenreForm>> {
        let form = form.sanitize();
        let fields = match form.validate() {
            Ok(fields) => fields,
            Err(errors) => return Ok(Submission::Rejected { form, errors }),
        };

        if let Some(existing) = self.repository.genres.find_by_name(&fields.name).await? {
            if existing.id != id {
                let mut errors = FormErrors::new();
                errors.push(
                    "name",
                    validation::rule_error("unique", "A genre with this name already exists"),
                );
                return Ok(Submission::Rejected { form, errors });
            }
        }

        let genre = self.repository.genres.update(id, &fields).await?;
        tracing::info!("Updated genre {}", genre.id);
        Ok(Submission::Saved(genre))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<Deletion<(Genre, Vec<Book>)>> {
        match self.repository.genres.delete(id).await {
            Ok(()) => {
                tracing::info!("Deleted genre {}", id);
                Ok(Deletion::Deleted)
            }
            Err(AppError::NotFound(_)) => {
                tracing::debug!("Genre {} already absent", id);
                Ok(Deletion::Deleted)
            }
            Err(AppError::Conflict(reason)) => {
                tracing::warn!("Refused to delete genre: {}", reason);
                Ok(Deletion::Blocked(self.detail(id).await?))
            }
            Err(e) => Err(e),
        }
    }
}
