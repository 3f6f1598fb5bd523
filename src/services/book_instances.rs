//! Book instances service

use std::collections::HashMap;

use uuid::Uuid;

use super::{found, Submission};
use crate::{
    error::{AppError, AppResult},
    models::{Book, BookInstance, BookInstanceFields, BookInstanceForm},
    repository::Repository,
    validation::{self, FormErrors},
};

#[derive(Clone)]
pub struct BookInstancesService {
    repository: Repository,
}

impl BookInstancesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Every copy with its book resolved
    pub async fn list(&self) -> AppResult<Vec<(BookInstance, Option<Book>)>> {
        let (instances, books) = tokio::try_join!(
            self.repository.book_instances.list(),
            self.repository.books.list(),
        )?;

        let books: HashMap<Uuid, Book> = books.into_iter().map(|b| (b.id, b)).collect();
        Ok(instances
            .into_iter()
            .map(|instance| {
                let book = books.get(&instance.book_id).cloned();
                (instance, book)
            })
            .collect())
    }

    pub async fn detail(&self, id: Uuid) -> AppResult<(BookInstance, Book)> {
        let instance = self.repository.book_instances.get_by_id(id).await?;
        let book = self.repository.books.get_by_id(instance.book_id).await?;
        Ok((instance, book))
    }

    /// Books offered by the copy form's select
    pub async fn book_options(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    pub async fn create(
        &self,
        form: BookInstanceForm,
    ) -> AppResult<Submission<BookInstance, BookInstanceForm>> {
        let form = form.sanitize();
        let fields = match form.validate() {
            Ok(fields) => fields,
            Err(errors) => return Ok(Submission::Rejected { form, errors }),
        };

        let errors = self.unknown_references(&fields).await?;
        if !errors.is_empty() {
            return Ok(Submission::Rejected { form, errors });
        }

        let instance = self.repository.book_instances.create(&fields).await?;
        tracing::info!("Created copy {} of book {}", instance.id, instance.book_id);
        Ok(Submission::Saved(instance))
    }

    /// A selected book that no longer exists is a field error
    async fn unknown_references(&self, fields: &BookInstanceFields) -> AppResult<FormErrors> {
        let mut errors = FormErrors::new();
        if found(self.repository.books.get_by_id(fields.book_id).await)?.is_none() {
            errors.push(
                "book",
                validation::rule_error("reference", "Book is not a valid selection"),
            );
        }
        Ok(errors)
    }

    pub async fn edit_form(&self, id: Uuid) -> AppResult<(BookInstanceForm, Vec<Book>)> {
        let (instance, books) = tokio::try_join!(
            self.repository.book_instances.get_by_id(id),
            self.repository.books.list(),
        )?;
        Ok((BookInstanceForm::from(&instance), books))
    }

    pub async fn update(
        &self,
        id: Uuid,
        form: BookInstanceForm,
    ) -> AppResult<Submission<BookInstance, BookInstanceForm>> {
        let form = form.sanitize();
        let fields = match form.validate() {
            Ok(fields) => fields,
            Err(errors) => return Ok(Submission::Rejected { form, errors }),
        };

        let errors = self.unknown_references(&fields).await?;
        if !errors.is_empty() {
            return Ok(Submission::Rejected { form, errors });
        }

        let instance = self.repository.book_instances.update(id, &fields).await?;
        tracing::info!("Updated copy {}", instance.id);
        Ok(Submission::Saved(instance))
    }

    /// Copies have no dependents, so a delete is never blocked
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        match self.repository.book_instances.delete(id).await {
            Ok(()) => {
                tracing::info!("Deleted copy {}", id);
                Ok(())
            }
            Err(AppError::NotFound(_)) => {
                tracing::debug!("Copy {} already absent", id);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
