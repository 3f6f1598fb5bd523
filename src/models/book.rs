//! Book model and form

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::validation::{self, FormErrors};

/// Book record; `genre_ids` comes from the `book_genres` join table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author_id: Uuid,
    pub summary: String,
    pub isbn: String,
    pub genre_ids: Vec<Uuid>,
}

impl Book {
    pub fn url(&self) -> String {
        url(self.id)
    }
}

pub fn url(id: Uuid) -> String {
    format!("/catalog/book/{}", id)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFields {
    pub title: String,
    pub author_id: Uuid,
    pub summary: String,
    pub isbn: String,
    pub genre_ids: Vec<Uuid>,
}

/// Book form as submitted. `genre` repeats once per checked box, so zero,
/// one or many values all decode into the vector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub summary: String,
    pub isbn: String,
    pub genre: Vec<String>,
}

impl BookForm {
    pub fn sanitize(self) -> Self {
        Self {
            title: validation::sanitize(&self.title),
            author: validation::sanitize(&self.author),
            summary: validation::sanitize(&self.summary),
            isbn: validation::sanitize(&self.isbn),
            genre: self
                .genre
                .iter()
                .map(|g| validation::sanitize(g))
                .filter(|g| !g.is_empty())
                .collect(),
        }
    }

    pub fn validate(&self) -> Result<BookFields, FormErrors> {
        let mut errors = FormErrors::new();

        errors.check("title", validation::required(&self.title, "Title must not be empty"));
        errors.check("author", validation::required(&self.author, "Author must not be empty"));
        let author_id = if self.author.is_empty() {
            Uuid::nil()
        } else {
            validation::reference(&self.author, "Author is not a valid selection").unwrap_or_else(|e| {
                errors.push("author", e);
                Uuid::nil()
            })
        };
        errors.check("summary", validation::required(&self.summary, "Summary must not be empty"));
        errors.check("isbn", validation::required(&self.isbn, "ISBN must not be empty"));

        let mut genre_ids = Vec::with_capacity(self.genre.len());
        for genre in &self.genre {
            match validation::reference(genre, "Genre is not a valid selection") {
                Ok(id) if !genre_ids.contains(&id) => genre_ids.push(id),
                Ok(_) => {}
                Err(e) => errors.push("genre", e),
            }
        }

        errors.into_result(BookFields {
            title: self.title.clone(),
            author_id,
            summary: self.summary.clone(),
            isbn: self.isbn.clone(),
            genre_ids,
        })
    }

    /// Whether the genre with this id is checked on the form
    pub fn has_genre(&self, id: Uuid) -> bool {
        let id = id.to_string();
        self.genre.iter().any(|g| *g == id)
    }
}

impl From<&Book> for BookForm {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author_id.to_string(),
            summary: book.summary.clone(),
            isbn: book.isbn.clone(),
            genre: book.genre_ids.iter().map(Uuid::to_string).collect(),
        }
    }
}
