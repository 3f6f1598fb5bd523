//! Book instance (physical copy) model and form

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{format_date_input, format_date_medium};
use crate::validation::{self, FormErrors};

/// Availability of a copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "book_status")]
pub enum BookStatus {
    Available,
    Maintenance,
    Loaned,
    Reserved,
}

impl Default for BookStatus {
    fn default() -> Self {
        BookStatus::Maintenance
    }
}

impl BookStatus {
    pub const ALL: [BookStatus; 4] = [
        BookStatus::Maintenance,
        BookStatus::Available,
        BookStatus::Loaned,
        BookStatus::Reserved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "Available",
            BookStatus::Maintenance => "Maintenance",
            BookStatus::Loaned => "Loaned",
            BookStatus::Reserved => "Reserved",
        }
    }
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BookStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Unknown book status: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct BookInstance {
    pub id: Uuid,
    pub book_id: Uuid,
    pub imprint: String,
    pub status: BookStatus,
    pub due_back: NaiveDate,
}

impl BookInstance {
    pub fn url(&self) -> String {
        url(self.id)
    }

    pub fn due_back_formatted(&self) -> String {
        format_date_medium(self.due_back)
    }
}

pub fn url(id: Uuid) -> String {
    format!("/catalog/bookinstance/{}", id)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookInstanceFields {
    pub book_id: Uuid,
    pub imprint: String,
    pub status: BookStatus,
    pub due_back: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BookInstanceForm {
    pub book: String,
    pub imprint: String,
    pub status: String,
    pub due_back: String,
}

impl BookInstanceForm {
    pub fn sanitize(self) -> Self {
        Self {
            book: validation::sanitize(&self.book),
            imprint: validation::sanitize(&self.imprint),
            status: validation::sanitize(&self.status),
            due_back: validation::sanitize(&self.due_back),
        }
    }

    /// An empty status means Maintenance and an empty `due_back` means today
    pub fn validate(&self) -> Result<BookInstanceFields, FormErrors> {
        let mut errors = FormErrors::new();

        errors.check("book", validation::required(&self.book, "Book must be specified"));
        let book_id = if self.book.is_empty() {
            Uuid::nil()
        } else {
            validation::reference(&self.book, "Book is not a valid selection").unwrap_or_else(|e| {
                errors.push("book", e);
                Uuid::nil()
            })
        };
        errors.check("imprint", validation::required(&self.imprint, "Imprint must be specified"));

        let status = if self.status.is_empty() {
            BookStatus::default()
        } else {
            self.status.parse().unwrap_or_else(|_| {
                errors.push("status", validation::rule_error("status", "Invalid status"));
                BookStatus::default()
            })
        };

        let due_back = validation::optional_date(&self.due_back, "Invalid date")
            .unwrap_or_else(|e| {
                errors.push("due_back", e);
                None
            })
            .unwrap_or_else(|| Utc::now().date_naive());

        errors.into_result(BookInstanceFields {
            book_id,
            imprint: self.imprint.clone(),
            status,
            due_back,
        })
    }
}

impl From<&BookInstance> for BookInstanceForm {
    fn from(instance: &BookInstance) -> Self {
        Self {
            book: instance.book_id.to_string(),
            imprint: instance.imprint.clone(),
            status: instance.status.to_string(),
            due_back: format_date_input(instance.due_back),
        }
    }
}
