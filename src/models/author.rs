//! Author model and form

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{format_date_input, format_date_medium};
use crate::validation::{self, FormErrors};

/// Author record as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Author {
    pub id: Uuid,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

impl Author {
    /// Display name, "family_name, first_name"
    pub fn name(&self) -> String {
        format!("{}, {}", self.family_name, self.first_name)
    }

    /// "<birth> - <death>", with N/A for unknown dates
    pub fn lifespan(&self) -> String {
        let format = |date: Option<NaiveDate>| {
            date.map(format_date_medium)
                .unwrap_or_else(|| "N/A".to_string())
        };
        format!("{} - {}", format(self.date_of_birth), format(self.date_of_death))
    }

    pub fn url(&self) -> String {
        url(self.id)
    }
}

pub fn url(id: Uuid) -> String {
    format!("/catalog/author/{}", id)
}

/// Validated author data for create and update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorFields {
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

/// Author form as submitted
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuthorForm {
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: String,
    pub date_of_death: String,
}

impl AuthorForm {
    pub fn sanitize(self) -> Self {
        Self {
            first_name: validation::sanitize(&self.first_name),
            family_name: validation::sanitize(&self.family_name),
            date_of_birth: validation::sanitize(&self.date_of_birth),
            date_of_death: validation::sanitize(&self.date_of_death),
        }
    }

    /// Run every field rule on an already sanitized form
    pub fn validate(&self) -> Result<AuthorFields, FormErrors> {
        let mut errors = FormErrors::new();

        errors.check(
            "first_name",
            validation::required(&self.first_name, "First name must be specified"),
        );
        errors.check(
            "first_name",
            validation::max_chars(&self.first_name, 100, "First name must not exceed 100 characters"),
        );
        errors.check(
            "first_name",
            validation::alphanumeric(&self.first_name, "First name has non-alphanumeric characters."),
        );

        errors.check(
            "family_name",
            validation::required(&self.family_name, "Family name must be specified"),
        );
        errors.check(
            "family_name",
            validation::max_chars(&self.family_name, 100, "Family name must not exceed 100 characters"),
        );
        errors.check(
            "family_name",
            validation::alphanumeric(&self.family_name, "Family name has non-alphanumeric characters."),
        );

        let date_of_birth = validation::optional_date(&self.date_of_birth, "Invalid date of birth")
            .unwrap_or_else(|e| {
                errors.push("date_of_birth", e);
                None
            });
        let date_of_death = validation::optional_date(&self.date_of_death, "Invalid date of death")
            .unwrap_or_else(|e| {
                errors.push("date_of_death", e);
                None
            });

        errors.into_result(AuthorFields {
            first_name: self.first_name.clone(),
            family_name: self.family_name.clone(),
            date_of_birth,
            date_of_death,
        })
    }
}

impl From<&Author> for AuthorForm {
    fn from(author: &Author) -> Self {
        Self {
            first_name: author.first_name.clone(),
            family_name: author.family_name.clone(),
            date_of_birth: author.date_of_birth.map(format_date_input).unwrap_or_default(),
            date_of_death: author.date_of_death.map(format_date_input).unwrap_or_default(),
        }
    }
}
