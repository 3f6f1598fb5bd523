//! Genre model and form

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::validation::{self, FormErrors};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Genre {
    pub id: Uuid,
    pub name: String,
}

impl Genre {
    pub fn url(&self) -> String {
        url(self.id)
    }
}

pub fn url(id: Uuid) -> String {
    format!("/catalog/genre/{}", id)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreFields {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GenreForm {
    pub name: String,
}

impl GenreForm {
    pub fn sanitize(self) -> Self {
        Self {
            name: validation::sanitize(&self.name),
        }
    }

    pub fn validate(&self) -> Result<GenreFields, FormErrors> {
        let mut errors = FormErrors::new();
        errors.check("name", validation::required(&self.name, "Genre name required"));
        errors.into_result(GenreFields {
            name: self.name.clone(),
        })
    }
}

impl From<&Genre> for GenreForm {
    fn from(genre: &Genre) -> Self {
        Self {
            name: genre.name.clone(),
        }
    }
}
