//! Author pages

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;
use maud::Markup;

use super::parse_id;
use crate::{
    error::{AppError, AppResult},
    models::AuthorForm,
    services::{Deletion, Submission},
    validation::FormErrors,
    views, AppState,
};

pub async fn list(State(state): State<AppState>) -> AppResult<Markup> {
    let authors = state.services.authors.list().await?;
    Ok(views::authors::list_page(&authors))
}

pub async fn detail(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Markup> {
    let id = parse_id(&id, "Author")?;
    let (author, books) = state.services.authors.detail(id).await?;
    Ok(views::authors::detail_page(&author, &books))
}

pub async fn create_form() -> Markup {
    views::authors::form_page("Create Author", &AuthorForm::default(), &FormErrors::new())
}

pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<AuthorForm>,
) -> AppResult<Response> {
    Ok(match state.services.authors.create(form).await? {
        Submission::Saved(author) => Redirect::to(&author.url()).into_response(),
        Submission::Rejected { form, errors } => {
            views::authors::form_page("Create Author", &form, &errors).into_response()
        }
    })
}

pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Markup> {
    let id = parse_id(&id, "Author")?;
    let form = state.services.authors.edit_form(id).await?;
    Ok(views::authors::form_page("Update Author", &form, &FormErrors::new()))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<AuthorForm>,
) -> AppResult<Response> {
    let id = parse_id(&id, "Author")?;
    Ok(match state.services.authors.update(id, form).await? {
        Submission::Saved(author) => Redirect::to(&author.url()).into_response(),
        Submission::Rejected { form, errors } => {
            views::authors::form_page("Update Author", &form, &errors).into_response()
        }
    })
}

/// A missing author sends the browser back to the list
pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let Ok(id) = parse_id(&id, "Author") else {
        return Ok(Redirect::to("/catalog/authors").into_response());
    };
    match state.services.authors.detail(id).await {
        Ok((author, books)) => Ok(views::authors::delete_page(&author, &books).into_response()),
        Err(AppError::NotFound(_)) => Ok(Redirect::to("/catalog/authors").into_response()),
        Err(e) => Err(e),
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Response> {
    let Ok(id) = parse_id(&id, "Author") else {
        return Ok(Redirect::to("/catalog/authors").into_response());
    };
    Ok(match state.services.authors.delete(id).await? {
        Deletion::Deleted => Redirect::to("/catalog/authors").into_response(),
        Deletion::Blocked((author, books)) => {
            views::authors::delete_page(&author, &books).into_response()
        }
    })
}
