//! Genre pages

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;
use maud::Markup;

use super::parse_id;
use crate::{
    error::{AppError, AppResult},
    models::GenreForm,
    services::{Deletion, Submission},
    validation::FormErrors,
    views, AppState,
};

pub async fn list(State(state): State<AppState>) -> AppResult<Markup> {
    let genres = state.services.genres.list().await?;
    Ok(views::genres::list_page(&genres))
}

pub async fn detail(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Markup> {
    let id = parse_id(&id, "Genre")?;
    let (genre, books) = state.services.genres.detail(id).await?;
    Ok(views::genres::detail_page(&genre, &books))
}

pub async fn create_form() -> Markup {
    views::genres::form_page("Create Genre", &GenreForm::default(), &FormErrors::new())
}

/// An already existing name redirects to that genre
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<GenreForm>,
) -> AppResult<Response> {
    Ok(match state.services.genres.create(form).await? {
        Submission::Saved(genre) => Redirect::to(&genre.url()).into_response(),
        Submission::Rejected { form, errors } => {
            views::genres::form_page("Create Genre", &form, &errors).into_response()
        }
    })
}

pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Markup> {
    let id = parse_id(&id, "Genre")?;
    let form = state.services.genres.edit_form(id).await?;
    Ok(views::genres::form_page("Update Genre", &form, &FormErrors::new()))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<GenreForm>,
) -> AppResult<Response> {
    let id = parse_id(&id, "Genre")?;
    Ok(match state.services.genres.update(id, form).await? {
        Submission::Saved(genre) => Redirect::to(&genre.url()).into_response(),
        Submission::Rejected { form, errors } => {
            views::genres::form_page("Update Genre", &form, &errors).into_response()
        }
    })
}

pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let Ok(id) = parse_id(&id, "Genre") else {
        return Ok(Redirect::to("/catalog/genres").into_response());
    };
    match state.services.genres.detail(id).await {
        Ok((genre, books)) => Ok(views::genres::delete_page(&genre, &books).into_response()),
        Err(AppError::NotFound(_)) => Ok(Redirect::to("/catalog/genres").into_response()),
        Err(e) => Err(e),
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Response> {
    let Ok(id) = parse_id(&id, "Genre") else {
        return Ok(Redirect::to("/catalog/genres").into_response());
    };
    Ok(match state.services.genres.delete(id).await? {
        Deletion::Deleted => Redirect::to("/catalog/genres").into_response(),
        Deletion::Blocked((genre, books)) => {
            views::genres::delete_page(&genre, &books).into_response()
        }
    })
}
