//! Book pages

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;
use maud::Markup;

use super::parse_id;
use crate::{
    error::{AppError, AppResult},
    models::BookForm,
    services::{Deletion, Submission},
    validation::FormErrors,
    views, AppState,
};

pub async fn list(State(state): State<AppState>) -> AppResult<Markup> {
    let books = state.services.books.list().await?;
    Ok(views::books::list_page(&books))
}

pub async fn detail(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Markup> {
    let id = parse_id(&id, "Book")?;
    let detail = state.services.books.detail(id).await?;
    Ok(views::books::detail_page(&detail))
}

pub async fn create_form(State(state): State<AppState>) -> AppResult<Markup> {
    let form = BookForm::default();
    let options = state.services.books.form_options(&form).await?;
    Ok(views::books::form_page("Create Book", &form, &options, &FormErrors::new()))
}

pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<BookForm>,
) -> AppResult<Response> {
    Ok(match state.services.books.create(form).await? {
        Submission::Saved(book) => Redirect::to(&book.url()).into_response(),
        Submission::Rejected { form, errors } => {
            let options = state.services.books.form_options(&form).await?;
            views::books::form_page("Create Book", &form, &options, &errors).into_response()
        }
    })
}

pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Markup> {
    let id = parse_id(&id, "Book")?;
    let (form, options) = state.services.books.edit_form(id).await?;
    Ok(views::books::form_page("Update Book", &form, &options, &FormErrors::new()))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<BookForm>,
) -> AppResult<Response> {
    let id = parse_id(&id, "Book")?;
    Ok(match state.services.books.update(id, form).await? {
        Submission::Saved(book) => Redirect::to(&book.url()).into_response(),
        Submission::Rejected { form, errors } => {
            let options = state.services.books.form_options(&form).await?;
            views::books::form_page("Update Book", &form, &options, &errors).into_response()
        }
    })
}

pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let Ok(id) = parse_id(&id, "Book") else {
        return Ok(Redirect::to("/catalog/books").into_response());
    };
    match state.services.books.delete_view(id).await {
        Ok((book, instances)) => Ok(views::books::delete_page(&book, &instances).into_response()),
        Err(AppError::NotFound(_)) => Ok(Redirect::to("/catalog/books").into_response()),
        Err(e) => Err(e),
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Response> {
    let Ok(id) = parse_id(&id, "Book") else {
        return Ok(Redirect::to("/catalog/books").into_response());
    };
    Ok(match state.services.books.delete(id).await? {
        Deletion::Deleted => Redirect::to("/catalog/books").into_response(),
        Deletion::Blocked((book, instances)) => {
            views::books::delete_page(&book, &instances).into_response()
        }
    })
}
