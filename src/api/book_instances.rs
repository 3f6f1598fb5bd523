//! Book instance (copy) pages

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;
use maud::Markup;

use super::parse_id;
use crate::{
    error::{AppError, AppResult},
    models::BookInstanceForm,
    services::Submission,
    validation::FormErrors,
    views, AppState,
};

pub async fn list(State(state): State<AppState>) -> AppResult<Markup> {
    let instances = state.services.book_instances.list().await?;
    Ok(views::book_instances::list_page(&instances))
}

pub async fn detail(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Markup> {
    let id = parse_id(&id, "Book copy")?;
    let (instance, book) = state.services.book_instances.detail(id).await?;
    Ok(views::book_instances::detail_page(&instance, &book))
}

pub async fn create_form(State(state): State<AppState>) -> AppResult<Markup> {
    let books = state.services.book_instances.book_options().await?;
    Ok(views::book_instances::form_page(
        "Create BookInstance",
        &BookInstanceForm::default(),
        &books,
        &FormErrors::new(),
    ))
}

pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<BookInstanceForm>,
) -> AppResult<Response> {
    Ok(match state.services.book_instances.create(form).await? {
        Submission::Saved(instance) => Redirect::to(&instance.url()).into_response(),
        Submission::Rejected { form, errors } => {
            let books = state.services.book_instances.book_options().await?;
            views::book_instances::form_page("Create BookInstance", &form, &books, &errors)
                .into_response()
        }
    })
}

pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Markup> {
    let id = parse_id(&id, "Book copy")?;
    let (form, books) = state.services.book_instances.edit_form(id).await?;
    Ok(views::book_instances::form_page(
        "Update BookInstance",
        &form,
        &books,
        &FormErrors::new(),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<BookInstanceForm>,
) -> AppResult<Response> {
    let id = parse_id(&id, "Book copy")?;
    Ok(match state.services.book_instances.update(id, form).await? {
        Submission::Saved(instance) => Redirect::to(&instance.url()).into_response(),
        Submission::Rejected { form, errors } => {
            let books = state.services.book_instances.book_options().await?;
            views::book_instances::form_page("Update BookInstance", &form, &books, &errors)
                .into_response()
        }
    })
}

pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let Ok(id) = parse_id(&id, "Book copy") else {
        return Ok(Redirect::to("/catalog/bookinstances").into_response());
    };
    match state.services.book_instances.detail(id).await {
        Ok((instance, book)) => {
            Ok(views::book_instances::delete_page(&instance, &book).into_response())
        }
        Err(AppError::NotFound(_)) => Ok(Redirect::to("/catalog/bookinstances").into_response()),
        Err(e) => Err(e),
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Response> {
    if let Ok(id) = parse_id(&id, "Book copy") {
        state.services.book_instances.delete(id).await?;
    }
    Ok(Redirect::to("/catalog/bookinstances").into_response())
}
