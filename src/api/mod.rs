//! HTTP handlers for the catalog pages

pub mod authors;
pub mod book_instances;
pub mod books;
pub mod dashboard;
pub mod genres;
pub mod health;

use axum::{response::Redirect, routing::get, Router};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    AppState,
};

/// Parse a path id; anything that is not a UUID names no record
pub(crate) fn parse_id(raw: &str, entity: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(format!("{} {} not found", entity, raw)))
}

/// Build the application router with all routes
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/catalog") }))
        .route("/health", get(health::health_check))
        .route("/catalog", get(dashboard::index))
        .route("/catalog/", get(dashboard::index))
        // Authors
        .route("/catalog/authors", get(authors::list))
        .route("/catalog/author/create", get(authors::create_form).post(authors::create))
        .route("/catalog/author/:id", get(authors::detail))
        .route("/catalog/author/:id/update", get(authors::update_form).post(authors::update))
        .route("/catalog/author/:id/delete", get(authors::delete_form).post(authors::delete))
        // Genres
        .route("/catalog/genres", get(genres::list))
        .route("/catalog/genre/create", get(genres::create_form).post(genres::create))
        .route("/catalog/genre/:id", get(genres::detail))
        .route("/catalog/genre/:id/update", get(genres::update_form).post(genres::update))
        .route("/catalog/genre/:id/delete", get(genres::delete_form).post(genres::delete))
        // Books
        .route("/catalog/books", get(books::list))
        .route("/catalog/book/create", get(books::create_form).post(books::create))
        .route("/catalog/book/:id", get(books::detail))
        .route("/catalog/book/:id/update", get(books::update_form).post(books::update))
        .route("/catalog/book/:id/delete", get(books::delete_form).post(books::delete))
        // Copies
        .route("/catalog/bookinstances", get(book_instances::list))
        .route(
            "/catalog/bookinstance/create",
            get(book_instances::create_form).post(book_instances::create),
        )
        .route("/catalog/bookinstance/:id", get(book_instances::detail))
        .route(
            "/catalog/bookinstance/:id/update",
            get(book_instances::update_form).post(book_instances::update),
        )
        .route(
            "/catalog/bookinstance/:id/delete",
            get(book_instances::delete_form).post(book_instances::delete),
        )
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
}

async fn not_found() -> AppError {
    AppError::NotFound("Page not found".to_string())
}
