//! Dashboard, health and routing

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use uuid::Uuid;

use locallibrary_server::{
    models::{Book, BookFields},
    repository::{BookStore, Repository},
    AppError, AppResult,
};

use crate::support::TestApp;

/// Book store whose every call fails as if the database were unreachable
struct UnavailableBookStore;

fn unavailable<T>() -> AppResult<T> {
    Err(AppError::Database(sqlx::Error::PoolTimedOut))
}

#[async_trait]
impl BookStore for UnavailableBookStore {
    async fn list(&self) -> AppResult<Vec<Book>> {
        unavailable()
    }
    async fn get_by_id(&self, _id: Uuid) -> AppResult<Book> {
        unavailable()
    }
    async fn find_by_author(&self, _author_id: Uuid) -> AppResult<Vec<Book>> {
        unavailable()
    }
    async fn find_by_genre(&self, _genre_id: Uuid) -> AppResult<Vec<Book>> {
        unavailable()
    }
    async fn create(&self, _data: &BookFields) -> AppResult<Book> {
        unavailable()
    }
    async fn update(&self, _id: Uuid, _data: &BookFields) -> AppResult<Book> {
        unavailable()
    }
    async fn delete(&self, _id: Uuid) -> AppResult<()> {
        unavailable()
    }
    async fn count(&self) -> AppResult<i64> {
        unavailable()
    }
}

fn app_with_unavailable_books() -> TestApp {
    let mut repository = Repository::in_memory();
    repository.books = Arc::new(UnavailableBookStore);
    TestApp::with_repository(repository)
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new();
    let response = app.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_root_redirects_to_catalog() {
    let response = TestApp::new().get("/").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/catalog"));
}

#[tokio::test]
async fn test_dashboard_counts_records() {
    let app = TestApp::new();
    let author = app.create_author("Jane", "Austen").await;
    let genre = app.create_genre("Romance").await;
    let book = app.create_book("Emma", &author, &[&genre]).await;
    app.create_copy(&book, "Available").await;
    app.create_copy(&book, "Loaned").await;

    for path in ["/catalog", "/catalog/"] {
        let response = app.get(path).await;
        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.contains("<strong>Books: </strong>1"));
        assert!(response.body.contains("<strong>Copies: </strong>2"));
        assert!(response.body.contains("<strong>Copies available: </strong>1"));
        assert!(response.body.contains("<strong>Authors: </strong>1"));
        assert!(response.body.contains("<strong>Genres: </strong>1"));
    }
}

#[tokio::test]
async fn test_dashboard_survives_store_failure() {
    let response = app_with_unavailable_books().get("/catalog").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Error loading catalog counts."));
}

#[tokio::test]
async fn test_store_failure_is_internal_error() {
    let response = app_with_unavailable_books().get("/catalog/books").await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!response.body.contains("PoolTimedOut"));
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let response = TestApp::new().get("/catalog/periodicals").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
