//! Test application and request helpers

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use locallibrary_server::{
    api, config::AppConfig, repository::Repository, services::Services, AppState,
};

pub struct TestApp {
    router: Router,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

impl TestResponse {
    /// Trailing id of the redirect target
    pub fn redirect_id(&self) -> String {
        let location = self.location.as_deref().expect("response is not a redirect");
        location.rsplit('/').next().unwrap().to_string()
    }
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_repository(Repository::in_memory())
    }

    pub fn with_repository(repository: Repository) -> Self {
        let state = AppState {
            config: Arc::new(AppConfig::default()),
            services: Arc::new(Services::new(repository)),
        };
        Self {
            router: api::router(state),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::get(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    /// POST an urlencoded form body
    pub async fn post(&self, uri: &str, form: &str) -> TestResponse {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        TestResponse {
            status,
            location,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }

    /// Create an author through the form and return its id
    pub async fn create_author(&self, first_name: &str, family_name: &str) -> String {
        let response = self
            .post(
                "/catalog/author/create",
                &format!("first_name={}&family_name={}&date_of_birth=&date_of_death=", first_name, family_name),
            )
            .await;
        assert_eq!(response.status, StatusCode::SEE_OTHER, "{}", response.body);
        response.redirect_id()
    }

    pub async fn create_genre(&self, name: &str) -> String {
        let response = self
            .post("/catalog/genre/create", &format!("name={}", name))
            .await;
        assert_eq!(response.status, StatusCode::SEE_OTHER, "{}", response.body);
        response.redirect_id()
    }

    pub async fn create_book(&self, title: &str, author_id: &str, genre_ids: &[&str]) -> String {
        let mut form = format!(
            "title={}&author={}&summary=A+summary&isbn=9780000000000",
            title, author_id
        );
        for genre in genre_ids {
            form.push_str(&format!("&genre={}", genre));
        }
        let response = self.post("/catalog/book/create", &form).await;
        assert_eq!(response.status, StatusCode::SEE_OTHER, "{}", response.body);
        response.redirect_id()
    }

    pub async fn create_copy(&self, book_id: &str, status: &str) -> String {
        let response = self
            .post(
                "/catalog/bookinstance/create",
                &format!("book={}&imprint=Penguin+2001&status={}&due_back=2024-05-09", book_id, status),
            )
            .await;
        assert_eq!(response.status, StatusCode::SEE_OTHER, "{}", response.body);
        response.redirect_id()
    }
}
