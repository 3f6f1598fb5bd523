use axum::http::StatusCode;

use crate::support::TestApp;

#[tokio::test]
async fn test_duplicate_genre_redirects_to_existing() {
    let app = TestApp::new();
    let first = app.create_genre("Fantasy").await;
    let second = app.create_genre("Fantasy").await;
    assert_eq!(first, second);

    let list = app.get("/catalog/genres").await;
    assert_eq!(list.body.matches(">Fantasy<").count(), 1);
}

#[tokio::test]
async fn test_empty_genre_name_is_rejected() {
    let app = TestApp::new();
    let response = app.post("/catalog/genre/create", "name=+++").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Genre name required"));
}

#[tokio::test]
async fn test_markup_in_genre_name_is_escaped_once() {
    let app = TestApp::new();
    let id = app.create_genre("%3Cb%3ESci-Fi%3C%2Fb%3E").await;

    let detail = app.get(&format!("/catalog/genre/{}", id)).await;
    assert!(detail.body.contains("&lt;b&gt;Sci-Fi&lt;&#x2F;b&gt;"));
    assert!(!detail.body.contains("<b>Sci-Fi"));
    assert!(!detail.body.contains("&amp;lt;"));
}

#[tokio::test]
async fn test_rename_onto_existing_genre_is_rejected() {
    let app = TestApp::new();
    app.create_genre("Horror").await;
    let poetry = app.create_genre("Poetry").await;

    let response = app
        .post(&format!("/catalog/genre/{}/update", poetry), "name=Horror")
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("A genre with this name already exists"));
}

#[tokio::test]
async fn test_delete_genre_in_use_is_blocked() {
    let app = TestApp::new();
    let author = app.create_author("Ursula", "LeGuin").await;
    let genre = app.create_genre("Fantasy").await;
    app.create_book("Earthsea", &author, &[&genre]).await;

    let response = app.post(&format!("/catalog/genre/{}/delete", genre), "").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response
        .body
        .contains("Delete the following books before attempting to delete this genre."));
    assert_eq!(
        app.get(&format!("/catalog/genre/{}", genre)).await.status,
        StatusCode::OK
    );
}

#[tokio::test]
async fn test_delete_unused_genre() {
    let app = TestApp::new();
    let genre = app.create_genre("Poetry").await;

    let response = app.post(&format!("/catalog/genre/{}/delete", genre), "").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/catalog/genres"));
    assert_eq!(
        app.get(&format!("/catalog/genre/{}", genre)).await.status,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_genre_delete_form_with_books_withholds_button() {
    let app = TestApp::new();
    let author = app.create_author("Ursula", "LeGuin").await;
    let genre = app.create_genre("Fantasy").await;
    app.create_book("Earthsea", &author, &[&genre]).await;

    let response = app.get(&format!("/catalog/genre/{}/delete", genre)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Earthsea"));
    assert!(!response.body.contains(r#"<form method="post""#));
    assert!(!response.body.contains("<button"));
}
