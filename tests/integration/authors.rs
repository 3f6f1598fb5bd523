use axum::http::StatusCode;

use crate::support::TestApp;

#[tokio::test]
async fn test_create_and_view_author() {
    let app = TestApp::new();
    let response = app
        .post(
            "/catalog/author/create",
            "first_name=+Jane+&family_name=Austen&date_of_birth=1775-12-16&date_of_death=1817-07-18",
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    let location = response.location.clone().unwrap();
    assert!(location.starts_with("/catalog/author/"));

    let detail = app.get(&location).await;
    assert_eq!(detail.status, StatusCode::OK);
    assert!(detail.body.contains("Austen, Jane"));
    assert!(detail.body.contains("Dec 16, 1775 - Jul 18, 1817"));
}

#[tokio::test]
async fn test_non_alphanumeric_first_name_is_rejected() {
    let app = TestApp::new();
    let response = app
        .post(
            "/catalog/author/create",
            "first_name=Jane123%21&family_name=Austen&date_of_birth=&date_of_death=",
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response
        .body
        .contains("First name has non-alphanumeric characters."));
    assert!(response.body.contains(r#"value="Austen""#));
    assert!(app.get("/catalog/authors").await.body.contains("There are no authors."));
}

#[tokio::test]
async fn test_invalid_birth_date_is_rejected() {
    let app = TestApp::new();
    let response = app
        .post(
            "/catalog/author/create",
            "first_name=Jane&family_name=Austen&date_of_birth=17-75&date_of_death=",
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Invalid date of birth"));
}

#[tokio::test]
async fn test_update_author() {
    let app = TestApp::new();
    let id = app.create_author("Jane", "Austen").await;

    let form = app.get(&format!("/catalog/author/{}/update", id)).await;
    assert_eq!(form.status, StatusCode::OK);
    assert!(form.body.contains(r#"value="Jane""#));

    let response = app
        .post(
            &format!("/catalog/author/{}/update", id),
            "first_name=Cassandra&family_name=Austen&date_of_birth=&date_of_death=",
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.redirect_id(), id);
    let detail = app.get(&format!("/catalog/author/{}", id)).await;
    assert!(detail.body.contains("Austen, Cassandra"));
}

#[tokio::test]
async fn test_delete_author_without_books() {
    let app = TestApp::new();
    let id = app.create_author("Jane", "Austen").await;

    let confirm = app.get(&format!("/catalog/author/{}/delete", id)).await;
    assert_eq!(confirm.status, StatusCode::OK);
    assert!(confirm.body.contains("Do you really want to delete this Author?"));

    let response = app.post(&format!("/catalog/author/{}/delete", id), "").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/catalog/authors"));

    let detail = app.get(&format!("/catalog/author/{}", id)).await;
    assert_eq!(detail.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_author_with_books_is_blocked() {
    let app = TestApp::new();
    let id = app.create_author("Jane", "Austen").await;
    app.create_book("Emma", &id, &[]).await;

    let response = app.post(&format!("/catalog/author/{}/delete", id), "").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response
        .body
        .contains("Delete the following books before attempting to delete this author."));
    assert!(response.body.contains("Emma"));

    let detail = app.get(&format!("/catalog/author/{}", id)).await;
    assert_eq!(detail.status, StatusCode::OK);
}

#[tokio::test]
async fn test_delete_form_for_missing_author_redirects() {
    let app = TestApp::new();
    let response = app
        .get("/catalog/author/00000000-0000-0000-0000-000000000000/delete")
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/catalog/authors"));
}

#[tokio::test]
async fn test_invalid_update_leaves_author_unchanged() {
    let app = TestApp::new();
    let id = app.create_author("Jane", "Austen").await;

    let response = app
        .post(
            &format!("/catalog/author/{}/update", id),
            "first_name=Jane123%21&family_name=Austen&date_of_birth=&date_of_death=",
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response
        .body
        .contains("First name has non-alphanumeric characters."));

    let detail = app.get(&format!("/catalog/author/{}", id)).await;
    assert!(detail.body.contains("Austen, Jane"));
    assert!(!detail.body.contains("Jane123"));
}

#[tokio::test]
async fn test_author_delete_form_with_books_withholds_button() {
    let app = TestApp::new();
    let id = app.create_author("Jane", "Austen").await;
    app.create_book("Emma", &id, &[]).await;

    let response = app.get(&format!("/catalog/author/{}/delete", id)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Emma"));
    assert!(response
        .body
        .contains("Delete the following books before attempting to delete this author."));
    assert!(!response.body.contains(r#"<form method="post""#));
    assert!(!response.body.contains("<button"));
}
