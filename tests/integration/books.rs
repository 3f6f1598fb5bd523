//! Books and their copies

use axum::http::StatusCode;

use crate::support::TestApp;

#[tokio::test]
async fn test_book_detail_lists_genres_and_copies() {
    let app = TestApp::new();
    let author = app.create_author("Isaac", "Asimov").await;
    let scifi = app.create_genre("Science+Fiction").await;
    let classic = app.create_genre("Classic").await;
    let book = app.create_book("Foundation", &author, &[&scifi, &classic]).await;
    app.create_copy(&book, "Loaned").await;

    let detail = app.get(&format!("/catalog/book/{}", book)).await;
    assert_eq!(detail.status, StatusCode::OK);
    assert!(detail.body.contains("Asimov, Isaac"));
    assert!(detail.body.contains("Science Fiction"));
    assert!(detail.body.contains("Classic"));
    assert!(detail.body.contains("Penguin 2001"));
    assert!(detail.body.contains("May 9, 2024"));
}

#[tokio::test]
async fn test_empty_title_is_rejected_and_values_preserved() {
    let app = TestApp::new();
    let author = app.create_author("Isaac", "Asimov").await;
    let genre = app.create_genre("Classic").await;

    let response = app
        .post(
            "/catalog/book/create",
            &format!(
                "title=&author={}&summary=Psychohistory&isbn=9780553293357&genre={}",
                author, genre
            ),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Title must not be empty"));
    assert!(response.body.contains(r#"value="9780553293357""#));
    assert!(response.body.contains("Psychohistory"));
    assert!(response
        .body
        .contains(&format!(r#"value="{}" selected"#, author)));
    assert!(response
        .body
        .contains(&format!(r#"value="{}" checked"#, genre)));
    assert!(app.get("/catalog/books").await.body.contains("There are no books."));
}

#[tokio::test]
async fn test_update_book_replaces_genres() {
    let app = TestApp::new();
    let author = app.create_author("Isaac", "Asimov").await;
    let old = app.create_genre("Classic").await;
    let new = app.create_genre("Space").await;
    let book = app.create_book("Foundation", &author, &[&old]).await;

    let response = app
        .post(
            &format!("/catalog/book/{}/update", book),
            &format!(
                "title=Foundation&author={}&summary=s&isbn=i&genre={}",
                author, new
            ),
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);

    let space = app.get(&format!("/catalog/genre/{}", new)).await;
    assert!(space.body.contains("Foundation"));
    let classic = app.get(&format!("/catalog/genre/{}", old)).await;
    assert!(classic.body.contains("This genre has no books."));
}

#[tokio::test]
async fn test_missing_or_malformed_book_id_is_not_found() {
    let app = TestApp::new();
    let missing = app
        .get("/catalog/book/00000000-0000-0000-0000-000000000000")
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let malformed = app.get("/catalog/book/not-a-uuid").await;
    assert_eq!(malformed.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_book_with_copies_is_blocked() {
    let app = TestApp::new();
    let author = app.create_author("Isaac", "Asimov").await;
    let book = app.create_book("Foundation", &author, &[]).await;
    let copy = app.create_copy(&book, "Available").await;

    let response = app.post(&format!("/catalog/book/{}/delete", book), "").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response
        .body
        .contains("Delete the following copies before attempting to delete this book."));

    let response = app
        .post(&format!("/catalog/bookinstance/{}/delete", copy), "")
        .await;
    assert_eq!(response.location.as_deref(), Some("/catalog/bookinstances"));

    let response = app.post(&format!("/catalog/book/{}/delete", book), "").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/catalog/books"));
    assert_eq!(
        app.get(&format!("/catalog/book/{}", book)).await.status,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_invalid_due_back_is_rejected() {
    let app = TestApp::new();
    let author = app.create_author("Isaac", "Asimov").await;
    let book = app.create_book("Foundation", &author, &[]).await;

    let response = app
        .post(
            "/catalog/bookinstance/create",
            &format!("book={}&imprint=Gnome+Press&status=Available&due_back=2024-13-40", book),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Invalid date"));
    assert!(response.body.contains(r#"value="Gnome Press""#));

    let list = app.get("/catalog/bookinstances").await;
    assert!(list.body.contains("There are no book copies in this library."));
}

#[tokio::test]
async fn test_update_copy_status() {
    let app = TestApp::new();
    let author = app.create_author("Isaac", "Asimov").await;
    let book = app.create_book("Foundation", &author, &[]).await;
    let copy = app.create_copy(&book, "Maintenance").await;

    let response = app
        .post(
            &format!("/catalog/bookinstance/{}/update", copy),
            &format!("book={}&imprint=Penguin+2001&status=Available&due_back=2024-05-09", book),
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);

    let detail = app.get(&format!("/catalog/bookinstance/{}", copy)).await;
    assert!(detail.body.contains("<strong>Status: </strong>Available"));
    assert!(!detail.body.contains("Due back"));
}

#[tokio::test]
async fn test_unknown_selections_are_rejected() {
    let app = TestApp::new();
    let author = app.create_author("Isaac", "Asimov").await;
    let unknown = "11111111-1111-1111-1111-111111111111";

    let response = app
        .post(
            "/catalog/book/create",
            &format!("title=Foundation&author={}&summary=s&isbn=i", unknown),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Author is not a valid selection"));

    let response = app
        .post(
            "/catalog/book/create",
            &format!("title=Foundation&author={}&summary=s&isbn=i&genre={}", author, unknown),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Genre is not a valid selection"));
    assert!(app.get("/catalog/books").await.body.contains("There are no books."));

    let response = app
        .post(
            "/catalog/bookinstance/create",
            &format!("book={}&imprint=Gnome+Press&status=Available&due_back=2024-05-09", unknown),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Book is not a valid selection"));
    assert!(app
        .get("/catalog/bookinstances")
        .await
        .body
        .contains("There are no book copies in this library."));
}

#[tokio::test]
async fn test_book_delete_form_with_copies_withholds_button() {
    let app = TestApp::new();
    let author = app.create_author("Isaac", "Asimov").await;
    let book = app.create_book("Foundation", &author, &[]).await;
    let copy = app.create_copy(&book, "Loaned").await;

    let response = app.get(&format!("/catalog/book/{}/delete", book)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(&copy));
    assert!(response.body.contains("Penguin 2001"));
    assert!(!response.body.contains(r#"<form method="post""#));
    assert!(!response.body.contains("<button"));
}
