//! Round trip against a live database.
//!
//! Run with: DATABASE_URL=postgres://... cargo test -- --ignored

use locallibrary_server::{
    models::AuthorForm,
    repository::Repository,
    services::{Deletion, Services, Submission},
};
use sqlx::postgres::PgPoolOptions;

#[tokio::test]
#[ignore]
async fn test_postgres_author_round_trip() {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("Failed to connect to database");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let services = Services::new(Repository::postgres(pool));
    let form = AuthorForm {
        first_name: "Mary".to_string(),
        family_name: "Shelley".to_string(),
        date_of_birth: "1797-08-30".to_string(),
        date_of_death: String::new(),
    };
    let author = match services.authors.create(form).await.unwrap() {
        Submission::Saved(author) => author,
        Submission::Rejected { errors, .. } => panic!("rejected: {:?}", errors),
    };

    let (stored, books) = services.authors.detail(author.id).await.unwrap();
    assert_eq!(stored, author);
    assert!(books.is_empty());

    assert!(matches!(
        services.authors.delete(author.id).await.unwrap(),
        Deletion::Deleted
    ));
}
