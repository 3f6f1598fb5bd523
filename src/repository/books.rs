//! Books repository. Genre links live in the `book_genres` join table and
//! are aggregated back into `Book::genre_ids` on every read.

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookFields},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// All books ordered by title
    async fn list(&self) -> AppResult<Vec<Book>>;

    async fn get_by_id(&self, id: Uuid) -> AppResult<Book>;

    async fn find_by_author(&self, author_id: Uuid) -> AppResult<Vec<Book>>;

    async fn find_by_genre(&self, genre_id: Uuid) -> AppResult<Vec<Book>>;

    async fn create(&self, data: &BookFields) -> AppResult<Book>;

    async fn update(&self, id: Uuid, data: &BookFields) -> AppResult<Book>;

    /// Fails with `Conflict` while any copy of the book exists
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    async fn count(&self) -> AppResult<i64>;
}

const SELECT_BOOKS: &str = r#"
    SELECT b.id, b.title, b.author_id, b.summary, b.isbn,
           COALESCE(ARRAY_AGG(bg.genre_id) FILTER (WHERE bg.genre_id IS NOT NULL), '{}') AS genre_ids
    FROM books b
    LEFT JOIN book_genres bg ON bg.book_id = b.id
"#;

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    async fn fetch_where(&self, condition: &str, id: Uuid) -> AppResult<Vec<Book>> {
        let query = format!(
            "{} WHERE {} GROUP BY b.id ORDER BY b.title",
            SELECT_BOOKS, condition
        );
        let rows = sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

#[async_trait]
impl BookStore for BooksRepository {
    async fn list(&self) -> AppResult<Vec<Book>> {
        let query = format!("{} GROUP BY b.id ORDER BY b.title", SELECT_BOOKS);
        let rows = sqlx::query_as::<_, Book>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Book> {
        self.fetch_where("b.id = $1", id)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    async fn find_by_author(&self, author_id: Uuid) -> AppResult<Vec<Book>> {
        self.fetch_where("b.author_id = $1", author_id).await
    }

    async fn find_by_genre(&self, genre_id: Uuid) -> AppResult<Vec<Book>> {
        self.fetch_where(
            "b.id IN (SELECT book_id FROM book_genres WHERE genre_id = $1)",
            genre_id,
        )
        .await
    }

    async fn create(&self, data: &BookFields) -> AppResult<Book> {
        let id = Uuid::new_v4();
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO books (id, title, author_id, summary, isbn)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id)
        .bind(&data.title)
        .bind(data.author_id)
        .bind(&data.summary)
        .bind(&data.isbn)
        .execute(&mut *tx)
        .await?;

        sqlx::query("INSERT INTO book_genres (book_id, genre_id) SELECT $1, UNNEST($2::uuid[])")
            .bind(id)
            .bind(&data.genre_ids)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        self.get_by_id(id).await
    }

    async fn update(&self, id: Uuid, data: &BookFields) -> AppResult<Book> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = $2, author_id = $3, summary = $4, isbn = $5
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&data.title)
        .bind(data.author_id)
        .bind(&data.summary)
        .bind(&data.isbn)
        .execute(&mut *tx)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }

        sqlx::query("DELETE FROM book_genres WHERE book_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("INSERT INTO book_genres (book_id, genre_id) SELECT $1, UNNEST($2::uuid[])")
            .bind(id)
            .bind(&data.genre_ids)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        self.get_by_id(id).await
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let locked: Option<Uuid> = sqlx::query_scalar("SELECT id FROM books WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if locked.is_none() {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }

        let copies: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM book_instances WHERE book_id = $1")
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;
        if copies > 0 {
            return Err(AppError::Conflict(format!(
                "Book {} still has {} copy(ies)",
                id, copies
            )));
        }

        // book_genres rows go with the book (ON DELETE CASCADE)
        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(())
    }

    async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
