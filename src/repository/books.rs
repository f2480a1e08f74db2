//! PostgreSQL book store

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::BookStore;
use crate::{
    error::{AppError, AppResult},
    models::{Book, BookData, BookId},
};

const BOOK_COLUMNS: &str =
    "id, title, author, genre, publication_date, availability_status, summary";

#[derive(Clone)]
pub struct PgBookStore {
    pool: Pool<Postgres>,
}

impl PgBookStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    async fn find_where<T>(&self, column: &str, value: T) -> AppResult<Vec<Book>>
    where
        T: for<'q> sqlx::Encode<'q, Postgres> + sqlx::Type<Postgres> + Send,
    {
        let query = format!(
            "SELECT {} FROM books WHERE {} = $1 ORDER BY id",
            BOOK_COLUMNS, column
        );
        let rows = sqlx::query_as::<_, Book>(&query)
            .bind(value)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn find_all(&self) -> AppResult<Vec<Book>> {
        let query = format!("SELECT {} FROM books ORDER BY id", BOOK_COLUMNS);
        let rows = sqlx::query_as::<_, Book>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: BookId) -> AppResult<Option<Book>> {
        let query = format!("SELECT {} FROM books WHERE id = $1", BOOK_COLUMNS);
        let row = sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_by_genre(&self, genre: &str) -> AppResult<Vec<Book>> {
        self.find_where("genre", genre).await
    }

    async fn find_by_author(&self, author: &str) -> AppResult<Vec<Book>> {
        self.find_where("author", author).await
    }

    async fn find_by_availability_status(&self, available: bool) -> AppResult<Vec<Book>> {
        self.find_where("availability_status", available).await
    }

    async fn save(&self, id: Option<BookId>, data: &BookData) -> AppResult<Book> {
        match id {
            None => {
                let query = format!(
                    r#"
                    INSERT INTO books (title, author, genre, publication_date, availability_status, summary)
                    VALUES ($1, $2, $3, $4, $5, $6)
                    RETURNING {}
                    "#,
                    BOOK_COLUMNS
                );
                let row = sqlx::query_as::<_, Book>(&query)
                    .bind(&data.title)
                    .bind(&data.author)
                    .bind(&data.genre)
                    .bind(data.publication_date)
                    .bind(data.availability_status)
                    .bind(&data.summary)
                    .fetch_one(&self.pool)
                    .await?;
                Ok(row)
            }
            Some(id) => {
                let query = format!(
                    r#"
                    UPDATE books
                    SET title = $2, author = $3, genre = $4, publication_date = $5,
                        availability_status = $6, summary = $7
                    WHERE id = $1
                    RETURNING {}
                    "#,
                    BOOK_COLUMNS
                );
                sqlx::query_as::<_, Book>(&query)
                    .bind(id)
                    .bind(&data.title)
                    .bind(&data.author)
                    .bind(&data.genre)
                    .bind(data.publication_date)
                    .bind(data.availability_status)
                    .bind(&data.summary)
                    .fetch_optional(&self.pool)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("Book not found with id {}", id)))
            }
        }
    }

    async fn exists_by_id(&self, id: BookId) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn delete_by_id(&self, id: BookId) -> AppResult<()> {
        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
