//! Books repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::BookStore;
use crate::{
    error::AppResult,
    models::book::{Book, NewBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for BooksRepository {
    async fn list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, book: &NewBook) -> AppResult<Book> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, genre, description, year, cover)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.genre)
        .bind(&book.description)
        .bind(book.year)
        .bind(&book.cover)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, id: i32, book: &NewBook) -> AppResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = $1, author = $2, genre = $3, description = $4, year = $5, cover = $6
            WHERE id = $7
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.genre)
        .bind(&book.description)
        .bind(book.year)
        .bind(&book.cover)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
