//! Repository layer for database operations

pub mod books;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::book::{Book, NewBook},
};

/// Storage operations on the `books` table.
///
/// Mutations report the affected-row count; callers decide what zero means.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// All books, in id order
    async fn list(&self) -> AppResult<Vec<Book>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>>;

    /// Insert a book and return the stored row
    async fn insert(&self, book: &NewBook) -> AppResult<Book>;

    /// Overwrite every mutable column of a book
    async fn update(&self, id: i32, book: &NewBook) -> AppResult<u64>;

    async fn delete(&self, id: i32) -> AppResult<u64>;
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            books: books::BooksRepository::new(pool),
        }
    }
}
