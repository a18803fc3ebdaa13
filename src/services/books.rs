//! Personal library service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookPayload},
    repository::BookStore,
};

const NOT_FOUND: &str = "Book not found";

#[derive(Clone)]
pub struct BooksService {
    store: Arc<dyn BookStore>,
}

impl BooksService {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.store.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
    }

    /// Validate and insert a book. Nothing is written when validation fails.
    pub async fn create(&self, payload: BookPayload) -> AppResult<Book> {
        let book = payload.validate()?;
        let created = self.store.insert(&book).await?;
        tracing::info!("Book {} created: {}", created.id, created.title);
        Ok(created)
    }

    /// Overwrite all mutable fields; absent fields become null.
    pub async fn update(&self, id: i32, payload: BookPayload) -> AppResult<()> {
        let book = payload.validate()?;
        if self.store.update(id, &book).await? == 0 {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        }
        tracing::info!("Book {} updated", id);
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if self.store.delete(id).await? == 0 {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        }
        tracing::info!("Book {} deleted", id);
        Ok(())
    }
}
