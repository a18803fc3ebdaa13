//! Book model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// A book saved in the user's library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
    /// Publish year
    pub year: Option<i32>,
    /// Cover image URL
    pub cover: Option<String>,
    /// Owning user, cleared when that user is deleted
    pub created_by: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Create/update book request
///
/// Every field is optional on the wire so a missing title can be reported
/// as a validation error instead of a body rejection.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct BookPayload {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub year: Option<i32>,
    pub cover: Option<String>,
}

/// Validated book fields, ready to be written
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewBook {
    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title: String,
    #[validate(length(max = 255, message = "Author must be at most 255 characters"))]
    pub author: Option<String>,
    #[validate(length(max = 100, message = "Genre must be at most 100 characters"))]
    pub genre: Option<String>,
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,
    pub year: Option<i32>,
    #[validate(length(max = 255, message = "Cover must be at most 255 characters"))]
    pub cover: Option<String>,
}

impl BookPayload {
    /// Check the request against the column constraints.
    pub fn validate(self) -> AppResult<NewBook> {
        let title = match self.title {
            Some(title) if !title.trim().is_empty() => title,
            _ => return Err(AppError::Validation("Title is required".to_string())),
        };

        let book = NewBook {
            title,
            author: self.author,
            genre: self.genre,
            description: self.description,
            year: self.year,
            cover: self.cover,
        };

        book.validate().map_err(|errors| {
            let mut messages: Vec<String> = errors
                .field_errors()
                .values()
                .flat_map(|errs| errs.iter())
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .collect();
            messages.sort();
            AppError::Validation(messages.join(", "))
        })?;

        Ok(book)
    }
}
