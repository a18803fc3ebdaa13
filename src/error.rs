//! Error types for the Our Shelves server

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Error label used for every catalog search failure
pub const SEARCH_FAILED: &str = "Failed to fetch books";

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Transport failure while reaching Open Library
    #[error("{0}")]
    Network(String),

    /// Open Library answered with a non-success status
    #[error("Open Library API error: {0}")]
    Upstream(u16),

    /// Open Library answered 2xx but the body could not be decoded
    #[error("Invalid Open Library response: {0}")]
    UpstreamPayload(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    /// Underlying cause, only present for catalog search failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_)
            | AppError::Network(_)
            | AppError::Upstream(_)
            | AppError::UpstreamPayload(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorResponse {
        match self {
            AppError::NotFound(msg) | AppError::Validation(msg) | AppError::BadRequest(msg) => {
                ErrorResponse {
                    error: msg.clone(),
                    message: None,
                }
            }
            AppError::Network(_) | AppError::Upstream(_) | AppError::UpstreamPayload(_) => {
                ErrorResponse {
                    error: SEARCH_FAILED.to_string(),
                    message: Some(self.to_string()),
                }
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                ErrorResponse {
                    error: "Database error".to_string(),
                    message: None,
                }
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                ErrorResponse {
                    error: "Internal server error".to_string(),
                    message: None,
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
