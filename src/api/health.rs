//! Welcome, health and database check endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, models::book::Book};

pub const WELCOME: &str = "Welcome to Our Shelves API!";

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Current status of the service
    pub status: String,
    /// Version of the service
    pub version: String,
}

#[derive(Serialize, ToSchema)]
pub struct DbTestResponse {
    pub message: String,
    pub books: Vec<Book>,
}

/// Plain-text greeting
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Welcome message", body = String, content_type = "text/plain")
    )
)]
pub async fn welcome() -> &'static str {
    WELCOME
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Database connectivity check, returns the current library contents
#[utoipa::path(
    get,
    path = "/db-test",
    tag = "health",
    responses(
        (status = 200, description = "Database reachable", body = DbTestResponse),
        (status = 500, description = "Database unreachable")
    )
)]
pub async fn db_test(State(state): State<crate::AppState>) -> AppResult<Json<DbTestResponse>> {
    let books = state.services.books.list().await?;
    Ok(Json(DbTestResponse {
        message: "Database connected".to_string(),
        books,
    }))
}
