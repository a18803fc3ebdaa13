//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, search};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Our Shelves API",
        version = "1.0.0",
        description = "Personal book library REST API"
    ),
    paths(
        // Health
        health::welcome,
        health::health_check,
        health::db_test,
        // Search
        search::search_books,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::models::book::BookPayload,
            crate::models::search::SearchBook,
            crate::models::search::SearchResult,
            books::MessageResponse,
            health::HealthResponse,
            health::DbTestResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "search", description = "Open Library search"),
        (name = "books", description = "Personal library management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
