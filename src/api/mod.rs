//! API handlers for Our Shelves REST endpoints

pub mod books;
pub mod health;
pub mod openapi;
pub mod search;

use axum::{
    extract::FromRequest,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{config::CorsConfig, error::AppError, AppState};

/// JSON body extractor whose rejections use the API error format
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors);

    let routes = Router::new()
        .route("/", get(health::welcome))
        .route("/health", get(health::health_check))
        .route("/db-test", get(health::db_test))
        // Open Library
        .route("/books/search/:bookName", get(search::search_books))
        // Personal library
        .route("/books", get(books::list_books).post(books::create_book))
        .route("/books/id/:id", get(books::get_book))
        .route("/books/:id", put(books::update_book).delete(books::delete_book))
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    if config.allowed_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    layer
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
}
