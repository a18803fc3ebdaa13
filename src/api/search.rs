//! Open Library search endpoint

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::{AppResult, ErrorResponse},
    models::search::SearchResult,
};

/// Search Open Library by title
#[utoipa::path(
    get,
    path = "/books/search/{bookName}",
    tag = "search",
    params(("bookName" = String, Path, description = "Free-text title query")),
    responses(
        (status = 200, description = "Search results", body = SearchResult),
        (status = 500, description = "Open Library unreachable or failing", body = ErrorResponse)
    )
)]
pub async fn search_books(
    State(state): State<crate::AppState>,
    Path(book_name): Path<String>,
) -> AppResult<Json<SearchResult>> {
    let result = state
        .services
        .catalog
        .search(&book_name)
        .await
        .inspect_err(|e| tracing::error!("Error fetching books from Open Library: {}", e))?;

    Ok(Json(result))
}
