//! Open Library client tests against a local stub server

use std::sync::{Arc, Mutex};

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use serde_json::{json, Value};
use shelves_server::{
    config::OpenLibraryConfig,
    services::open_library::{BookCatalog, OpenLibraryClient},
    AppError,
};

/// Canned upstream reply plus a log of the raw query strings received
#[derive(Clone)]
struct Stub {
    status: StatusCode,
    body: String,
    queries: Arc<Mutex<Vec<String>>>,
}

async fn stub_search(State(stub): State<Stub>, RawQuery(query): RawQuery) -> impl IntoResponse {
    stub.queries.lock().unwrap().push(query.unwrap_or_default());
    (stub.status, stub.body.clone())
}

async fn start_stub(status: StatusCode, body: Value) -> (OpenLibraryClient, Arc<Mutex<Vec<String>>>) {
    start_raw_stub(status, body.to_string()).await
}

async fn start_raw_stub(status: StatusCode, body: String) -> (OpenLibraryClient, Arc<Mutex<Vec<String>>>) {
    let queries = Arc::new(Mutex::new(Vec::new()));
    let stub = Stub {
        status,
        body,
        queries: queries.clone(),
    };
    let app = Router::new()
        .route("/search.json", get(stub_search))
        .with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = OpenLibraryClient::new(&OpenLibraryConfig {
        search_url: format!("http://{}/search.json", addr),
        covers_url: "https://covers.openlibrary.org/b/id".to_string(),
        timeout_secs: 5,
    })
    .unwrap();

    (client, queries)
}

#[tokio::test]
async fn test_search_maps_upstream_docs() {
    let (client, queries) = start_stub(
        StatusCode::OK,
        json!({
            "numFound": 1,
            "docs": [{
                "title": "Moby Dick",
                "author_name": ["Herman Melville"],
                "first_publish_year": 1851,
                "cover_i": 98765,
                "number_of_pages_median": 634
            }]
        }),
    )
    .await;

    let result = client.search("Moby Dick").await.unwrap();

    assert_eq!(*queries.lock().unwrap(), vec!["title=Moby%20Dick".to_string()]);
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "searchTerm": "Moby Dick",
            "totalResults": 1,
            "books": [{
                "title": "Moby Dick",
                "author": "Herman Melville",
                "year": 1851,
                "cover": "https://covers.openlibrary.org/b/id/98765-M.jpg",
                "pages": 634
            }]
        })
    );
}

#[tokio::test]
async fn test_search_encodes_reserved_characters() {
    let (client, queries) = start_stub(StatusCode::OK, json!({ "numFound": 0, "docs": [] })).await;

    let result = client.search("Harry Potter & the ?/#").await.unwrap();

    assert_eq!(result.search_term, "Harry Potter & the ?/#");
    assert_eq!(
        *queries.lock().unwrap(),
        vec!["title=Harry%20Potter%20%26%20the%20%3F%2F%23".to_string()]
    );
}

#[tokio::test]
async fn test_search_sends_title_once_percent_encoded() {
    let (client, queries) = start_stub(StatusCode::OK, json!({ "numFound": 0, "docs": [] })).await;

    client.search("Don't (1)!").await.unwrap();

    assert_eq!(*queries.lock().unwrap(), vec!["title=Don%27t%20(1)!".to_string()]);
}

#[tokio::test]
async fn test_search_empty_docs() {
    let (client, _) = start_stub(StatusCode::OK, json!({ "numFound": 0, "docs": [] })).await;

    let result = client.search("nonexistentbook").await.unwrap();
    assert_eq!(result.total_results, 0);
    assert!(result.books.is_empty());
}

#[tokio::test]
async fn test_search_non_success_status() {
    let (client, queries) = start_stub(StatusCode::FORBIDDEN, json!({})).await;

    let err = client.search("Error Test").await.unwrap_err();
    assert!(matches!(err, AppError::Upstream(403)));
    assert_eq!(err.to_string(), "Open Library API error: 403");
    assert_eq!(queries.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_search_undecodable_body() {
    let (client, _) = start_raw_stub(StatusCode::OK, "<html>maintenance</html>".to_string()).await;

    let err = client.search("anything").await.unwrap_err();
    assert!(matches!(err, AppError::UpstreamPayload(_)));
}

#[tokio::test]
async fn test_search_connection_refused() {
    // Reserve a port, then free it so nothing is listening there
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = OpenLibraryClient::new(&OpenLibraryConfig {
        search_url: format!("http://{}/search.json", addr),
        timeout_secs: 5,
        ..Default::default()
    })
    .unwrap();

    let err = client.search("Network Error").await.unwrap_err();
    match err {
        AppError::Network(message) => assert!(!message.is_empty()),
        other => panic!("expected network error, got {:?}", other),
    }
}
