//! Open Library search client
//!
//! One outbound request per search, bounded by the configured timeout and
//! never retried.

use std::time::Duration;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Url;

use crate::{
    config::OpenLibraryConfig,
    error::{AppError, AppResult},
    models::search::{OpenLibraryResponse, SearchResult},
};

/// Characters left unescaped in a query value, as JavaScript's
/// `encodeURIComponent` does: alphanumerics and `-_.!~*'()`.
/// `Url` still escapes `'` in http(s) queries.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// External book catalog searchable by title
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookCatalog: Send + Sync {
    async fn search(&self, title: &str) -> AppResult<SearchResult>;
}

#[derive(Clone)]
pub struct OpenLibraryClient {
    http: reqwest::Client,
    search_url: Url,
    covers_url: String,
}

impl OpenLibraryClient {
    pub fn new(config: &OpenLibraryConfig) -> AppResult<Self> {
        let search_url = Url::parse(&config.search_url).map_err(|e| {
            AppError::Internal(format!("Invalid Open Library search URL {}: {}", config.search_url, e))
        })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            search_url,
            covers_url: config.covers_url.clone(),
        })
    }

    /// Search URL for a title, the title percent-encoded
    pub fn search_url_for(&self, title: &str) -> Url {
        let mut url = self.search_url.clone();
        let query = format!("title={}", utf8_percent_encode(title, QUERY_VALUE));
        url.set_query(Some(&query));
        url
    }
}

#[async_trait]
impl BookCatalog for OpenLibraryClient {
    async fn search(&self, title: &str) -> AppResult<SearchResult> {
        let url = self.search_url_for(title);
        tracing::debug!("Open Library search: {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream(status.as_u16()));
        }

        let payload: OpenLibraryResponse = response.json().await.map_err(|e| {
            if e.is_decode() {
                AppError::UpstreamPayload(e.to_string())
            } else {
                AppError::Network(e.to_string())
            }
        })?;

        tracing::debug!("Open Library returned {} matches for {:?}", payload.num_found, title);

        Ok(payload.into_search_result(title, &self.covers_url))
    }
}
