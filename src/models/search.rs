//! Catalog search models
//!
//! `OpenLibrary*` types mirror the upstream `search.json` payload, the
//! `Search*` types are what the API returns.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Raw response of the Open Library search endpoint
#[derive(Debug, Deserialize)]
pub struct OpenLibraryResponse {
    #[serde(rename = "numFound", default)]
    pub num_found: i64,
    #[serde(default)]
    pub docs: Vec<OpenLibraryDoc>,
}

/// One match of the Open Library search endpoint
#[derive(Debug, Deserialize)]
pub struct OpenLibraryDoc {
    pub title: Option<String>,
    pub author_name: Option<Vec<String>>,
    pub first_publish_year: Option<i32>,
    pub cover_i: Option<i64>,
    pub number_of_pages_median: Option<i32>,
}

/// Normalized catalog match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SearchBook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// First listed author, omitted when upstream lists none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// First publish year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Medium-size cover image URL
    pub cover: Option<String>,
    /// Median page count across editions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<i32>,
}

/// Catalog search response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub search_term: String,
    pub total_results: i64,
    pub books: Vec<SearchBook>,
}

impl OpenLibraryDoc {
    /// Normalize an upstream match; covers are resolved against `covers_url`.
    pub fn into_search_book(self, covers_url: &str) -> SearchBook {
        SearchBook {
            title: self.title,
            author: self.author_name.and_then(|names| names.into_iter().next()),
            year: self.first_publish_year,
            cover: self
                .cover_i
                .map(|id| format!("{}/{}-M.jpg", covers_url.trim_end_matches('/'), id)),
            pages: self.number_of_pages_median,
        }
    }
}

impl OpenLibraryResponse {
    pub fn into_search_result(self, search_term: &str, covers_url: &str) -> SearchResult {
        SearchResult {
            search_term: search_term.to_string(),
            total_results: self.num_found,
            books: self
                .docs
                .into_iter()
                .map(|doc| doc.into_search_book(covers_url))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const COVERS: &str = "https://covers.openlibrary.org/b/id";

    #[test]
    fn test_maps_full_doc() {
        let response: OpenLibraryResponse = serde_json::from_value(json!({
            "numFound": 1,
            "docs": [{
                "title": "Moby Dick",
                "author_name": ["Herman Melville"],
                "first_publish_year": 1851,
                "cover_i": 98765,
                "number_of_pages_median": 634
            }]
        }))
        .unwrap();

        let result = response.into_search_result("Moby Dick", COVERS);
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

    #[test]
    fn test_missing_fields_are_omitted_and_cover_null() {
        let doc: OpenLibraryDoc = serde_json::from_value(json!({ "title": "Untitled notes" })).unwrap();
        let json = serde_json::to_value(doc.into_search_book(COVERS)).unwrap();
        assert_eq!(json, json!({ "title": "Untitled notes", "cover": null }));
    }

    #[test]
    fn test_empty_author_list_is_absent() {
        let doc: OpenLibraryDoc =
            serde_json::from_value(json!({ "title": "Anon", "author_name": [] })).unwrap();
        assert_eq!(doc.into_search_book(COVERS).author, None);
    }

    #[test]
    fn test_first_author_wins_and_order_kept() {
        let response: OpenLibraryResponse = serde_json::from_value(json!({
            "numFound": 120,
            "docs": [
                { "title": "Good Omens", "author_name": ["Terry Pratchett", "Neil Gaiman"] },
                { "title": "Mort", "author_name": ["Terry Pratchett"] }
            ]
        }))
        .unwrap();

        let result = response.into_search_result("pratchett", COVERS);
        assert_eq!(result.total_results, 120);
        assert_eq!(result.books[0].title.as_deref(), Some("Good Omens"));
        assert_eq!(result.books[0].author.as_deref(), Some("Terry Pratchett"));
        assert_eq!(result.books[1].title.as_deref(), Some("Mort"));
    }

    #[test]
    fn test_empty_docs() {
        let response: OpenLibraryResponse =
            serde_json::from_value(json!({ "numFound": 0, "docs": [] })).unwrap();
        let result = response.into_search_result("nonexistentbook", COVERS);
        assert_eq!(result.total_results, 0);
        assert!(result.books.is_empty());
    }
}
