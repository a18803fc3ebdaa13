//! Data models for Our Shelves

pub mod book;
pub mod search;

// Re-export commonly used types
pub use book::{Book, BookPayload, NewBook};
pub use search::{SearchBook, SearchResult};
