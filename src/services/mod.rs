//! Business logic services

pub mod books;
pub mod open_library;

use std::sync::Arc;

use crate::{config::OpenLibraryConfig, error::AppResult, repository::{BookStore, Repository}};

use open_library::{BookCatalog, OpenLibraryClient};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
    pub catalog: Arc<dyn BookCatalog>,
}

impl Services {
    /// Create all services backed by PostgreSQL and Open Library
    pub fn new(repository: Repository, open_library: &OpenLibraryConfig) -> AppResult<Self> {
        Ok(Self::with_backends(
            Arc::new(repository.books),
            Arc::new(OpenLibraryClient::new(open_library)?),
        ))
    }

    /// Create services over arbitrary storage and catalog backends
    pub fn with_backends(store: Arc<dyn BookStore>, catalog: Arc<dyn BookCatalog>) -> Self {
        Self {
            books: books::BooksService::new(store),
            catalog,
        }
    }
}
