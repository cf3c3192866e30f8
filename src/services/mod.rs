//! Business logic services

pub mod books;

use std::sync::Arc;

use crate::repository::BooksStore;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
}

impl Services {
    /// Create all services on top of the given store
    pub fn new(store: Arc<dyn BooksStore>) -> Self {
        Self {
            books: books::BooksService::new(store),
        }
    }
}
