//! Business logic services

pub mod books;

use crate::store::Store;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
}

impl Services {
    /// Create all services with the given store
    pub fn new(store: Store) -> Self {
        Self {
            books: books::BooksService::new(store),
        }
    }
}
