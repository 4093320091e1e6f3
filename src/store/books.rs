//! In-memory book collection.
//!
//! An ordered sequence of [`Book`] records, unique by id, with insertion
//! order preserved for listing. Access is serialized behind a single
//! read-write lock: readers may proceed concurrently, writers are exclusive.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{Book, BookFilter};

/// Shared handle to the book collection
#[derive(Clone, Default)]
pub struct BooksStore {
    entries: Arc<RwLock<Vec<Book>>>,
}

impl BooksStore {
    /// Create a new, empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a book to the end of the collection
    pub async fn insert(&self, book: Book) {
        self.entries.write().await.push(book);
    }

    /// Whether a book with the given id exists
    pub async fn contains(&self, id: &str) -> bool {
        self.entries.read().await.iter().any(|book| book.id == id)
    }

    /// List books matching the filter, in insertion order
    pub async fn list(&self, filter: &BookFilter) -> Vec<Book> {
        self.entries
            .read()
            .await
            .iter()
            .filter(|book| matches(book, filter))
            .cloned()
            .collect()
    }

    /// Find a book by exact id match
    pub async fn find(&self, id: &str) -> Option<Book> {
        self.entries
            .read()
            .await
            .iter()
            .find(|book| book.id == id)
            .cloned()
    }

    /// Apply a mutation to the book with the given id, in place.
    ///
    /// Returns false when no such book exists.
    pub async fn update<F>(&self, id: &str, apply: F) -> bool
    where
        F: FnOnce(&mut Book),
    {
        let mut entries = self.entries.write().await;
        match entries.iter_mut().find(|book| book.id == id) {
            Some(book) => {
                apply(book);
                true
            }
            None => false,
        }
    }

    /// Remove the book with the given id, preserving the order of the rest.
    ///
    /// Returns false when no such book exists.
    pub async fn remove(&self, id: &str) -> bool {
        let mut entries = self.entries.write().await;
        match entries.iter().position(|book| book.id == id) {
            Some(index) => {
                entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of books currently held
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the collection is empty
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

fn matches(book: &Book, filter: &BookFilter) -> bool {
    if let Some(reading) = filter.reading {
        if book.reading != reading {
            return false;
        }
    }
    if let Some(finished) = filter.finished {
        if book.finished != finished {
            return false;
        }
    }
    if let Some(ref needle) = filter.name {
        if !book.name.to_lowercase().contains(needle.as_str()) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn book(id: &str, name: &str, reading: bool, finished: bool) -> Book {
        let now = Utc::now();
        Book {
            id: id.to_string(),
            name: name.to_string(),
            year: None,
            author: None,
            summary: None,
            publisher: None,
            page_count: 100,
            read_page: if finished { 100 } else { 0 },
            finished,
            reading,
            inserted_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = BooksStore::new();
        store.insert(book("a1", "Dune", false, false)).await;

        assert!(store.contains("a1").await);
        assert_eq!(store.find("a1").await.unwrap().name, "Dune");
        assert!(store.find("zz").await.is_none());
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = BooksStore::new();
        store.insert(book("a1", "First", false, false)).await;
        store.insert(book("a2", "Second", false, false)).await;
        store.insert(book("a3", "Third", false, false)).await;

        let listed = store.list(&BookFilter::default()).await;
        let ids: Vec<&str> = listed.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["a1", "a2", "a3"]);
    }

    #[tokio::test]
    async fn test_list_applies_filters_conjunctively() {
        let store = BooksStore::new();
        store.insert(book("a1", "Dune", true, true)).await;
        store.insert(book("a2", "Dune Messiah", true, false)).await;
        store.insert(book("a3", "Emma", false, true)).await;

        let filter = BookFilter {
            reading: Some(true),
            finished: Some(false),
            name: Some("dune".to_string()),
        };
        let listed = store.list(&filter).await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "a2");
    }

    #[tokio::test]
    async fn test_update_mutates_in_place() {
        let store = BooksStore::new();
        store.insert(book("a1", "Dune", false, false)).await;

        let updated = store.update("a1", |b| b.name = "Dune Messiah".to_string()).await;
        assert!(updated);
        assert_eq!(store.find("a1").await.unwrap().name, "Dune Messiah");

        assert!(!store.update("zz", |_| ()).await);
    }

    #[tokio::test]
    async fn test_remove_preserves_remaining_order() {
        let store = BooksStore::new();
        store.insert(book("a1", "First", false, false)).await;
        store.insert(book("a2", "Second", false, false)).await;
        store.insert(book("a3", "Third", false, false)).await;

        assert!(store.remove("a2").await);
        assert!(!store.remove("a2").await);

        let listed = store.list(&BookFilter::default()).await;
        let ids: Vec<&str> = listed.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["a1", "a3"]);
        assert_eq!(store.len().await, 2);
    }
}
