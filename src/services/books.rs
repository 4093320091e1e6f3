//! Book service: validation, derivation, and store mutation.

use chrono::Utc;
use rand::{distributions::Alphanumeric, Rng};

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookPayload, BookQuery, BookShort},
    store::Store,
};

/// Length of generated book identifiers
const ID_LENGTH: usize = 16;

#[derive(Clone)]
pub struct BooksService {
    store: Store,
}

impl BooksService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Validate the payload, build the record, and append it to the store.
    ///
    /// Returns the generated id of the new book.
    pub async fn create(&self, payload: &BookPayload) -> AppResult<String> {
        let name = validate_payload(payload, "add")?;

        let id = self.unused_id().await;
        let now = Utc::now();
        let book = Book {
            id: id.clone(),
            name: name.to_string(),
            year: payload.year,
            author: payload.author.clone(),
            summary: payload.summary.clone(),
            publisher: payload.publisher.clone(),
            page_count: payload.page_count,
            read_page: payload.read_page,
            finished: payload.read_page == payload.page_count,
            reading: payload.reading,
            inserted_at: now,
            updated_at: now,
        };

        self.store.books.insert(book).await;
        tracing::debug!(book_id = %id, "book added");
        Ok(id)
    }

    /// List books matching the query, projected for the list endpoint
    pub async fn list(&self, query: &BookQuery) -> Vec<BookShort> {
        let filter = query.filter();
        self.store
            .books
            .list(&filter)
            .await
            .iter()
            .map(BookShort::from)
            .collect()
    }

    /// Fetch the full record for a book by id
    pub async fn get(&self, id: &str) -> AppResult<Book> {
        self.store
            .books
            .find(id)
            .await
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Replace a book's fields from the payload.
    ///
    /// Payload validation runs before the existence check, so a bad payload
    /// against an unknown id reports the validation error.
    pub async fn update(&self, id: &str, payload: &BookPayload) -> AppResult<()> {
        let name = validate_payload(payload, "update")?;

        let updated = self
            .store
            .books
            .update(id, |book| {
                book.name = name.to_string();
                book.year = payload.year;
                book.author = payload.author.clone();
                book.summary = payload.summary.clone();
                book.publisher = payload.publisher.clone();
                book.page_count = payload.page_count;
                book.read_page = payload.read_page;
                book.finished = payload.read_page == payload.page_count;
                book.reading = payload.reading;
                book.updated_at = Utc::now();
            })
            .await;

        if !updated {
            return Err(AppError::NotFound(
                "Failed to update book. Id not found".to_string(),
            ));
        }
        tracing::debug!(book_id = %id, "book updated");
        Ok(())
    }

    /// Remove a book by id
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        if !self.store.books.remove(id).await {
            return Err(AppError::NotFound(
                "Failed to delete book. Id not found".to_string(),
            ));
        }
        tracing::debug!(book_id = %id, "book deleted");
        Ok(())
    }

    /// Generate an id that is not already present in the store.
    ///
    /// Collisions over a 16-character alphanumeric space are negligible; the
    /// retry loop is a guard, not an expected path.
    async fn unused_id(&self) -> String {
        loop {
            let id = generate_id();
            if !self.store.books.contains(&id).await {
                return id;
            }
        }
    }
}

/// Random 16-character alphanumeric identifier
fn generate_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_LENGTH)
        .map(char::from)
        .collect()
}

/// Shared create/update validation, in contract order: the name check runs
/// first, then the page invariant.
fn validate_payload<'a>(payload: &'a BookPayload, action: &str) -> AppResult<&'a str> {
    let name = match payload.name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => {
            return Err(AppError::Validation(format!(
                "Failed to {} book. name is required",
                action
            )))
        }
    };

    if payload.read_page > payload.page_count {
        return Err(AppError::Validation(format!(
            "Failed to {} book. readPage must not be greater than pageCount",
            action
        )));
    }

    Ok(name)
}
