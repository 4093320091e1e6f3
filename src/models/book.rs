//! Book record model and related types.
//!
//! The wire format is camelCase JSON; timestamps are RFC 3339 UTC.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A single book record held in the store.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Opaque unique identifier, generated at creation, immutable
    pub id: String,
    /// Book title, required and non-empty
    pub name: String,
    /// Publication year
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    /// Total number of pages
    pub page_count: u32,
    /// Pages read so far, never greater than `page_count`
    pub read_page: u32,
    /// Derived: `read_page == page_count`, never caller-supplied
    pub finished: bool,
    /// Whether the book is currently being read
    pub reading: bool,
    /// Set once at creation, immutable
    pub inserted_at: DateTime<Utc>,
    /// Refreshed on every update
    pub updated_at: DateTime<Utc>,
}

/// Projection of a book used by the list endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookShort {
    pub id: String,
    pub name: String,
    pub publisher: Option<String>,
}

impl From<&Book> for BookShort {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            name: book.name.clone(),
            publisher: book.publisher.clone(),
        }
    }
}

/// Write payload shared by the create and update endpoints.
///
/// Absent integers default to zero and an absent `reading` flag defaults to
/// false, so the `read_page <= page_count` invariant is checked against the
/// values that would actually be stored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct BookPayload {
    /// Book title, validated as present and non-empty
    pub name: Option<String>,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: u32,
    pub read_page: u32,
    pub reading: bool,
}

/// Query parameters accepted by the list endpoint.
///
/// `reading` and `finished` are kept as raw strings: a parameter only
/// participates when present and non-empty, and its value coerces by numeric
/// truthiness rather than strict boolean parsing.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct BookQuery {
    /// Filter by reading flag ("1"/"0" style truthiness)
    pub reading: Option<String>,
    /// Filter by derived finished flag ("1"/"0" style truthiness)
    pub finished: Option<String>,
    /// Case-insensitive substring match on the title
    pub name: Option<String>,
}

impl BookQuery {
    /// Resolve the raw query into the typed filter applied by the store.
    pub fn filter(&self) -> BookFilter {
        BookFilter {
            reading: self.reading.as_deref().filter(|raw| !raw.is_empty()).map(truthy),
            finished: self.finished.as_deref().filter(|raw| !raw.is_empty()).map(truthy),
            name: self
                .name
                .as_deref()
                .filter(|raw| !raw.is_empty())
                .map(str::to_lowercase),
        }
    }
}

/// Typed list filter; conditions are applied conjunctively.
#[derive(Debug, Clone, Default)]
pub struct BookFilter {
    pub reading: Option<bool>,
    pub finished: Option<bool>,
    /// Already lowercased needle for the title substring match
    pub name: Option<String>,
}

/// Numeric truthiness: non-zero numeric strings are true, everything else
/// ("0", non-numeric garbage) is false.
fn truthy(raw: &str) -> bool {
    raw.parse::<f64>().map(|value| value != 0.0).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_book_wire_format_is_camel_case() {
        let now = Utc::now();
        let book = Book {
            id: "abc".to_string(),
            name: "Dune".to_string(),
            year: None,
            author: None,
            summary: None,
            publisher: None,
            page_count: 412,
            read_page: 30,
            finished: false,
            reading: true,
            inserted_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value["pageCount"], 412);
        assert_eq!(value["readPage"], 30);
        assert!(value.get("insertedAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert_eq!(value["publisher"], serde_json::Value::Null);
    }

    #[test]
    fn test_payload_absent_fields_default() {
        let payload: BookPayload = serde_json::from_str(r#"{"name": "Dune"}"#).unwrap();
        assert_eq!(payload.name.as_deref(), Some("Dune"));
        assert_eq!(payload.page_count, 0);
        assert_eq!(payload.read_page, 0);
        assert!(!payload.reading);
        assert!(payload.publisher.is_none());
    }

    #[test]
    fn test_truthy_coercion() {
        assert!(truthy("1"));
        assert!(truthy("2"));
        assert!(truthy("1.5"));
        assert!(!truthy("0"));
        assert!(!truthy("0.0"));
        assert!(!truthy("abc"));
        assert!(!truthy("true"));
    }

    #[test]
    fn test_absent_or_empty_params_do_not_filter() {
        let query = BookQuery {
            reading: Some(String::new()),
            finished: None,
            name: Some(String::new()),
        };
        let filter = query.filter();
        assert_eq!(filter.reading, None);
        assert_eq!(filter.finished, None);
        assert_eq!(filter.name, None);
    }

    #[test]
    fn test_filter_lowercases_name_needle() {
        let query = BookQuery {
            reading: Some("0".to_string()),
            finished: Some("1".to_string()),
            name: Some("Dune".to_string()),
        };
        let filter = query.filter();
        assert_eq!(filter.reading, Some(false));
        assert_eq!(filter.finished, Some(true));
        assert_eq!(filter.name.as_deref(), Some("dune"));
    }
}
