//! Book collection endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{Book, BookPayload, BookQuery, BookShort},
};

use super::{
    envelope::{DataEnvelope, MessageEnvelope},
    AppJson,
};

/// Data payload of the create response
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookIdData {
    /// Id of the newly created book
    pub book_id: String,
}

/// Data payload of the list response
#[derive(Serialize, ToSchema)]
pub struct BookListData {
    pub books: Vec<BookShort>,
}

/// Data payload of the detail response
#[derive(Serialize, ToSchema)]
pub struct BookData {
    pub book: Book,
}

/// Create a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book created", body = DataEnvelope<BookIdData>),
        (status = 400, description = "Missing name or readPage exceeds pageCount", body = crate::error::FailResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    AppJson(payload): AppJson<BookPayload>,
) -> AppResult<(StatusCode, Json<DataEnvelope<BookIdData>>)> {
    let book_id = state.services.books.create(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(DataEnvelope::with_message(
            "Book added successfully",
            BookIdData { book_id },
        )),
    ))
}

/// List books with optional filters
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "Books matching the filters, projected to id/name/publisher", body = DataEnvelope<BookListData>)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<DataEnvelope<BookListData>>> {
    let books = state.services.books.list(&query).await;

    Ok(Json(DataEnvelope::new(BookListData { books })))
}

/// Get full book details by id
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book id")),
    responses(
        (status = 200, description = "Book details", body = DataEnvelope<BookData>),
        (status = 404, description = "Book not found", body = crate::error::FailResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataEnvelope<BookData>>> {
    let book = state.services.books.get(&id).await?;

    Ok(Json(DataEnvelope::new(BookData { book })))
}

/// Update a book by id
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book id")),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated", body = MessageEnvelope),
        (status = 400, description = "Missing name or readPage exceeds pageCount", body = crate::error::FailResponse),
        (status = 404, description = "Book not found", body = crate::error::FailResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<BookPayload>,
) -> AppResult<Json<MessageEnvelope>> {
    state.services.books.update(&id, &payload).await?;

    Ok(Json(MessageEnvelope::new("Book updated successfully")))
}

/// Delete a book by id
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book id")),
    responses(
        (status = 200, description = "Book deleted", body = MessageEnvelope),
        (status = 404, description = "Book not found", body = crate::error::FailResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageEnvelope>> {
    state.services.books.delete(&id).await?;

    Ok(Json(MessageEnvelope::new("Book deleted successfully")))
}
