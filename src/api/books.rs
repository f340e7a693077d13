//! Book endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    mappers::{BookMapper, Mapper},
    models::{Book, BookDto, Page, PageQuery, PageRequest},
    AppState,
};

/// One page of books
#[derive(Serialize, ToSchema)]
pub struct BookPage {
    /// Books on this page, ordered by ISBN
    pub items: Vec<BookDto>,
    /// Total number of books
    pub total: i64,
    /// Current page number
    pub page: i64,
    /// Books per page
    pub per_page: i64,
}

impl From<Page<Book>> for BookPage {
    fn from(page: Page<Book>) -> Self {
        let page = page.map(|book| BookMapper.map_to(book));
        Self {
            items: page.items,
            total: page.total,
            page: page.page,
            per_page: page.per_page,
        }
    }
}

/// Create or replace a book
#[utoipa::path(
    put,
    path = "/books/{isbn}",
    tag = "books",
    params(("isbn" = String, Path, description = "Book ISBN")),
    request_body = BookDto,
    responses(
        (status = 200, description = "Existing book replaced", body = BookDto),
        (status = 201, description = "Book created", body = BookDto),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn upsert_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    Json(dto): Json<BookDto>,
) -> AppResult<(StatusCode, Json<BookDto>)> {
    let book = BookMapper.map_from(dto);
    let existed = state.services.books.exists(&isbn).await?;
    let saved = state.services.books.upsert(&isbn, book).await?;

    let status = if existed { StatusCode::OK } else { StatusCode::CREATED };
    Ok((status, Json(BookMapper.map_to(saved))))
}

/// List books with pagination
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(
        ("page" = Option<i64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<i64>, Query, description = "Books per page (default: 20)")
    ),
    responses(
        (status = 200, description = "Page of books", body = BookPage)
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<BookPage>> {
    let request = PageRequest::from_query(&query, &state.config.pagination);
    let page = state.services.books.list_all(request).await?;
    Ok(Json(page.into()))
}

/// Get a book by ISBN
#[utoipa::path(
    get,
    path = "/books/{isbn}",
    tag = "books",
    params(("isbn" = String, Path, description = "Book ISBN")),
    responses(
        (status = 200, description = "Book details", body = BookDto),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<BookDto>> {
    let book = state
        .services
        .books
        .find_one(&isbn)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book {} not found", isbn)))?;
    Ok(Json(BookMapper.map_to(book)))
}

/// Update the fields present in the body
#[utoipa::path(
    patch,
    path = "/books/{isbn}",
    tag = "books",
    params(("isbn" = String, Path, description = "Book ISBN")),
    request_body = BookDto,
    responses(
        (status = 200, description = "Book updated", body = BookDto),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found")
    )
)]
pub async fn partial_update_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    Json(dto): Json<BookDto>,
) -> AppResult<Json<BookDto>> {
    if !state.services.books.exists(&isbn).await? {
        return Err(AppError::NotFound(format!("Book {} not found", isbn)));
    }

    let patch = BookMapper.map_patch(dto);
    let updated = state.services.books.partial_update(&isbn, patch).await?;
    Ok(Json(BookMapper.map_to(updated)))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{isbn}",
    tag = "books",
    params(("isbn" = String, Path, description = "Book ISBN")),
    responses(
        (status = 204, description = "Book deleted, or never existed")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> AppResult<StatusCode> {
    state.services.books.delete(&isbn).await?;
    Ok(StatusCode::NO_CONTENT)
}
