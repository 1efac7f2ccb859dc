//! Book (catalog) endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookQuery, CreateBook, UpdateBook},
    AppState,
};

use super::{ApiJson, ApiPath, ApiQuery};

/// One page of books
#[derive(Serialize, ToSchema)]
pub struct BookListResponse {
    pub success: bool,
    pub books: Vec<Book>,
    /// Books matching the filters, all pages included
    pub total_books: usize,
    /// Current page number
    pub page: u32,
    /// Books per page
    pub per_page: usize,
}

#[derive(Serialize, ToSchema)]
pub struct BookResponse {
    pub success: bool,
    pub book: Book,
}

#[derive(Serialize, ToSchema)]
pub struct BookCreatedResponse {
    pub success: bool,
    /// Identifier of the new book
    pub created: i32,
    pub book: Book,
    pub total_books: i64,
}

#[derive(Serialize, ToSchema)]
pub struct BookUpdatedResponse {
    pub success: bool,
    pub updated: i32,
    pub book: Book,
    pub total_books: i64,
}

#[derive(Serialize, ToSchema)]
pub struct BookDeletedResponse {
    pub success: bool,
    pub deleted: i32,
    /// Books left in the catalog
    pub total_books: i64,
}

/// List books, optionally filtered, 30 per page
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "Page of books", body = BookListResponse),
        (status = 400, description = "Invalid page", body = crate::error::ErrorResponse),
        (status = 404, description = "Page is empty", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<BookQuery>,
) -> AppResult<Json<BookListResponse>> {
    let page = state.services.catalog.list_books(&query).await?;

    // An empty page is reported as missing, whether the page is out of range or there are no books
    if page.books.is_empty() {
        return Err(AppError::NotFound(format!("No books on page {}", page.page)));
    }

    Ok(Json(BookListResponse {
        success: true,
        books: page.books,
        total_books: page.total,
        page: page.page,
        per_page: page.per_page,
    }))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = BookResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<BookResponse>> {
    let book = state.services.catalog.get_book(id).await?;
    Ok(Json(BookResponse { success: true, book }))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = BookCreatedResponse),
        (status = 400, description = "Malformed body", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid book", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    ApiJson(data): ApiJson<CreateBook>,
) -> AppResult<(StatusCode, Json<BookCreatedResponse>)> {
    let book = state.services.catalog.create_book(&data).await?;
    let total_books = state.services.catalog.count_books().await?;

    Ok((
        StatusCode::CREATED,
        Json(BookCreatedResponse {
            success: true,
            created: book.book_id,
            book,
            total_books,
        }),
    ))
}

/// Update a book; fields left out keep their value
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = BookUpdatedResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid book", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(data): ApiJson<UpdateBook>,
) -> AppResult<Json<BookUpdatedResponse>> {
    let book = state.services.catalog.update_book(id, &data).await?;
    let total_books = state.services.catalog.count_books().await?;

    Ok(Json(BookUpdatedResponse {
        success: true,
        updated: id,
        book,
        total_books,
    }))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = BookDeletedResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Book is still referenced by borrowings", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<BookDeletedResponse>> {
    state.services.catalog.delete_book(id).await?;
    let total_books = state.services.catalog.count_books().await?;

    Ok(Json(BookDeletedResponse {
        success: true,
        deleted: id,
        total_books,
    }))
}
