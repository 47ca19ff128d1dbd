//! Books API endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookShort, CreateBook, MessageResponse, UpdateBook},
    AppState,
};

use super::{IdPath, JsonBody};

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = Vec<BookShort>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<Vec<BookShort>>> {
    let books = state.services.books.list().await?;
    Ok(Json(books.into_iter().map(BookShort::from).collect()))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = BookShort),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<BookShort>> {
    let book = state.services.books.get(id).await?;
    Ok(Json(book.into()))
}

/// List the books of a category.
///
/// Answers 404 both for an unknown category and for a category without books.
#[utoipa::path(
    get,
    path = "/books/category/{category_id}",
    tag = "books",
    params(("category_id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Books in the category", body = Vec<Book>),
        (status = 404, description = "No books found in the category", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books_by_category(
    State(state): State<AppState>,
    IdPath(category_id): IdPath,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list_by_category(category_id).await?;
    Ok(Json(books))
}

/// Create a book; an unknown category id gets a default category
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Missing field or malformed body", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    JsonBody(data): JsonBody<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = state.services.books.create(data).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Update a book.
///
/// The body is only validated once the book is known to exist.
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Missing title/author or malformed body", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    body: Result<JsonBody<UpdateBook>, AppError>,
) -> AppResult<Json<Book>> {
    let data = body.map(|JsonBody(data)| data);
    let book = state.services.books.update(id, data).await?;
    Ok(Json(book))
}

/// Delete a book, and its category when it was the last book in it
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<MessageResponse>> {
    let outcome = state.services.books.delete(id).await?;
    Ok(Json(outcome.into()))
}
