//! Book catalog endpoints

use axum::{extract::State, http::StatusCode, Json};

use super::{Path, ValidatedJson};
use crate::{
    error::{AppError, AppResult},
    models::{Book, BookData, BookId},
    AppState,
};

/// List all books
#[utoipa::path(
    get,
    path = "/books/",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = Vec<Book>)
    )
)]
pub async fn get_all_books(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.get_all_books().await?;
    Ok(Json(books))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book_by_id(
    State(state): State<AppState>,
    Path(id): Path<BookId>,
) -> AppResult<Json<Book>> {
    state
        .services
        .books
        .get_book_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Book not found with id {}", id)))
}

/// List books of a genre (exact match)
#[utoipa::path(
    get,
    path = "/books/genre/{genre}",
    tag = "books",
    params(("genre" = String, Path, description = "Genre")),
    responses(
        (status = 200, description = "Books of the genre", body = Vec<Book>)
    )
)]
pub async fn get_books_by_genre(
    State(state): State<AppState>,
    Path(genre): Path<String>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.get_books_by_genre(&genre).await?;
    Ok(Json(books))
}

/// List books by an author (exact match)
#[utoipa::path(
    get,
    path = "/books/author/{author}",
    tag = "books",
    params(("author" = String, Path, description = "Author")),
    responses(
        (status = 200, description = "Books by the author", body = Vec<Book>)
    )
)]
pub async fn get_books_by_author(
    State(state): State<AppState>,
    Path(author): Path<String>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.get_books_by_author(&author).await?;
    Ok(Json(books))
}

/// List available or unavailable books
#[utoipa::path(
    get,
    path = "/books/availability/{flag}",
    tag = "books",
    params(("flag" = bool, Path, description = "Availability status")),
    responses(
        (status = 200, description = "Books with the given availability", body = Vec<Book>),
        (status = 400, description = "Flag is not a boolean", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_books_by_availability_status(
    State(state): State<AppState>,
    Path(flag): Path<bool>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state
        .services
        .books
        .get_books_by_availability_status(flag)
        .await?;
    Ok(Json(books))
}

/// Add a book
#[utoipa::path(
    post,
    path = "/books/create",
    tag = "books",
    request_body = BookData,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Malformed body", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_book(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<BookData>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = state.services.books.add_book(data).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Replace every field of a book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    request_body = BookData,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Malformed body", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<BookId>,
    ValidatedJson(data): ValidatedJson<BookData>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.update_book(id, data).await?;
    Ok(Json(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<BookId>,
) -> AppResult<StatusCode> {
    state.services.books.delete_book(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
