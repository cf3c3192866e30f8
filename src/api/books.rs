//! Book endpoints

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    Json,
};

use super::AppJson;
use crate::{
    error::{AppResult, ErrorResponse},
    models::book::{Book, CreateBook, TitleSearch, UpdateBook},
};

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list().await?;
    Ok(Json(books))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get_by_id(id).await?;
    Ok(Json(book))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book,
            headers(("Location" = String, description = "URL of the new book"))),
        (status = 400, description = "Malformed body or invalid fields", body = ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    AppJson(data): AppJson<CreateBook>,
) -> AppResult<(StatusCode, [(header::HeaderName, String); 1], Json<Book>)> {
    let book = state.services.books.create(&data).await?;
    let location = format!("{}/books/{}", state.config.server.api_prefix, book.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(book)))
}

/// Replace an existing book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    request_body = UpdateBook,
    responses(
        (status = 204, description = "Book updated"),
        (status = 400, description = "Malformed body, invalid fields or id mismatch", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse),
        (status = 409, description = "Book was modified concurrently", body = ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    AppJson(data): AppJson<UpdateBook>,
) -> AppResult<StatusCode> {
    state.services.books.update(id, &data).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.books.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List books of a genre (case-insensitive)
#[utoipa::path(
    get,
    path = "/books/genre/{genre}",
    tag = "books",
    params(("genre" = String, Path, description = "Genre name")),
    responses(
        (status = 200, description = "Books in the genre", body = Vec<Book>),
        (status = 404, description = "No books in the genre", body = ErrorResponse)
    )
)]
pub async fn books_by_genre(
    State(state): State<crate::AppState>,
    Path(genre): Path<String>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.filter_by_genre(&genre).await?;
    Ok(Json(books))
}

/// Search books by part of their title (case-insensitive)
#[utoipa::path(
    get,
    path = "/books/search",
    tag = "books",
    params(TitleSearch),
    responses(
        (status = 200, description = "Matching books", body = Vec<Book>),
        (status = 400, description = "Empty search term", body = ErrorResponse),
        (status = 404, description = "No matching books", body = ErrorResponse)
    )
)]
pub async fn search_books(
    State(state): State<crate::AppState>,
    Query(query): Query<TitleSearch>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.search_by_title(query.title.as_deref()).await?;
    Ok(Json(books))
}
