//! Book resource service

use std::sync::Arc;

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
    repository::BooksStore,
};

#[derive(Clone)]
pub struct BooksService {
    store: Arc<dyn BooksStore>,
}

impl BooksService {
    pub fn new(store: Arc<dyn BooksStore>) -> Self {
        Self { store }
    }

    /// List every book
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.store.books_list().await
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        self.store
            .books_get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Validate and insert a new book
    pub async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        data.validate()?;

        let book = self.store.books_create(data).await?;
        tracing::info!(book_id = book.id, title = %book.title, "book created");
        Ok(book)
    }

    /// Replace a book.
    ///
    /// Without a `version` in the payload the row's current version is read first.
    /// A write that matches no row is re-checked once: a vanished row is a
    /// not-found, anything else is a version conflict handed back unchanged.
    pub async fn update(&self, id: i32, data: &UpdateBook) -> AppResult<Book> {
        if id != data.id {
            return Err(AppError::BadRequest(format!(
                "Path id {} does not match book id {}",
                id, data.id
            )));
        }
        data.validate()?;

        let expected_version = match data.version {
            Some(version) => version,
            None => self.get_by_id(id).await?.version,
        };

        if let Some(book) = self.store.books_replace(data, expected_version).await? {
            tracing::info!(book_id = id, version = book.version, "book updated");
            return Ok(book);
        }

        if !self.store.books_exists(id).await? {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }

        tracing::warn!(book_id = id, expected_version, "book update conflict");
        Err(AppError::Conflict(format!(
            "Book {} was modified by another request (expected version {})",
            id, expected_version
        )))
    }

    /// Delete a book
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.store.books_delete(id).await? {
            return Err(AppError::NotFound(format!(
                "No book with ID {} was found.",
                id
            )));
        }
        tracing::info!(book_id = id, "book deleted");
        Ok(())
    }

    /// Books whose genre equals `genre`, ignoring case. An empty match is a not-found.
    pub async fn filter_by_genre(&self, genre: &str) -> AppResult<Vec<Book>> {
        let books = self.store.books_by_genre(genre).await?;
        if books.is_empty() {
            return Err(AppError::NotFound(format!(
                "No books were found in the genre '{}'.",
                genre
            )));
        }
        Ok(books)
    }

    /// Books whose title contains `title`, ignoring case
    pub async fn search_by_title(&self, title: Option<&str>) -> AppResult<Vec<Book>> {
        let title = match title {
            Some(t) if !t.trim().is_empty() => t,
            _ => return Err(AppError::BadRequest("Title cannot be empty.".to_string())),
        };

        let books = self.store.books_search_title(title).await?;
        if books.is_empty() {
            return Err(AppError::NotFound(format!(
                "No books were found with a title containing '{}'.",
                title
            )));
        }
        Ok(books)
    }

    /// Check the store is reachable
    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }
}
