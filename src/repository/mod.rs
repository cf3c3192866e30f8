//! Repository layer for database operations

pub mod books;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, UpdateBook},
};

/// Persistence operations the book service relies on.
///
/// Lookups return `None`/`false` for missing rows; callers decide what a miss means.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BooksStore: Send + Sync {
    /// All books, ordered by id
    async fn books_list(&self) -> AppResult<Vec<Book>>;

    async fn books_get_by_id(&self, id: i32) -> AppResult<Option<Book>>;

    /// Insert a validated payload; the store assigns id, version and timestamps
    async fn books_create(&self, data: &CreateBook) -> AppResult<Book>;

    /// Replace the row `data.id` if its version still equals `expected_version`.
    /// Returns `None` when no row matched (deleted or concurrently changed).
    async fn books_replace(&self, data: &UpdateBook, expected_version: i32) -> AppResult<Option<Book>>;

    async fn books_exists(&self, id: i32) -> AppResult<bool>;

    /// Returns `false` when there was nothing to delete
    async fn books_delete(&self, id: i32) -> AppResult<bool>;

    /// Case-insensitive genre equality
    async fn books_by_genre(&self, genre: &str) -> AppResult<Vec<Book>>;

    /// Case-insensitive literal substring match on title
    async fn books_search_title(&self, title: &str) -> AppResult<Vec<Book>>;

    /// Round-trip to the store, used by the readiness probe
    async fn ping(&self) -> AppResult<()>;
}

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}
