//! Books domain methods on Repository

use async_trait::async_trait;

use super::{BooksStore, Repository};
use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, UpdateBook},
};

#[async_trait]
impl BooksStore for Repository {
    async fn books_list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn books_get_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn books_create(&self, data: &CreateBook) -> AppResult<Book> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, genre, year)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(&data.author)
        .bind(&data.genre)
        .bind(data.year)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn books_replace(&self, data: &UpdateBook, expected_version: i32) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET title = $1, author = $2, genre = $3, year = $4,
                version = version + 1, updated_at = NOW()
            WHERE id = $5 AND version = $6
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(&data.author)
        .bind(&data.genre)
        .bind(data.year)
        .bind(data.id)
        .bind(expected_version)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn books_exists(&self, id: i32) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn books_delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn books_by_genre(&self, genre: &str) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE LOWER(genre) = LOWER($1) ORDER BY id",
        )
        .bind(genre)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn books_search_title(&self, title: &str) -> AppResult<Vec<Book>> {
        // STRPOS keeps `%` and `_` in the term literal, unlike ILIKE
        let rows = sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE STRPOS(LOWER(title), LOWER($1)) > 0 ORDER BY id",
        )
        .bind(title)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
