//! Book model and request payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

/// Book record as stored in the `books` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub genre: String,
    /// Publication year
    pub year: i32,
    /// Row version, bumped on every successful update
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create book request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "Title is required."),
        length(max = 200, message = "Title can't be more than 200 characters.")
    )]
    pub title: String,
    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "Author is required."),
        length(max = 150, message = "Author can't be more than 150 characters.")
    )]
    pub author: String,
    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "Genre is required."),
        length(max = 100, message = "Genre can't be more than 100 characters.")
    )]
    pub genre: String,
    #[validate(
        required(message = "Year is required."),
        range(min = 1450, max = 2025, message = "Year must be between 1450 and 2025.")
    )]
    pub year: Option<i32>,
}

/// Full replacement of a stored book.
///
/// `version` is the version the caller read; the write is rejected when the
/// stored row has moved on since. Without it, the version current at the start
/// of the update is expected instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    pub id: i32,
    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "Title is required."),
        length(max = 200, message = "Title can't be more than 200 characters.")
    )]
    pub title: String,
    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "Author is required."),
        length(max = 150, message = "Author can't be more than 150 characters.")
    )]
    pub author: String,
    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "Genre is required."),
        length(max = 100, message = "Genre can't be more than 100 characters.")
    )]
    pub genre: String,
    #[validate(
        required(message = "Year is required."),
        range(min = 1450, max = 2025, message = "Year must be between 1450 and 2025.")
    )]
    pub year: Option<i32>,
    #[serde(default)]
    pub version: Option<i32>,
}

/// Query string for title search
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct TitleSearch {
    /// Part of the title to look for (case-insensitive)
    pub title: Option<String>,
}

impl From<&Book> for UpdateBook {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone(),
            year: Some(book.year),
            version: Some(book.version),
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}
