//! Shared fixtures: an in-memory store and a router built on it.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::Utc;
use serde_json::Value;
use tower::ServiceExt;

use book_catalog::{
    api,
    error::AppResult,
    models::{Book, CreateBook, UpdateBook},
    repository::BooksStore,
    services::Services,
    AppConfig, AppState,
};

#[derive(Default)]
struct Table {
    rows: BTreeMap<i32, Book>,
    last_id: i32,
}

/// `BooksStore` over a map, with the same version check as the SQL store
#[derive(Default)]
pub struct InMemoryBooks {
    table: Mutex<Table>,
}

impl InMemoryBooks {
    pub fn len(&self) -> usize {
        self.table.lock().unwrap().rows.len()
    }

    /// Bump a row's version behind the service's back
    pub fn touch(&self, id: i32) {
        let mut table = self.table.lock().unwrap();
        if let Some(book) = table.rows.get_mut(&id) {
            book.version += 1;
        }
    }
}

#[async_trait]
impl BooksStore for InMemoryBooks {
    async fn books_list(&self) -> AppResult<Vec<Book>> {
        Ok(self.table.lock().unwrap().rows.values().cloned().collect())
    }

    async fn books_get_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        Ok(self.table.lock().unwrap().rows.get(&id).cloned())
    }

    async fn books_create(&self, data: &CreateBook) -> AppResult<Book> {
        let mut table = self.table.lock().unwrap();
        table.last_id += 1;
        let now = Utc::now();
        let book = Book {
            id: table.last_id,
            title: data.title.clone(),
            author: data.author.clone(),
            genre: data.genre.clone(),
            year: data.year.unwrap_or_default(),
            version: 1,
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(book.id, book.clone());
        Ok(book)
    }

    async fn books_replace(&self, data: &UpdateBook, expected_version: i32) -> AppResult<Option<Book>> {
        let mut table = self.table.lock().unwrap();
        let Some(book) = table.rows.get_mut(&data.id) else {
            return Ok(None);
        };
        if book.version != expected_version {
            return Ok(None);
        }
        book.title = data.title.clone();
        book.author = data.author.clone();
        book.genre = data.genre.clone();
        book.year = data.year.unwrap_or(book.year);
        book.version += 1;
        book.updated_at = Utc::now();
        Ok(Some(book.clone()))
    }

    async fn books_exists(&self, id: i32) -> AppResult<bool> {
        Ok(self.table.lock().unwrap().rows.contains_key(&id))
    }

    async fn books_delete(&self, id: i32) -> AppResult<bool> {
        Ok(self.table.lock().unwrap().rows.remove(&id).is_some())
    }

    async fn books_by_genre(&self, genre: &str) -> AppResult<Vec<Book>> {
        let genre = genre.to_lowercase();
        Ok(self
            .table
            .lock()
            .unwrap()
            .rows
            .values()
            .filter(|b| b.genre.to_lowercase() == genre)
            .cloned()
            .collect())
    }

    async fn books_search_title(&self, title: &str) -> AppResult<Vec<Book>> {
        let title = title.to_lowercase();
        Ok(self
            .table
            .lock()
            .unwrap()
            .rows
            .values()
            .filter(|b| b.title.to_lowercase().contains(&title))
            .cloned()
            .collect())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

pub fn app() -> (Router, Arc<InMemoryBooks>) {
    let store = Arc::new(InMemoryBooks::default());
    let state = AppState {
        config: Arc::new(AppConfig::default()),
        services: Arc::new(Services::new(store.clone())),
    };
    (api::create_router(state), store)
}

/// Send one request and return the status, the Location header and the JSON body (Null when empty)
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Option<String>, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let location = response
        .headers()
        .get("location")
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, location, json)
}
