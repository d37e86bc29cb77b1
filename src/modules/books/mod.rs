pub mod models;
pub mod store;

use async_trait::async_trait;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::json;

use bookshop_http::error::AppError;
use bookshop_kernel::{InitCtx, Module};

use crate::utils;
use models::{Book, BookInput, BookList, BookPatch};
use store::SharedBookStore;

/// Books module: the five CRUD routes over the external key-value store.
pub struct BooksModule {
    store: SharedBookStore,
}

impl BooksModule {
    pub fn new(store: SharedBookStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            table = %ctx.settings.store.table,
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/", get(list_books).post(create_book))
            .route(
                "/{id}",
                get(get_book).put(update_book).delete(delete_book),
            )
            .with_state(self.store.clone())
    }
}

/// Create a new instance of the books module.
pub fn create_module(store: SharedBookStore) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(BooksModule::new(store))
}

/// POST `/books`: write a complete new record in one store call.
///
/// The id is the creation timestamp; a second create within the same clock
/// tick overwrites rather than conflicts. The response acknowledges without
/// echoing the assigned id.
async fn create_book(
    State(store): State<SharedBookStore>,
    Json(input): Json<BookInput>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    require_fields(&input)?;

    let now = utils::now_iso8601();
    let book = Book {
        id: now.clone(),
        title: input.title,
        author: input.author,
        publish_year: input.publish_year,
        created_at: Some(now.clone()),
        updated_at: Some(now),
    };

    store.put(&book).await.map_err(store_error)?;

    tracing::info!(id = %book.id, "book created");
    Ok((
        StatusCode::CREATED,
        Json(json!({"message": "Book created successfully!"})),
    ))
}

/// GET `/books`: full table scan, store-defined order.
async fn list_books(State(store): State<SharedBookStore>) -> Result<Json<BookList>, AppError> {
    let books = store.scan().await.map_err(store_error)?;

    Ok(Json(BookList {
        count: books.len(),
        data: books,
    }))
}

/// GET `/books/{id}`: point lookup.
async fn get_book(
    State(store): State<SharedBookStore>,
    Path(id): Path<String>,
) -> Result<Json<Book>, AppError> {
    let book = store
        .get(&id)
        .await
        .map_err(store_error)?
        .ok_or_else(|| AppError::not_found("Book not found!"))?;

    Ok(Json(book))
}

/// PUT `/books/{id}`: conditional update of the three mutable fields plus
/// `updatedAt`; `id` and `createdAt` are never touched.
async fn update_book(
    State(store): State<SharedBookStore>,
    Path(id): Path<String>,
    Json(input): Json<BookInput>,
) -> Result<Json<serde_json::Value>, AppError> {
    let (title, author, publish_year) = require_fields(&input)?;

    let patch = BookPatch {
        title,
        author,
        publish_year,
        updated_at: utils::now_iso8601(),
    };

    let existed = store.update(&id, &patch).await.map_err(store_error)?;
    if !existed {
        return Err(AppError::not_found("Book not found!"));
    }

    tracing::info!(id = %id, "book updated");
    Ok(Json(json!({"message": "Book updated successfully!"})))
}

/// DELETE `/books/{id}`: hard delete. Deleting an already-deleted id is a
/// miss, not a silent success.
async fn delete_book(
    State(store): State<SharedBookStore>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let existed = store.delete(&id).await.map_err(store_error)?;
    if !existed {
        return Err(AppError::not_found("Book not found!"));
    }

    tracing::info!(id = %id, "book deleted");
    Ok(Json(json!({"message": "Book deleted successfully!"})))
}

/// Reject the request before any store call when a required field is
/// missing or empty.
fn require_fields(input: &BookInput) -> Result<(String, String, i64), AppError> {
    let missing = input.missing_fields();
    if !missing.is_empty() {
        let details = missing
            .iter()
            .map(|field| json!({"field": field, "error": "required"}))
            .collect();
        return Err(AppError::validation(details, "Send all required fields!"));
    }

    // Presence was just checked.
    Ok((
        input.title.clone().unwrap_or_default(),
        input.author.clone().unwrap_or_default(),
        input.publish_year.unwrap_or_default(),
    ))
}

fn store_error(err: bookshop_db::StoreError) -> AppError {
    AppError::store(err.to_string())
}
