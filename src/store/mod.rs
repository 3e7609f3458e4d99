//! Storage handle: the one shared path from handlers to the database.
//!
//! Handlers only see `dyn LibraryStore`; `PgStore` is the production implementation.

mod postgres;
#[cfg(test)]
pub(crate) mod memory;

pub use postgres::PgStore;

use crate::error::AppError;
use crate::model::{Book, BookInput, Category, NewCategory};
use async_trait::async_trait;

/// One method per SQL statement the service issues. Each call is a single statement; no transactions span calls.
#[async_trait]
pub trait LibraryStore: Send + Sync + 'static {
    /// Liveness check used at startup and by `/ready`.
    async fn ping(&self) -> Result<(), AppError>;

    async fn list_categories(&self) -> Result<Vec<Category>, AppError>;

    /// Insert a category and return it with its generated id.
    async fn create_category(&self, input: NewCategory) -> Result<Category, AppError>;

    async fn list_books(&self) -> Result<Vec<Book>, AppError>;

    /// Insert a book and return it with its generated id.
    async fn create_book(&self, input: BookInput) -> Result<Book, AppError>;

    /// Replace title, author and category of book `id`. Returns rows affected (0 when `id` is unknown).
    async fn update_book(&self, id: i32, input: BookInput) -> Result<u64, AppError>;

    /// Returns rows affected (0 when `id` is unknown).
    async fn delete_book(&self, id: i32) -> Result<u64, AppError>;

    /// Books whose title or author contains `needle`. Empty `needle` matches every book.
    async fn search_books(&self, needle: &str) -> Result<Vec<Book>, AppError>;
}
