//! PostgreSQL implementation of `LibraryStore` over a sqlx pool.

use super::LibraryStore;
use crate::error::AppError;
use crate::model::{Book, BookInput, Category, NewCategory};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Pool size is fixed; it is not read from configuration.
const MAX_CONNECTIONS: u32 = 5;

const PING: &str = "SELECT 1";
const LIST_CATEGORIES: &str = "SELECT id, nama_kategori FROM kategori_buku";
const INSERT_CATEGORY: &str = "INSERT INTO kategori_buku (nama_kategori) VALUES ($1) RETURNING id";
const LIST_BOOKS: &str = "SELECT id, judul, penulis, kategori_id FROM buku";
const INSERT_BOOK: &str = "INSERT INTO buku (judul, penulis, kategori_id) VALUES ($1, $2, $3) RETURNING id";
const UPDATE_BOOK: &str = "UPDATE buku SET judul = $1, penulis = $2, kategori_id = $3 WHERE id = $4";
const DELETE_BOOK: &str = "DELETE FROM buku WHERE id = $1";
const SEARCH_BOOKS: &str =
    "SELECT id, judul, penulis, kategori_id FROM buku WHERE judul LIKE $1 OR penulis LIKE $1";

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open the pool and run the liveness check. Either failure is returned as-is; callers treat it as fatal.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(database_url)
            .await?;
        sqlx::query(PING).execute(&pool).await?;
        Ok(Self::new(pool))
    }
}

/// LIKE pattern matching `needle` anywhere in the value. `\`, `%` and `_` are escaped so they match literally.
fn contains_pattern(needle: &str) -> String {
    let mut out = String::with_capacity(needle.len() + 2);
    out.push('%');
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('%');
    out
}

#[async_trait]
impl LibraryStore for PgStore {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query(PING).execute(&self.pool).await?;
        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        tracing::debug!(sql = %LIST_CATEGORIES, "query");
        let rows = sqlx::query_as::<_, Category>(LIST_CATEGORIES)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create_category(&self, input: NewCategory) -> Result<Category, AppError> {
        tracing::debug!(sql = %INSERT_CATEGORY, "query");
        let id: i32 = sqlx::query_scalar(INSERT_CATEGORY)
            .bind(&input.name)
            .fetch_one(&self.pool)
            .await?;
        Ok(input.into_category(id))
    }

    async fn list_books(&self) -> Result<Vec<Book>, AppError> {
        tracing::debug!(sql = %LIST_BOOKS, "query");
        let rows = sqlx::query_as::<_, Book>(LIST_BOOKS)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create_book(&self, input: BookInput) -> Result<Book, AppError> {
        tracing::debug!(sql = %INSERT_BOOK, "query");
        let id: i32 = sqlx::query_scalar(INSERT_BOOK)
            .bind(&input.title)
            .bind(&input.author)
            .bind(input.category_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(input.into_book(id))
    }

    async fn update_book(&self, id: i32, input: BookInput) -> Result<u64, AppError> {
        tracing::debug!(sql = %UPDATE_BOOK, id, "query");
        let result = sqlx::query(UPDATE_BOOK)
            .bind(&input.title)
            .bind(&input.author)
            .bind(input.category_id)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete_book(&self, id: i32) -> Result<u64, AppError> {
        tracing::debug!(sql = %DELETE_BOOK, id, "query");
        let result = sqlx::query(DELETE_BOOK).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn search_books(&self, needle: &str) -> Result<Vec<Book>, AppError> {
        let pattern = contains_pattern(needle);
        tracing::debug!(sql = %SEARCH_BOOKS, pattern = %pattern, "query");
        let rows = sqlx::query_as::<_, Book>(SEARCH_BOOKS)
            .bind(&pattern)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
