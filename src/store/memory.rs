//! In-memory `LibraryStore` used by router tests.

use super::LibraryStore;
use crate::error::AppError;
use crate::model::{Book, BookInput, Category, NewCategory};
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Default)]
struct Tables {
    categories: Vec<Category>,
    books: Vec<Book>,
    next_category_id: i32,
    next_book_id: i32,
}

/// Mirrors `PgStore` semantics: generated ids start at 1, search is a case-sensitive substring match.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    failing: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails as if the database were unreachable.
    pub fn failing() -> Self {
        Self {
            tables: Mutex::default(),
            failing: true,
        }
    }

    fn tables(&self) -> Result<std::sync::MutexGuard<'_, Tables>, AppError> {
        if self.failing {
            return Err(AppError::Db(sqlx::Error::PoolTimedOut));
        }
        Ok(self.tables.lock().unwrap())
    }
}

#[async_trait]
impl LibraryStore for MemoryStore {
    async fn ping(&self) -> Result<(), AppError> {
        self.tables().map(|_| ())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        Ok(self.tables()?.categories.clone())
    }

    async fn create_category(&self, input: NewCategory) -> Result<Category, AppError> {
        let mut t = self.tables()?;
        t.next_category_id += 1;
        let category = input.into_category(t.next_category_id);
        t.categories.push(category.clone());
        Ok(category)
    }

    async fn list_books(&self) -> Result<Vec<Book>, AppError> {
        Ok(self.tables()?.books.clone())
    }

    async fn create_book(&self, input: BookInput) -> Result<Book, AppError> {
        let mut t = self.tables()?;
        t.next_book_id += 1;
        let book = input.into_book(t.next_book_id);
        t.books.push(book.clone());
        Ok(book)
    }

    async fn update_book(&self, id: i32, input: BookInput) -> Result<u64, AppError> {
        let mut t = self.tables()?;
        match t.books.iter_mut().find(|b| b.id == id) {
            Some(book) => {
                *book = input.into_book(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_book(&self, id: i32) -> Result<u64, AppError> {
        let mut t = self.tables()?;
        let before = t.books.len();
        t.books.retain(|b| b.id != id);
        Ok((before - t.books.len()) as u64)
    }

    async fn search_books(&self, needle: &str) -> Result<Vec<Book>, AppError> {
        Ok(self
            .tables()?
            .books
            .iter()
            .filter(|b| b.title.contains(needle) || b.author.contains(needle))
            .cloned()
            .collect())
    }
}
