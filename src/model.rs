//! Row shapes for `kategori_buku` and `buku`, plus the request bodies that create or replace them.
//!
//! Field names on the wire follow the column names (`nama_kategori`, `judul`, ...).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A book category. Created once, never updated or deleted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i32,
    #[serde(rename = "nama_kategori")]
    #[sqlx(rename = "nama_kategori")]
    pub name: String,
}

/// A book. `category_id` is not checked against `kategori_buku`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i32,
    #[serde(rename = "judul")]
    #[sqlx(rename = "judul")]
    pub title: String,
    #[serde(rename = "penulis")]
    #[sqlx(rename = "penulis")]
    pub author: String,
    #[serde(rename = "kategori_id")]
    #[sqlx(rename = "kategori_id")]
    pub category_id: i32,
}

/// Body of `POST /kategori`. Any `id` in the body is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCategory {
    #[serde(rename = "nama_kategori")]
    pub name: String,
}

impl NewCategory {
    pub fn into_category(self, id: i32) -> Category {
        Category { id, name: self.name }
    }
}

/// Body of `POST /buku` and `PUT /buku/{id}`: the full set of writable fields.
#[derive(Debug, Clone, Deserialize)]
pub struct BookInput {
    #[serde(rename = "judul")]
    pub title: String,
    #[serde(rename = "penulis")]
    pub author: String,
    #[serde(rename = "kategori_id")]
    pub category_id: i32,
}

impl BookInput {
    pub fn into_book(self, id: i32) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            category_id: self.category_id,
        }
    }
}
