//! Category and book routes.
//! `/buku/search` is a static segment and wins over `/buku/:id`.

use crate::handlers::{
    create_book, create_category, delete_book, list_books, list_categories, search_books, update_book,
};
use crate::state::AppState;
use axum::{
    routing::{get, put},
    Router,
};

pub fn library_routes(state: AppState) -> Router {
    Router::new()
        .route("/kategori", get(list_categories).post(create_category))
        .route("/buku", get(list_books).post(create_book))
        .route("/buku/search", get(search_books))
        .route("/buku/:id", put(update_book).delete(delete_book))
        .with_state(state)
}
