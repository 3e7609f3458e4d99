//! Book handlers: list, create, update, delete, search.
//!
//! Update and delete answer 200 with an empty body whether or not a row matched.

use crate::error::AppError;
use crate::extractors::{SearchTerm, ValidId, ValidJson};
use crate::model::{Book, BookInput};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, AppError> {
    let rows = state.store.list_books().await?;
    Ok(Json(rows))
}

pub async fn create_book(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<BookInput>,
) -> Result<(StatusCode, Json<Book>), AppError> {
    let book = state.store.create_book(body).await?;
    tracing::info!(id = book.id, "book created");
    Ok((StatusCode::CREATED, Json(book)))
}

pub async fn update_book(
    State(state): State<AppState>,
    ValidId(id): ValidId,
    ValidJson(body): ValidJson<BookInput>,
) -> Result<StatusCode, AppError> {
    let affected = state.store.update_book(id, body).await?;
    if affected == 0 {
        tracing::debug!(id, "update matched no book");
    }
    Ok(StatusCode::OK)
}

pub async fn delete_book(State(state): State<AppState>, ValidId(id): ValidId) -> Result<StatusCode, AppError> {
    let affected = state.store.delete_book(id).await?;
    if affected == 0 {
        tracing::debug!(id, "delete matched no book");
    }
    Ok(StatusCode::OK)
}

pub async fn search_books(
    State(state): State<AppState>,
    SearchTerm(term): SearchTerm,
) -> Result<Json<Vec<Book>>, AppError> {
    let rows = state.store.search_books(&term).await?;
    Ok(Json(rows))
}
