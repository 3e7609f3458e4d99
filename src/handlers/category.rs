//! Category handlers: list, create.

use crate::error::AppError;
use crate::extractors::ValidJson;
use crate::model::{Category, NewCategory};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

pub async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>, AppError> {
    let rows = state.store.list_categories().await?;
    Ok(Json(rows))
}

pub async fn create_category(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<NewCategory>,
) -> Result<(StatusCode, Json<Category>), AppError> {
    let category = state.store.create_category(body).await?;
    tracing::info!(id = category.id, "category created");
    Ok((StatusCode::CREATED, Json(category)))
}
