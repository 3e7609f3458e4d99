//! Search term from the `q` query parameter.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};

/// First `q` in the query string; absent means empty, which matches every book.
#[derive(Debug, Clone, Default)]
pub struct SearchTerm(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for SearchTerm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs): Query<Vec<(String, String)>> = Query::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        let term = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "q").then_some(value))
            .unwrap_or_default();
        Ok(SearchTerm(term))
    }
}
