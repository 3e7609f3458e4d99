//! Integer row id from the last path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

#[derive(Debug, Clone, Copy)]
pub struct ValidId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        let id = raw
            .parse()
            .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", raw)))?;
        Ok(ValidId(id))
    }
}
