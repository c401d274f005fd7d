//! Row id from the `/{id}` path segment.

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::AppError;
use crate::models::DbId;

/// Parsed `{id}` path segment. A segment that is not an integer is rejected through
/// [`AppError`], so the client still gets a `{msg}` body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathId(pub DbId);

pub fn parse_id(raw: &str) -> Result<DbId, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id: {}", raw)))
}

#[async_trait]
impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        parse_id(&raw).map(PathId)
    }
}
