//! Lenient JSON body extractor: yields `None` when there is no usable object. The only
//! rejection is a body over the configured size limit.

use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde_json::{Map, Value};

use crate::error::AppError;

pub const BODY_TOO_LARGE: &str = "Request body is too large";

/// The request body as a JSON object, or `None` when it is empty, not valid JSON, or not an
/// object. Handlers turn `None` into a "missing body" error themselves.
#[derive(Clone, Debug, Default)]
pub struct JsonBody(pub Option<Map<String, Value>>);

impl JsonBody {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Object(map)) => JsonBody(Some(map)),
            _ => JsonBody(None),
        }
    }
}

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Bytes::from_request(req, state).await {
            Ok(bytes) => Ok(JsonBody::from_bytes(&bytes)),
            Err(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                Err(AppError::api(BODY_TOO_LARGE, StatusCode::PAYLOAD_TOO_LARGE))
            }
            Err(e) => {
                tracing::debug!(error = %e, "unreadable request body");
                Ok(JsonBody(None))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn objects_are_kept() {
        let JsonBody(body) = JsonBody::from_bytes(br#"{"planet_name":"Hoth"}"#);
        assert_eq!(body.unwrap()["planet_name"], "Hoth");
    }

    #[test]
    fn empty_garbage_and_non_objects_are_none() {
        assert!(JsonBody::from_bytes(b"").0.is_none());
        assert!(JsonBody::from_bytes(b"{not json").0.is_none());
        assert!(JsonBody::from_bytes(b"[1,2]").0.is_none());
        assert!(JsonBody::from_bytes(b"null").0.is_none());
    }
}
