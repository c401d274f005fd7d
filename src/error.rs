//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("config load: {0}")]
    Load(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    /// Request rejected with an explicit status, e.g. a missing required field.
    #[error("{message}")]
    Api { message: String, status: StatusCode },
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl AppError {
    pub fn api(message: impl Into<String>, status: StatusCode) -> Self {
        AppError::Api {
            message: message.into(),
            status,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Api { status, .. } => *status,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Db(_) | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            AppError::Api { message, .. } | AppError::BadRequest(message) => {
                tracing::warn!(status = status.as_u16(), msg = %message, "request rejected");
                ErrorBody {
                    msg: message.clone(),
                    status_code: Some(status.as_u16()),
                }
            }
            AppError::NotFound(message) => ErrorBody {
                msg: message.clone(),
                status_code: None,
            },
            AppError::Db(e) => {
                tracing::error!(error = %e, "database error");
                ErrorBody {
                    msg: "Internal server error".into(),
                    status_code: None,
                }
            }
            AppError::Config(e) => {
                tracing::error!(error = %e, "configuration error");
                ErrorBody {
                    msg: "Internal server error".into(),
                    status_code: None,
                }
            }
        };
        (status, Json(body)).into_response()
    }
}
