use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// API-level error taxonomy. Every variant maps to one status code and a
/// `{"msg": ...}` body; storage and crypto failures are collapsed into a
/// generic 500 so nothing internal leaks to clients.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} required")]
    MissingField(&'static str),

    #[error("user exists")]
    DuplicateEmail,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("missing or invalid token")]
    Unauthorized,

    // Covers both "no such row" and "row owned by someone else" so the
    // response never reveals whether another user's resource exists.
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("internal server error")]
    Database(#[from] sqlx::Error),

    #[error("internal server error")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingField(_) | ApiError::DuplicateEmail => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials | ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Database(err) => tracing::error!(error = %err, "database error"),
            ApiError::Internal(detail) => tracing::error!(%detail, "internal error"),
            _ => {}
        }
        let status = self.status();
        (status, Json(json!({ "msg": self.to_string() }))).into_response()
    }
}
