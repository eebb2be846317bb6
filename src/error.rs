use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::validation::FieldErrors;

/// Unified application error type that maps to JSON HTTP responses.
///
/// Everything except validation renders as `{ "message": "..." }`. Validation failures render
/// the per-field map produced by [`crate::validation::Fields`].
pub enum AppError {
    /// 400 Bad Request
    BadRequest(String),
    /// 400 Bad Request with per-field detail
    Validation(FieldErrors),
    /// 401 Unauthorized
    Unauthorized(String),
    /// 404 Not Found
    NotFound(String),
    /// 409 Conflict
    Conflict(String),
    /// 415 Unsupported Media Type
    UnsupportedMediaType(String),
    /// 500 Internal Server Error (wraps any error, logs details, returns generic message)
    Internal(anyhow::Error),
}

impl AppError {
    /// Not-found error in the `"<Entity> matching query does not exist."` wording.
    #[must_use]
    pub fn no_match(entity: &str) -> Self {
        Self::NotFound(format!("{entity} matching query does not exist."))
    }

    /// A lookup the caller relies on having succeeded came back empty.
    ///
    /// Rendered as a 500, not a 404: update on an unknown id and create by a user without a
    /// gamer profile are both surfaced as server errors.
    #[must_use]
    pub fn unhandled_miss(entity: &str) -> Self {
        Self::Internal(anyhow::anyhow!("{entity} matching query does not exist."))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Validation(errors) => {
                return (StatusCode::BAD_REQUEST, Json(errors)).into_response();
            }
            Self::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Conflict(msg) => (StatusCode::CONFLICT, msg),
            Self::UnsupportedMediaType(msg) => (StatusCode::UNSUPPORTED_MEDIA_TYPE, msg),
            Self::Internal(err) => {
                tracing::error!("Internal server error: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

/// Allow `?` to automatically convert any `anyhow::Error` into `AppError::Internal`.
impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Internal(err.into())
    }
}
