use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cohort_store::StoreError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced to API clients.
///
/// Every variant serializes to the `{"success": false, "message": …}`
/// envelope the front-end expects. Internal failures are logged in full
/// here and reported to the caller with a generic message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("email already registered: {0}")]
    DuplicateEmail(String),

    #[error("enrollment not found: {0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail(email) => ApiError::DuplicateEmail(email),
            StoreError::NotFound(email) => ApiError::NotFound(email),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::DuplicateEmail(_) => (
                StatusCode::CONFLICT,
                "Email already registered. Please use a different email.".to_string(),
            ),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "Enrollment not found".to_string()),
            ApiError::Internal(detail) => {
                error!("Request failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({ "success": false, "message": message }));
        (status, body).into_response()
    }
}
