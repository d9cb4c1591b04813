//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
pub use crate::api::ApiError;
use crate::db::repository::RepositoryError;

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Malformed query parameter
    BadRequest(String),
    /// Missing or mismatched bearer token
    Unauthorized(String),
    /// Repository error
    Repository(RepositoryError),
}

fn repository_response(err: &RepositoryError) -> (StatusCode, ApiError) {
    let (status, code) = match err {
        RepositoryError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        RepositoryError::ValidationError { .. } => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        RepositoryError::Conflict { .. } => (StatusCode::CONFLICT, "CONFLICT"),
        RepositoryError::ConnectionError { .. } => {
            (StatusCode::SERVICE_UNAVAILABLE, "REPOSITORY_UNAVAILABLE")
        }
        RepositoryError::ConfigurationError { .. } | RepositoryError::InternalError { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, "REPOSITORY_ERROR")
        }
    };

    (
        status,
        ApiError::new(code, err.message()).with_details(err.context().to_string()),
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, ApiError::new("UNAUTHORIZED", msg))
            }
            AppError::Repository(e) => {
                if !matches!(e, RepositoryError::NotFound { .. }) {
                    tracing::warn!("repository error: {}", e);
                }
                repository_response(&e)
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}
