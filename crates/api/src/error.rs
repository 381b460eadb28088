use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::response::MessageResponse;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce `{ "message": ... }` JSON error
/// bodies. Handlers map store faults to a variant at each call site: the
/// same underlying error class maps to different statuses depending on
/// which operation failed (a create save fault is a bad request, a list
/// retrieval fault is internal).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The requested record does not exist. An expected outcome, not logged.
    #[error("Cannot find {entity}")]
    NotFound { entity: &'static str },

    /// A persistence failure on a write the client supplied the data for.
    /// Carries the underlying message verbatim.
    #[error("{0}")]
    BadRequest(String),

    /// Any other store fault, including identifiers the store cannot
    /// interpret. Carries the underlying message verbatim.
    #[error("{0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = MessageResponse {
            message: self.to_string(),
        };

        (status, axum::Json(body)).into_response()
    }
}
