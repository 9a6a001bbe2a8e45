//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use oncotree_domain::error::OncoTreeError;

use crate::envelope::Envelope;

/// Maps [`OncoTreeError`] and extractor rejections to an HTTP response with
/// appropriate status code, always wrapped in an [`Envelope`].
#[derive(Debug)]
pub enum ApiError {
    Domain(OncoTreeError),
    /// The request could not be decoded before reaching a handler.
    Rejected(String),
}

impl From<OncoTreeError> for ApiError {
    fn from(err: OncoTreeError) -> Self {
        Self::Domain(err)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Rejected(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            Self::Rejected(message) => (StatusCode::BAD_REQUEST, "BadRequest", message),
            Self::Domain(OncoTreeError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, "BadRequest", err.to_string())
            }
            Self::Domain(OncoTreeError::NotFound(err)) => {
                (StatusCode::NOT_FOUND, "NotFound", err.to_string())
            }
            Self::Domain(OncoTreeError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalServerError",
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(Envelope::error(status, error_type, message))).into_response()
    }
}
