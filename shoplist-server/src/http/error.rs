//! API error types with IntoResponse
//!
//! Client errors (400, 404) carry no body. The reason is only logged.
//! Internal errors are logged at error level and answered with a generic JSON
//! body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::RepoError;
use crate::models::ValidationError;
use crate::service::ServiceError;

/// API error type with automatic HTTP status mapping
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Validation failed (400)
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Lookup miss (404)
    #[error("{resource} '{id}' not found")]
    NotFound { resource: &'static str, id: String },

    /// Store invariant broken (500, logged)
    #[error("repository error: {0}")]
    Repo(#[from] RepoError),
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(e) => Self::Validation(e),
            ServiceError::NotFound { resource, id } => Self::NotFound { resource, id },
            ServiceError::Repo(e) => Self::Repo(e),
        }
    }
}

impl ApiError {
    /// Status classification of this outcome.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Repo(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            Self::Validation(e) => {
                tracing::debug!(reason = %e, "rejecting request");
                status.into_response()
            }
            Self::NotFound { .. } => {
                tracing::debug!("{}", self);
                status.into_response()
            }
            Self::Repo(e) => {
                tracing::error!("Repository error: {}", e);
                (
                    status,
                    Json(json!({
                        "error": "internal_error",
                        "message": "an internal error occurred"
                    })),
                )
                    .into_response()
            }
        }
    }
}
