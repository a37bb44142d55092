//! Proof Error Types

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Proof-specific result type alias
pub type ProofResult<T> = Result<T, ProofError>;

/// Proof-specific error variants
#[derive(Debug, Error)]
pub enum ProofError {
    /// A required request field is absent or empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Request body could not be parsed
    #[error("Invalid JSON in request body")]
    InvalidBody(String),

    /// Unique constraint hit on the idempotency key; callers recover by
    /// re-querying, so this only surfaces if the re-query comes up empty
    #[error("Duplicate payment hash")]
    DuplicateKey,

    /// Database error. The underlying message is forwarded to the response
    /// body; the API contract has always exposed it and clients match on it
    #[error("Failed to create proof: {0}")]
    Database(#[source] sqlx::Error),
}

impl ProofError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProofError::MissingField(_) | ProofError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ProofError::DuplicateKey => StatusCode::CONFLICT,
            ProofError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProofError::MissingField(_) | ProofError::InvalidBody(_) => ErrorKind::BadRequest,
            ProofError::DuplicateKey => ErrorKind::Conflict,
            ProofError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ProofError::Database(e) => {
                tracing::error!(error = %e, "Proof database error");
            }
            ProofError::InvalidBody(detail) => {
                tracing::debug!(detail = %detail, "Proof request body rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Proof request rejected");
            }
        }
    }
}

impl From<ProofError> for AppError {
    fn from(err: ProofError) -> Self {
        AppError::new(err.kind(), err.to_string())
    }
}

impl IntoResponse for ProofError {
    fn into_response(self) -> Response {
        self.log();
        let body = serde_json::json!({
            "success": false,
            "error": self.to_string(),
        });
        (self.status_code(), Json(body)).into_response()
    }
}

impl From<sqlx::Error> for ProofError {
    fn from(err: sqlx::Error) -> Self {
        let is_unique = matches!(
            &err,
            sqlx::Error::Database(db) if db.code().as_deref() == Some("23505")
        );
        if is_unique {
            ProofError::DuplicateKey
        } else {
            ProofError::Database(err)
        }
    }
}
