//! Award Error Types
//!
//! Award-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Unlike most of the backend, several
//! variants here carry machine-readable payload fields (allowed types, size
//! ceiling) that the API contract exposes to callers.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::upload::{ALLOWED_TYPES, UploadError};
use thiserror::Error;

/// Award-specific result type alias
pub type AwardResult<T> = Result<T, AwardError>;

/// Award-specific error variants
#[derive(Debug, Error)]
pub enum AwardError {
    /// A required request field is absent or empty
    #[error("{0} missing")]
    MissingField(&'static str),

    /// Request body could not be parsed
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Upload failed validation (type or size)
    #[error(transparent)]
    UploadRejected(#[from] UploadError),

    /// Object storage upload failed
    #[error("File upload failed: {0}")]
    StorageUpload(String),

    /// Caller's wallet is not the configured founder
    #[error("Founder access required")]
    FounderRequired { expected: String, got: String },

    /// Award not found
    #[error("Award not found")]
    NotFound,

    /// Unique constraint hit on the idempotency key; callers recover by
    /// re-querying, so this only surfaces if the re-query comes up empty
    #[error("Duplicate payment hash")]
    DuplicateKey,

    /// Required configuration missing; detail goes to logs only
    #[error("Server configuration error")]
    Config(String),

    /// Database error
    #[error("Failed to save award")]
    Database(#[source] sqlx::Error),
}

impl AwardError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AwardError::MissingField(_)
            | AwardError::InvalidBody(_)
            | AwardError::UploadRejected(_)
            | AwardError::StorageUpload(_) => StatusCode::BAD_REQUEST,
            AwardError::FounderRequired { .. } => StatusCode::FORBIDDEN,
            AwardError::NotFound => StatusCode::NOT_FOUND,
            AwardError::DuplicateKey => StatusCode::CONFLICT,
            AwardError::Config(_) | AwardError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AwardError::MissingField(_)
            | AwardError::InvalidBody(_)
            | AwardError::UploadRejected(_)
            | AwardError::StorageUpload(_) => ErrorKind::BadRequest,
            AwardError::FounderRequired { .. } => ErrorKind::Forbidden,
            AwardError::NotFound => ErrorKind::NotFound,
            AwardError::DuplicateKey => ErrorKind::Conflict,
            AwardError::Config(_) | AwardError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    /// True when the sqlx error is a Postgres unique violation (23505).
    pub fn is_unique_violation(err: &sqlx::Error) -> bool {
        matches!(
            err,
            sqlx::Error::Database(db) if db.code().as_deref() == Some("23505")
        )
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AwardError::Database(e) => {
                tracing::error!(error = %e, "Award database error");
            }
            AwardError::Config(detail) => {
                tracing::error!(detail = %detail, "Award configuration error");
            }
            AwardError::StorageUpload(msg) => {
                tracing::error!(message = %msg, "Award storage upload failed");
            }
            AwardError::FounderRequired { expected, got } => {
                tracing::warn!(
                    expected = %platform::address::mask(expected),
                    got = %platform::address::mask(got),
                    "Founder check failed"
                );
            }
            _ => {
                tracing::debug!(error = %self, "Award request rejected");
            }
        }
    }

    /// JSON body for the response, including the machine-readable fields
    /// the upload contract promises.
    fn body(&self) -> serde_json::Value {
        match self {
            AwardError::UploadRejected(UploadError::TypeNotAllowed { received }) => {
                serde_json::json!({
                    "error": format!("File type {} not allowed", received),
                    "allowed": ALLOWED_TYPES,
                    "received": received,
                })
            }
            AwardError::UploadRejected(UploadError::TooLarge {
                max_bytes,
                received,
            }) => serde_json::json!({
                "error": "File too large",
                "maxSize": max_bytes,
                "received": received,
            }),
            AwardError::FounderRequired { expected, got } => serde_json::json!({
                "error": "Founder access required",
                "details": { "expected": expected, "got": got },
            }),
            // Config and database details never reach the client
            AwardError::Config(_) => serde_json::json!({
                "error": "Server configuration error",
            }),
            AwardError::Database(_) => serde_json::json!({
                "error": "Failed to save award",
            }),
            other => serde_json::json!({ "error": other.to_string() }),
        }
    }
}

impl From<AwardError> for AppError {
    fn from(err: AwardError) -> Self {
        AppError::new(err.kind(), err.to_string())
    }
}

impl IntoResponse for AwardError {
    fn into_response(self) -> Response {
        self.log();
        (self.status_code(), Json(self.body())).into_response()
    }
}

impl From<sqlx::Error> for AwardError {
    fn from(err: sqlx::Error) -> Self {
        if AwardError::is_unique_violation(&err) {
            AwardError::DuplicateKey
        } else {
            AwardError::Database(err)
        }
    }
}
