//! Message Error Types

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::convo::MAX_BODY_CHARS;

/// Message-specific result type alias
pub type MessageResult<T> = Result<T, MessageError>;

/// Message-specific error variants
#[derive(Debug, Error)]
pub enum MessageError {
    /// A required request field is absent or empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Empty message body
    #[error("Message cannot be empty")]
    EmptyBody,

    /// Body over the character ceiling
    #[error("Message too long (max {MAX_BODY_CHARS} characters)")]
    BodyTooLong,

    /// Sender exhausted the send window
    #[error("Rate limit exceeded. Try again later.")]
    RateLimited { reset_at_ms: i64 },
}

impl MessageError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            MessageError::MissingField(_)
            | MessageError::EmptyBody
            | MessageError::BodyTooLong => StatusCode::BAD_REQUEST,
            MessageError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            MessageError::MissingField(_)
            | MessageError::EmptyBody
            | MessageError::BodyTooLong => ErrorKind::BadRequest,
            MessageError::RateLimited { .. } => ErrorKind::TooManyRequests,
        }
    }

    fn log(&self) {
        match self {
            MessageError::RateLimited { reset_at_ms } => {
                tracing::warn!(reset_at_ms, "Message send rate limited");
            }
            _ => {
                tracing::debug!(error = %self, "Message request rejected");
            }
        }
    }

    fn body(&self) -> serde_json::Value {
        match self {
            MessageError::RateLimited { reset_at_ms } => serde_json::json!({
                "success": false,
                "error": self.to_string(),
                "resetAt": reset_at_ms,
            }),
            other => serde_json::json!({
                "success": false,
                "error": other.to_string(),
            }),
        }
    }
}

impl From<MessageError> for AppError {
    fn from(err: MessageError) -> Self {
        AppError::new(err.kind(), err.to_string())
    }
}

impl IntoResponse for MessageError {
    fn into_response(self) -> Response {
        self.log();
        (self.status_code(), Json(self.body())).into_response()
    }
}
