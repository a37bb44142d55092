//! Profile Error Types

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Profile-specific result type alias
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Profile-specific error variants
#[derive(Debug, Error)]
pub enum ProfileError {
    /// A required request field is absent or empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Profile not found
    #[error("Profile not found")]
    NotFound,

    /// Database error
    #[error("Failed to save profile")]
    Database(#[source] sqlx::Error),
}

impl ProfileError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProfileError::MissingField(_) => StatusCode::BAD_REQUEST,
            ProfileError::NotFound => StatusCode::NOT_FOUND,
            ProfileError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProfileError::MissingField(_) => ErrorKind::BadRequest,
            ProfileError::NotFound => ErrorKind::NotFound,
            ProfileError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    fn log(&self) {
        match self {
            ProfileError::Database(e) => {
                tracing::error!(error = %e, "Profile database error");
            }
            _ => {
                tracing::debug!(error = %self, "Profile request rejected");
            }
        }
    }
}

impl From<ProfileError> for AppError {
    fn from(err: ProfileError) -> Self {
        AppError::new(err.kind(), err.to_string())
    }
}

impl IntoResponse for ProfileError {
    fn into_response(self) -> Response {
        self.log();
        let body = serde_json::json!({
            "success": false,
            "error": self.to_string(),
        });
        (self.status_code(), Json(body)).into_response()
    }
}

impl From<sqlx::Error> for ProfileError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ProfileError::NotFound,
            other => ProfileError::Database(other),
        }
    }
}
