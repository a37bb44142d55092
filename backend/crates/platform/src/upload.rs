//! File upload validation
//!
//! Validates a declared content type against a fixed allow-list and the
//! payload size against a configured byte ceiling. When the client did not
//! declare a type, it is inferred from the file extension; anything still
//! unknown falls back to `application/octet-stream` and is rejected by the
//! allow-list.

use thiserror::Error;

/// Content types accepted for award images and attachments.
pub const ALLOWED_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "application/pdf",
];

/// Default ceiling: 10 MB.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Upload validation policy.
#[derive(Debug, Clone, Copy)]
pub struct UploadPolicy {
    /// Maximum payload size in bytes
    pub max_bytes: u64,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

/// Upload rejection, carrying the machine-readable reason fields the API
/// surfaces to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("File type {received} not allowed")]
    TypeNotAllowed { received: String },

    #[error("File too large. Maximum size: {max_bytes} bytes, received: {received} bytes")]
    TooLarge { max_bytes: u64, received: u64 },
}

/// Resolve the effective content type of an upload.
///
/// Declared type wins; otherwise the file extension is mapped; otherwise
/// `application/octet-stream`.
pub fn detect_content_type(declared: Option<&str>, filename: Option<&str>) -> String {
    if let Some(ct) = declared {
        let ct = ct.trim();
        if !ct.is_empty() {
            return ct.to_lowercase();
        }
    }

    if let Some(name) = filename {
        let ext = name.rsplit('.').next().unwrap_or("").to_lowercase();
        let mapped = match ext.as_str() {
            "jpg" | "jpeg" => Some("image/jpeg"),
            "png" => Some("image/png"),
            "gif" => Some("image/gif"),
            "webp" => Some("image/webp"),
            "pdf" => Some("application/pdf"),
            _ => None,
        };
        if let Some(ct) = mapped {
            return ct.to_string();
        }
    }

    "application/octet-stream".to_string()
}

/// Validate an upload against the policy.
///
/// Returns the resolved content type on success.
pub fn validate(
    policy: &UploadPolicy,
    declared: Option<&str>,
    filename: Option<&str>,
    size: u64,
) -> Result<String, UploadError> {
    let content_type = detect_content_type(declared, filename);

    if !ALLOWED_TYPES.contains(&content_type.as_str()) {
        return Err(UploadError::TypeNotAllowed {
            received: content_type,
        });
    }

    if size > policy.max_bytes {
        return Err(UploadError::TooLarge {
            max_bytes: policy.max_bytes,
            received: size,
        });
    }

    Ok(content_type)
}
