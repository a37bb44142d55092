//! 404 Fallback Handler

use axum::Json;
use axum::http::{StatusCode, Uri};
use serde_json::{Value, json};

/// Endpoints listed in the 404 body so clients can self-diagnose typos.
pub const KNOWN_ENDPOINTS: [&str; 10] = [
    "GET /api/awards",
    "POST /api/awards/issue",
    "DELETE /api/awards",
    "GET /api/awards/founder",
    "POST /api/createproof",
    "GET /api/messages",
    "POST /api/messages",
    "GET /api/profiles/{wallet}",
    "GET /api/health/ping",
    "GET /api/health/config",
];

pub async fn not_found(uri: Uri) -> (StatusCode, Json<Value>) {
    let path = uri.path().to_string();
    tracing::debug!(path = %path, "Unmatched route");

    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Not Found",
            "message": "The requested endpoint does not exist",
            "path": path,
            "availableEndpoints": KNOWN_ENDPOINTS,
        })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_body_lists_endpoints() {
        let (status, Json(body)) = not_found("/api/nope".parse().unwrap()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not Found");
        assert_eq!(body["path"], "/api/nope");

        let endpoints = body["availableEndpoints"].as_array().unwrap();
        assert!(!endpoints.is_empty());
        assert!(endpoints.contains(&json!("GET /api/health/ping")));
    }
}
