//! CORS Layer
//!
//! Browser gate for the frontend origins. Only origins from the configured
//! allow-list are echoed back; everything else gets no CORS headers and the
//! browser refuses the response.

use axum::http::{self, HeaderName, Method, header};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

pub fn cors_layer(frontend_origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static("x-wallet-address"),
        ]))
        .allow_credentials(true)
        .max_age(std::time::Duration::from_secs(86400))
}
