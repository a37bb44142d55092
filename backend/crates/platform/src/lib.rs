//! Platform - cross-cutting infrastructure
//!
//! Shared building blocks with no domain knowledge:
//! - `client` - client IP extraction from proxy-aware headers
//! - `address` - wallet-address normalization and display helpers
//! - `upload` - file upload validation (content type + size ceiling)
//! - `rate_limit` - rate limiting behind a storage trait

pub mod address;
pub mod client;
pub mod rate_limit;
pub mod upload;
