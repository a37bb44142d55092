//! Awards Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - entity, repository and storage traits
//! - `application/` - use cases
//! - `infra/` - Postgres repository, Supabase storage client
//! - `presentation/` - HTTP handlers, DTOs, payload extraction
//!
//! ## Request Model
//! - Issuance accepts JSON or multipart bodies; an optional file is
//!   validated (type allow-list, size ceiling) and pushed to object storage
//!   before the row is written
//! - Idempotency key is the payment transaction hash; a unique index plus
//!   duplicate-key recovery makes repeated submissions return the original
//!   record instead of erroring
//! - Issuance and deletion are founder-only; identity is the normalized
//!   wallet address, compared against configuration

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AwardsConfig;
pub use error::{AwardError, AwardResult};
pub use infra::postgres::PgAwardRepository;
pub use infra::storage::SupabaseStorage;
pub use presentation::router::{awards_router, awards_router_generic};
