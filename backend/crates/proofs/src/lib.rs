//! Proofs Backend Module
//!
//! Registers invention proofs after an on-chain payment transaction
//! confirms. The payment transaction hash is the idempotency key: repeated
//! submissions for the same transaction return the original record.
//!
//! Clean Architecture structure:
//! - `domain/` - entity and repository trait
//! - `application/` - use case
//! - `infra/` - Postgres repository
//! - `presentation/` - HTTP handlers, DTOs

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use error::{ProofError, ProofResult};
pub use infra::postgres::PgProofRepository;
pub use presentation::router::{proofs_router, proofs_router_generic};
