//! Proofs router

use std::sync::Arc;

use axum::Router;
use axum::routing::post;
use sqlx::PgPool;

use crate::domain::repository::ProofRepository;
use crate::infra::postgres::PgProofRepository;
use crate::presentation::handlers::{ProofsAppState, create_proof};

/// Builds the proofs router backed by Postgres.
///
/// Mounted under `/api`:
/// - `POST /createproof`  - create a proof record, idempotent on tx hash
/// - `POST /createproof1` - same handler; path kept for older clients
pub fn proofs_router(pool: PgPool) -> Router {
    let state = ProofsAppState {
        repo: Arc::new(PgProofRepository::new(pool)),
    };
    proofs_router_generic(state)
}

/// Generic router constructor, usable with in-memory fakes in tests.
pub fn proofs_router_generic<R>(state: ProofsAppState<R>) -> Router
where
    R: ProofRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/createproof", post(create_proof::<R>))
        .route("/createproof1", post(create_proof::<R>))
        .with_state(state)
}
