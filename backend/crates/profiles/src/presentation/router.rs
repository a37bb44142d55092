//! Profiles router

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use sqlx::PgPool;

use crate::domain::repository::ProfileRepository;
use crate::infra::postgres::PgProfileRepository;
use crate::presentation::handlers::{ProfilesAppState, get_profile, upsert_profile};

/// Builds the profiles router backed by Postgres.
///
/// Mounted under `/api/profiles`:
/// - `POST /`         - upsert a profile by wallet
/// - `GET  /{wallet}` - fetch a profile, 404 when absent
pub fn profiles_router(pool: PgPool) -> Router {
    let state = ProfilesAppState {
        repo: Arc::new(PgProfileRepository::new(pool)),
    };
    profiles_router_generic(state)
}

/// Generic router constructor, usable with in-memory fakes in tests.
pub fn profiles_router_generic<R>(state: ProfilesAppState<R>) -> Router
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", post(upsert_profile::<R>))
        .route("/{wallet}", get(get_profile::<R>))
        .with_state(state)
}
