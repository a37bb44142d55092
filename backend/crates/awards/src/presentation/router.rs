//! Awards router

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use sqlx::PgPool;

use crate::application::config::AwardsConfig;
use crate::domain::repository::{AwardRepository, ObjectStorage};
use crate::infra::postgres::PgAwardRepository;
use crate::infra::storage::SupabaseStorage;
use crate::presentation::handlers::{
    AwardsAppState, delete_award, founder_info, issue_award, list_awards,
};

/// Builds the awards router backed by Postgres and Supabase storage.
///
/// Mounted under `/api/awards`:
/// - `GET    /`        - list awards
/// - `DELETE /`        - delete an award (founder only)
/// - `POST   /issue`   - issue an award (founder only)
/// - `GET    /founder` - founder address and configuration status
pub fn awards_router(pool: PgPool, storage: SupabaseStorage, config: AwardsConfig) -> Router {
    let state = AwardsAppState {
        repo: Arc::new(PgAwardRepository::new(pool)),
        storage: Arc::new(storage),
        config: Arc::new(config),
    };
    awards_router_generic(state)
}

/// Generic router constructor, usable with in-memory fakes in tests.
pub fn awards_router_generic<R, S>(state: AwardsAppState<R, S>) -> Router
where
    R: AwardRepository + Clone + Send + Sync + 'static,
    S: ObjectStorage + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_awards::<R, S>).delete(delete_award::<R, S>))
        .route("/issue", post(issue_award::<R, S>))
        .route("/founder", get(founder_info::<R, S>))
        .with_state(state)
}
