//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use platform::address;

use crate::domain::entity::ProfileUpsert;
use crate::domain::repository::ProfileRepository;
use crate::error::{ProfileError, ProfileResult};
use crate::presentation::dto::{ProfileResponse, UpsertProfileRequest};

/// Shared state for profile handlers
#[derive(Clone)]
pub struct ProfilesAppState<R>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// POST /api/profiles
pub async fn upsert_profile<R>(
    State(state): State<ProfilesAppState<R>>,
    Json(request): Json<UpsertProfileRequest>,
) -> ProfileResult<Json<ProfileResponse>>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    let wallet = address::normalize(&request.wallet_address.unwrap_or_default());
    if wallet.is_empty() {
        return Err(ProfileError::MissingField("walletAddress"));
    }

    let upsert = ProfileUpsert::with_defaults(wallet, request.display_name, request.avatar_url);
    let profile = state.repo.upsert(&upsert).await?;
    tracing::info!(wallet = %platform::address::mask(&profile.wallet_address), "Profile upserted");

    Ok(Json(ProfileResponse {
        success: true,
        profile,
    }))
}

/// GET /api/profiles/{wallet}
pub async fn get_profile<R>(
    State(state): State<ProfilesAppState<R>>,
    Path(wallet): Path<String>,
) -> ProfileResult<Json<ProfileResponse>>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    let wallet = address::normalize(&wallet);
    if wallet.is_empty() {
        return Err(ProfileError::MissingField("wallet"));
    }

    let profile = state
        .repo
        .find_by_wallet(&wallet)
        .await?
        .ok_or(ProfileError::NotFound)?;

    Ok(Json(ProfileResponse {
        success: true,
        profile,
    }))
}
