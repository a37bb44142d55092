//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use chrono::Utc;

use crate::application::config::AwardsConfig;
use crate::application::{DeleteAwardUseCase, IssueAwardInput, IssueAwardUseCase, ListAwardsUseCase};
use crate::domain::repository::{AwardRepository, ObjectStorage};
use crate::error::{AwardError, AwardResult};
use crate::presentation::dto::{
    DeleteAwardParams, DeleteAwardResponse, DeletedAward, FounderEnvKeys, FounderResponse,
    IssueAwardMeta, IssueAwardResponse, ListAwardsResponse,
};
use crate::presentation::extract::IssueAwardPayload;

/// Shared state for award handlers
#[derive(Clone)]
pub struct AwardsAppState<R, S>
where
    R: AwardRepository + Clone + Send + Sync + 'static,
    S: ObjectStorage + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub storage: Arc<S>,
    pub config: Arc<AwardsConfig>,
}

/// GET /api/awards
pub async fn list_awards<R, S>(
    State(state): State<AwardsAppState<R, S>>,
) -> AwardResult<Json<ListAwardsResponse>>
where
    R: AwardRepository + Clone + Send + Sync + 'static,
    S: ObjectStorage + Clone + Send + Sync + 'static,
{
    let use_case = ListAwardsUseCase::new(state.repo.clone());
    let awards = use_case.execute().await?;
    let count = awards.len();

    Ok(Json(ListAwardsResponse {
        ok: true,
        success: true,
        awards,
        count,
        timestamp: Utc::now(),
    }))
}

/// POST /api/awards/issue
pub async fn issue_award<R, S>(
    State(state): State<AwardsAppState<R, S>>,
    payload: IssueAwardPayload,
) -> AwardResult<Json<IssueAwardResponse>>
where
    R: AwardRepository + Clone + Send + Sync + 'static,
    S: ObjectStorage + Clone + Send + Sync + 'static,
{
    let use_case = IssueAwardUseCase::new(
        state.repo.clone(),
        state.storage.clone(),
        state.config.clone(),
    );

    let fields = payload.fields;
    let input = IssueAwardInput {
        wallet_address: fields.wallet_address.unwrap_or_default(),
        title: fields.title.unwrap_or_default(),
        signature: fields.signature,
        recipient: fields.recipient,
        recipient_name: fields.recipient_name,
        recipient_email: fields.recipient_email,
        category: fields.category,
        year: fields.year,
        summary: fields.summary,
        transaction_hash: fields.transaction_hash,
        file: payload.file,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(IssueAwardResponse {
        ok: true,
        success: true,
        already_exists: output.already_exists.then_some(true),
        meta: IssueAwardMeta {
            filename: output.filename,
            image_url: output.image_url.or_else(|| output.award.image_url.clone()),
        },
        award: output.award,
    }))
}

/// DELETE /api/awards?id=...
pub async fn delete_award<R, S>(
    State(state): State<AwardsAppState<R, S>>,
    Query(params): Query<DeleteAwardParams>,
    headers: HeaderMap,
) -> AwardResult<Json<DeleteAwardResponse>>
where
    R: AwardRepository + Clone + Send + Sync + 'static,
    S: ObjectStorage + Clone + Send + Sync + 'static,
{
    let id = params.id.ok_or(AwardError::MissingField("id"))?;
    let wallet = headers
        .get("x-wallet-address")
        .and_then(|v| v.to_str().ok())
        .ok_or(AwardError::MissingField("wallet address"))?;

    let use_case = DeleteAwardUseCase::new(
        state.repo.clone(),
        state.storage.clone(),
        state.config.clone(),
    );

    let award = use_case.execute(id, wallet).await?;

    Ok(Json(DeleteAwardResponse {
        ok: true,
        success: true,
        deleted: DeletedAward {
            id: award.id,
            title: award.title,
        },
        timestamp: Utc::now(),
    }))
}

/// GET /api/awards/founder
pub async fn founder_info<R, S>(
    State(state): State<AwardsAppState<R, S>>,
) -> Json<FounderResponse>
where
    R: AwardRepository + Clone + Send + Sync + 'static,
    S: ObjectStorage + Clone + Send + Sync + 'static,
{
    let configured = state.config.founder_configured();
    Json(FounderResponse {
        founder: state.config.founder_address.clone(),
        env_keys: FounderEnvKeys {
            founder_address: if configured { "SET" } else { "MISSING" },
        },
    })
}
