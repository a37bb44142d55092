//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use crate::application::{CreateProofInput, CreateProofUseCase};
use crate::domain::repository::ProofRepository;
use crate::error::ProofResult;
use crate::presentation::dto::CreateProofResponse;
use crate::presentation::extract::ProofBody;

/// Shared state for proof handlers
#[derive(Clone)]
pub struct ProofsAppState<R>
where
    R: ProofRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// POST /api/createproof (and /api/createproof1, kept for older clients)
pub async fn create_proof<R>(
    State(state): State<ProofsAppState<R>>,
    ProofBody(request): ProofBody,
) -> ProofResult<Json<CreateProofResponse>>
where
    R: ProofRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateProofUseCase::new(state.repo.clone());

    let input = CreateProofInput {
        transaction_hash: request.transaction_hash.unwrap_or_default(),
        user_address: request.user_address.unwrap_or_default(),
        title: request.title,
        category: request.category,
        description: request.description,
        file_hash: request.file_hash,
        file_name: request.file_name,
        file_size: request.file_size,
        file_type: request.file_type,
        is_public: request.is_public,
        ipfs_hash: request.ipfs_hash,
    };

    let output = use_case.execute(input).await?;

    let response = if output.already_exists {
        CreateProofResponse {
            success: true,
            message: "Proof already exists",
            proof_id: output.proof.id.clone(),
            transaction_hash: output.proof.payment_hash.clone(),
            proof: None,
            already_exists: Some(true),
        }
    } else {
        CreateProofResponse {
            success: true,
            message: "Proof created successfully",
            proof_id: output.proof.id.clone(),
            transaction_hash: output.proof.payment_hash.clone(),
            proof: Some(output.proof),
            already_exists: None,
        }
    };

    Ok(Json(response))
}
