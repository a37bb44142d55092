//! Create Proof Use Case
//!
//! Idempotent on the payment transaction hash: an existence check handles
//! the common resubmission path, and duplicate-key recovery handles the
//! concurrent one. The unique constraint on `payment_hash` is the
//! correctness backstop either way.

use std::sync::Arc;

use platform::address;

use crate::domain::entity::NewProof;
use crate::domain::repository::ProofRepository;
use crate::error::{ProofError, ProofResult};

/// Input for proof creation. All fields beyond the transaction hash and
/// user address are optional metadata from the submission form.
#[derive(Debug, Clone, Default)]
pub struct CreateProofInput {
    pub transaction_hash: String,
    pub user_address: String,
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub file_hash: Option<String>,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
    pub file_type: Option<String>,
    pub is_public: Option<bool>,
    pub ipfs_hash: Option<String>,
}

/// Result of proof creation.
#[derive(Debug, Clone)]
pub struct CreateProofOutput {
    pub proof: crate::domain::entity::Proof,
    pub already_exists: bool,
}

pub struct CreateProofUseCase<R> {
    repo: Arc<R>,
}

impl<R> CreateProofUseCase<R>
where
    R: ProofRepository + Send + Sync,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreateProofInput) -> ProofResult<CreateProofOutput> {
        let tx_hash = input.transaction_hash.trim();
        if tx_hash.is_empty() {
            return Err(ProofError::MissingField("transactionHash"));
        }
        let user = address::normalize(&input.user_address);
        if user.is_empty() {
            return Err(ProofError::MissingField("userAddress"));
        }

        // Idempotency fast path
        if let Some(existing) = self.repo.find_by_payment_hash(tx_hash).await? {
            tracing::info!(proof_id = %existing.id, "Proof already exists for payment hash");
            return Ok(CreateProofOutput {
                proof: existing,
                already_exists: true,
            });
        }

        let id = kernel::id::proof_id(tx_hash);
        let new_proof = NewProof {
            title: input
                .title
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| format!("Proof {id}")),
            category: input
                .category
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| "invention".to_string()),
            description: input.description.unwrap_or_default(),
            file_hash: input.file_hash,
            file_name: input.file_name,
            file_size: input.file_size,
            file_type: input.file_type,
            is_public: input.is_public.unwrap_or(true),
            payment_hash: tx_hash.to_string(),
            ipfs_hash: input.ipfs_hash,
            created_by: user,
            id,
        };

        match self.repo.insert(&new_proof).await {
            Ok(proof) => {
                tracing::info!(proof_id = %proof.id, tx = %proof.payment_hash, "Proof created");
                Ok(CreateProofOutput {
                    proof,
                    already_exists: false,
                })
            }
            // Lost the race: the row for this hash exists now, return it
            Err(ProofError::DuplicateKey) => {
                let existing = self
                    .repo
                    .find_by_payment_hash(tx_hash)
                    .await?
                    .ok_or(ProofError::DuplicateKey)?;
                tracing::info!(proof_id = %existing.id, "Recovered existing proof after duplicate insert");
                Ok(CreateProofOutput {
                    proof: existing,
                    already_exists: true,
                })
            }
            Err(other) => Err(other),
        }
    }
}
