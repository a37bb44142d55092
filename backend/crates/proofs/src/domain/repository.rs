//! Repository Trait

use crate::domain::entity::{NewProof, Proof};
use crate::error::ProofResult;

/// Proof repository trait
#[trait_variant::make(ProofRepository: Send)]
pub trait LocalProofRepository {
    /// Insert a new proof and return the stored row.
    ///
    /// A unique violation on the payment hash maps to
    /// `ProofError::DuplicateKey` so callers can recover.
    async fn insert(&self, proof: &NewProof) -> ProofResult<Proof>;

    /// Look up by the idempotency key.
    async fn find_by_payment_hash(&self, payment_hash: &str) -> ProofResult<Option<Proof>>;
}
