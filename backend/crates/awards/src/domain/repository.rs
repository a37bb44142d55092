//! Repository Traits
//!
//! Interfaces for data persistence and object storage. Implementations are
//! in the infrastructure layer; exactly one production implementation
//! exists per trait.

use crate::domain::entity::{Award, NewAward};
use crate::error::AwardResult;
use uuid::Uuid;

/// Award repository trait
#[trait_variant::make(AwardRepository: Send)]
pub trait LocalAwardRepository {
    /// Insert a new award and return the stored row.
    ///
    /// A unique violation on the payment hash maps to
    /// `AwardError::DuplicateKey` so callers can recover.
    async fn insert(&self, award: &NewAward) -> AwardResult<Award>;

    /// All awards, newest first.
    async fn list(&self) -> AwardResult<Vec<Award>>;

    /// Look up by the idempotency key.
    async fn find_by_payment_hash(&self, payment_hash: &str) -> AwardResult<Option<Award>>;

    /// Look up by primary key.
    async fn find_by_id(&self, id: Uuid) -> AwardResult<Option<Award>>;

    /// Delete by primary key. Returns true when a row was removed.
    async fn delete(&self, id: Uuid) -> AwardResult<bool>;
}

/// Object storage trait for uploaded award images
#[trait_variant::make(ObjectStorage: Send)]
pub trait LocalObjectStorage {
    /// Store an object and return its public URL.
    async fn put(&self, name: &str, bytes: Vec<u8>, content_type: &str) -> AwardResult<String>;

    /// Remove an object. Best effort; callers may ignore failures.
    async fn remove(&self, name: &str) -> AwardResult<()>;
}
