//! Proof entity

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A registered invention proof tied to a confirmed payment transaction.
///
/// `id` is a synthetic text key (`proof_<hash slice>_<ms>`); the real
/// uniqueness guarantee is the unique constraint on `payment_hash`.
/// `transaction_id` duplicates `payment_hash` because historical clients
/// read either column.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Proof {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub file_hash: Option<String>,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
    pub file_type: Option<String>,
    pub is_public: bool,
    pub payment_hash: String,
    pub transaction_id: String,
    pub ipfs_hash: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

/// Data for a not-yet-inserted proof. The database defaults `created_at`.
#[derive(Debug, Clone)]
pub struct NewProof {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub file_hash: Option<String>,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
    pub file_type: Option<String>,
    pub is_public: bool,
    pub payment_hash: String,
    pub ipfs_hash: Option<String>,
    pub created_by: String,
}
