//! PostgreSQL Repository Implementation

use sqlx::PgPool;

use crate::domain::entity::{NewProof, Proof};
use crate::domain::repository::ProofRepository;
use crate::error::ProofResult;

/// PostgreSQL-backed proof repository
#[derive(Clone)]
pub struct PgProofRepository {
    pool: PgPool,
}

impl PgProofRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const PROOF_COLUMNS: &str = r#"
    id,
    title,
    category,
    description,
    file_hash,
    file_name,
    file_size,
    file_type,
    is_public,
    payment_hash,
    transaction_id,
    ipfs_hash,
    created_by,
    created_at
"#;

impl ProofRepository for PgProofRepository {
    async fn insert(&self, proof: &NewProof) -> ProofResult<Proof> {
        // transaction_id mirrors payment_hash; historical clients read either
        let row = sqlx::query_as::<_, Proof>(&format!(
            r#"
            INSERT INTO proofs (
                id,
                title,
                category,
                description,
                file_hash,
                file_name,
                file_size,
                file_type,
                is_public,
                payment_hash,
                transaction_id,
                ipfs_hash,
                created_by
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10, $11, $12)
            RETURNING {PROOF_COLUMNS}
            "#
        ))
        .bind(&proof.id)
        .bind(&proof.title)
        .bind(&proof.category)
        .bind(&proof.description)
        .bind(&proof.file_hash)
        .bind(&proof.file_name)
        .bind(proof.file_size)
        .bind(&proof.file_type)
        .bind(proof.is_public)
        .bind(&proof.payment_hash)
        .bind(&proof.ipfs_hash)
        .bind(&proof.created_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find_by_payment_hash(&self, payment_hash: &str) -> ProofResult<Option<Proof>> {
        let row = sqlx::query_as::<_, Proof>(&format!(
            r#"SELECT {PROOF_COLUMNS} FROM proofs WHERE payment_hash = $1"#
        ))
        .bind(payment_hash)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}
