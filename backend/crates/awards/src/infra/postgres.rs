//! PostgreSQL Repository Implementation

use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{Award, NewAward};
use crate::domain::repository::AwardRepository;
use crate::error::AwardResult;

/// PostgreSQL-backed award repository
#[derive(Clone)]
pub struct PgAwardRepository {
    pool: PgPool,
}

impl PgAwardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const AWARD_COLUMNS: &str = r#"
    id,
    issuer,
    recipient,
    recipient_name,
    recipient_email,
    title,
    category,
    year,
    summary,
    image_url,
    payment_hash,
    "timestamp"
"#;

impl AwardRepository for PgAwardRepository {
    async fn insert(&self, award: &NewAward) -> AwardResult<Award> {
        let row = sqlx::query_as::<_, Award>(&format!(
            r#"
            INSERT INTO awards (
                issuer,
                recipient,
                recipient_name,
                recipient_email,
                title,
                category,
                year,
                summary,
                image_url,
                payment_hash,
                "timestamp"
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, COALESCE($11, now()))
            RETURNING {AWARD_COLUMNS}
            "#
        ))
        .bind(&award.issuer)
        .bind(&award.recipient)
        .bind(&award.recipient_name)
        .bind(&award.recipient_email)
        .bind(&award.title)
        .bind(&award.category)
        .bind(&award.year)
        .bind(&award.summary)
        .bind(&award.image_url)
        .bind(&award.payment_hash)
        .bind(award.timestamp)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn list(&self) -> AwardResult<Vec<Award>> {
        let rows = sqlx::query_as::<_, Award>(&format!(
            r#"SELECT {AWARD_COLUMNS} FROM awards ORDER BY "timestamp" DESC"#
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_by_payment_hash(&self, payment_hash: &str) -> AwardResult<Option<Award>> {
        let row = sqlx::query_as::<_, Award>(&format!(
            r#"SELECT {AWARD_COLUMNS} FROM awards WHERE payment_hash = $1"#
        ))
        .bind(payment_hash)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find_by_id(&self, id: Uuid) -> AwardResult<Option<Award>> {
        let row = sqlx::query_as::<_, Award>(&format!(
            r#"SELECT {AWARD_COLUMNS} FROM awards WHERE id = $1"#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: Uuid) -> AwardResult<bool> {
        let deleted = sqlx::query("DELETE FROM awards WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}
