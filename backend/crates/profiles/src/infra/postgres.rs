//! PostgreSQL Repository Implementation

use sqlx::PgPool;

use crate::domain::entity::{Profile, ProfileUpsert};
use crate::domain::repository::ProfileRepository;
use crate::error::ProfileResult;

/// PostgreSQL-backed profile repository
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const PROFILE_COLUMNS: &str = r#"
    wallet_address,
    display_name,
    avatar_url,
    created_at
"#;

impl ProfileRepository for PgProfileRepository {
    async fn upsert(&self, profile: &ProfileUpsert) -> ProfileResult<Profile> {
        let row = sqlx::query_as::<_, Profile>(&format!(
            r#"
            INSERT INTO profiles (wallet_address, display_name, avatar_url)
            VALUES ($1, $2, $3)
            ON CONFLICT (wallet_address) DO UPDATE SET
                display_name = EXCLUDED.display_name,
                avatar_url = EXCLUDED.avatar_url
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(&profile.wallet_address)
        .bind(&profile.display_name)
        .bind(&profile.avatar_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find_by_wallet(&self, wallet: &str) -> ProfileResult<Option<Profile>> {
        let row = sqlx::query_as::<_, Profile>(&format!(
            r#"SELECT {PROFILE_COLUMNS} FROM profiles WHERE wallet_address = $1"#
        ))
        .bind(wallet)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}
