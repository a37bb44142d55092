//! Delete Award Use Case
//!
//! Founder-only. The stored image is removed first, best effort: a storage
//! failure is logged and the database row is deleted anyway.

use std::sync::Arc;

use platform::address;
use uuid::Uuid;

use crate::application::config::AwardsConfig;
use crate::domain::entity::Award;
use crate::domain::repository::{AwardRepository, ObjectStorage};
use crate::error::{AwardError, AwardResult};

pub struct DeleteAwardUseCase<R, S> {
    repo: Arc<R>,
    storage: Arc<S>,
    config: Arc<AwardsConfig>,
}

impl<R, S> DeleteAwardUseCase<R, S>
where
    R: AwardRepository + Send + Sync,
    S: ObjectStorage + Send + Sync,
{
    pub fn new(repo: Arc<R>, storage: Arc<S>, config: Arc<AwardsConfig>) -> Self {
        Self {
            repo,
            storage,
            config,
        }
    }

    pub async fn execute(&self, id: Uuid, wallet_address: &str) -> AwardResult<Award> {
        let wallet = address::normalize(wallet_address);
        if wallet.is_empty() {
            return Err(AwardError::MissingField("wallet address"));
        }
        if !self.config.founder_configured() {
            return Err(AwardError::Config("FOUNDER_ADDRESS not set".to_string()));
        }
        if wallet != self.config.founder_address {
            return Err(AwardError::FounderRequired {
                expected: self.config.founder_address.clone(),
                got: wallet,
            });
        }

        let award = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(AwardError::NotFound)?;

        if let Some(url) = &award.image_url {
            if let Some(object_name) = url.rsplit('/').next() {
                if let Err(e) = self.storage.remove(object_name).await {
                    tracing::warn!(object = %object_name, error = %e, "Stored image removal failed, continuing");
                }
            }
        }

        self.repo.delete(award.id).await?;
        tracing::info!(award_id = %award.id, title = %award.title, "Award deleted");

        Ok(award)
    }
}
