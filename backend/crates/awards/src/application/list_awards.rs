//! List Awards Use Case

use std::sync::Arc;

use crate::domain::entity::Award;
use crate::domain::repository::AwardRepository;
use crate::error::AwardResult;

pub struct ListAwardsUseCase<R> {
    repo: Arc<R>,
}

impl<R> ListAwardsUseCase<R>
where
    R: AwardRepository + Send + Sync,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// All awards, newest first. Public access; no auth.
    pub async fn execute(&self) -> AwardResult<Vec<Award>> {
        let awards = self.repo.list().await?;
        tracing::info!(count = awards.len(), "Awards fetched");
        Ok(awards)
    }
}
