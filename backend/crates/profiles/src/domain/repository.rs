//! Repository Trait

use crate::domain::entity::{Profile, ProfileUpsert};
use crate::error::ProfileResult;

/// Profile repository trait
#[trait_variant::make(ProfileRepository: Send)]
pub trait LocalProfileRepository {
    /// Insert or replace the profile for a wallet, returning the stored row.
    async fn upsert(&self, profile: &ProfileUpsert) -> ProfileResult<Profile>;

    /// Look up by wallet address.
    async fn find_by_wallet(&self, wallet: &str) -> ProfileResult<Option<Profile>>;
}
