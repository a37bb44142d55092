//! Profile entity

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A wallet-keyed display profile. Field names match the database columns
/// and are serialized as-is.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Profile {
    pub wallet_address: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Upsert payload after defaults are applied.
#[derive(Debug, Clone)]
pub struct ProfileUpsert {
    pub wallet_address: String,
    pub display_name: String,
    pub avatar_url: String,
}

impl ProfileUpsert {
    /// Apply the defaulting rules: display name falls back to the wallet
    /// address, avatar to a deterministic identicon seeded by it.
    pub fn with_defaults(
        wallet_address: String,
        display_name: Option<String>,
        avatar_url: Option<String>,
    ) -> Self {
        let display_name = display_name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| wallet_address.clone());
        let avatar_url = avatar_url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| identicon_url(&wallet_address));

        Self {
            wallet_address,
            display_name,
            avatar_url,
        }
    }
}

/// Deterministic identicon avatar for a wallet.
pub fn identicon_url(wallet: &str) -> String {
    format!("https://api.dicebear.com/6.x/identicon/svg?seed={wallet}")
}
