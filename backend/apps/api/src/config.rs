//! API Configuration
//!
//! Environment loading is lenient: `from_env` never fails, so read-only
//! endpoints (health, founder info) keep working with secrets missing.
//! `validate()` is the strict gate and reports every missing key at once
//! rather than failing on the first.

use std::env;

use platform::address;
use platform::upload::{DEFAULT_MAX_UPLOAD_BYTES, UploadPolicy};
use thiserror::Error;

/// The browser origins allowed by default when `FRONTEND_ORIGINS` is unset.
pub const DEFAULT_FRONTEND_ORIGINS: [&str; 4] = [
    "https://www.mindvaultip.com",
    "https://mindvaultip.com",
    "http://localhost:5173",
    "http://localhost:3000",
];

/// Default storage bucket for award images.
pub const DEFAULT_BUCKET: &str = "awards";

#[derive(Debug, Error)]
#[error("Missing required environment variables: {}", keys.join(", "))]
pub struct MissingConfig {
    pub keys: Vec<&'static str>,
}

/// Process-wide configuration snapshot.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Normalized founder wallet; empty when unset
    pub founder_address: String,
    pub supabase_url: String,
    pub supabase_service_key: String,
    pub supabase_bucket: String,
    pub max_upload_bytes: u64,
    pub frontend_origins: Vec<String>,
}

fn env_or(primary: &str, fallback: &str) -> String {
    env::var(primary)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| env::var(fallback).ok().filter(|v| !v.trim().is_empty()))
        .unwrap_or_default()
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let max_upload_bytes = env::var("MAX_UPLOAD_MB")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(|mb| mb * 1024 * 1024)
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

        let frontend_origins = match env::var("FRONTEND_ORIGINS") {
            Ok(list) if !list.trim().is_empty() => list
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),
            _ => DEFAULT_FRONTEND_ORIGINS
                .iter()
                .map(|o| o.to_string())
                .collect(),
        };

        let bucket = env_or("SUPABASE_BUCKET", "VITE_SUPABASE_BUCKET");

        Self {
            founder_address: address::normalize(&env::var("FOUNDER_ADDRESS").unwrap_or_default()),
            supabase_url: env_or("SUPABASE_URL", "VITE_SUPABASE_URL"),
            supabase_service_key: env_or("SUPABASE_SERVICE_KEY", "VITE_SUPABASE_SERVICE_KEY"),
            supabase_bucket: if bucket.is_empty() {
                DEFAULT_BUCKET.to_string()
            } else {
                bucket
            },
            max_upload_bytes,
            frontend_origins,
        }
    }

    /// Strict check: every missing required key, aggregated.
    pub fn validate(&self) -> Result<(), MissingConfig> {
        let mut keys = Vec::new();
        if self.founder_address.is_empty() {
            keys.push("FOUNDER_ADDRESS");
        }
        if self.supabase_url.is_empty() {
            keys.push("SUPABASE_URL");
        }
        if self.supabase_service_key.is_empty() {
            keys.push("SUPABASE_SERVICE_KEY");
        }

        if keys.is_empty() {
            Ok(())
        } else {
            Err(MissingConfig { keys })
        }
    }

    /// All three required secrets present.
    pub fn healthy(&self) -> bool {
        self.validate().is_ok()
    }

    /// Founder address safe for logs and responses.
    pub fn masked_founder(&self) -> String {
        address::mask(&self.founder_address)
    }

    pub fn upload_policy(&self) -> UploadPolicy {
        UploadPolicy {
            max_bytes: self.max_upload_bytes,
        }
    }

    pub fn awards_config(&self) -> awards::AwardsConfig {
        awards::AwardsConfig::new(self.founder_address.clone(), self.upload_policy())
    }

    /// One startup log line per key: present or missing, never the value.
    pub fn log_status(&self) {
        tracing::info!(
            founder = %if self.founder_address.is_empty() { "MISSING".to_string() } else { self.masked_founder() },
            supabase_url = %presence(&self.supabase_url),
            supabase_service_key = %presence(&self.supabase_service_key),
            bucket = %self.supabase_bucket,
            max_upload_bytes = self.max_upload_bytes,
            origins = self.frontend_origins.len(),
            "Configuration loaded"
        );
    }
}

fn presence(value: &str) -> &'static str {
    if value.is_empty() { "MISSING" } else { "SET" }
}
