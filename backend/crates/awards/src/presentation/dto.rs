//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::Award;

/// Request body for POST /api/awards/issue (JSON variant; the multipart
/// variant carries the same field names as form parts).
///
/// Snake-case aliases are accepted for the recipient fields because the
/// historical form clients submitted them that way.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueAwardRequest {
    #[serde(default)]
    pub wallet_address: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub recipient: Option<String>,
    #[serde(default, alias = "recipient_name")]
    pub recipient_name: Option<String>,
    #[serde(default, alias = "recipient_email")]
    pub recipient_email: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub transaction_hash: Option<String>,
}

/// Response for POST /api/awards/issue
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueAwardResponse {
    pub ok: bool,
    pub success: bool,
    pub award: Award,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub already_exists: Option<bool>,
    pub meta: IssueAwardMeta,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueAwardMeta {
    pub filename: Option<String>,
    pub image_url: Option<String>,
}

/// Response for GET /api/awards
#[derive(Debug, Clone, Serialize)]
pub struct ListAwardsResponse {
    pub ok: bool,
    pub success: bool,
    pub awards: Vec<Award>,
    pub count: usize,
    pub timestamp: DateTime<Utc>,
}

/// Query parameters for DELETE /api/awards
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteAwardParams {
    pub id: Option<Uuid>,
}

/// Response for DELETE /api/awards
#[derive(Debug, Clone, Serialize)]
pub struct DeleteAwardResponse {
    pub ok: bool,
    pub success: bool,
    pub deleted: DeletedAward,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeletedAward {
    pub id: Uuid,
    pub title: String,
}

/// Response for GET /api/awards/founder
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FounderResponse {
    pub founder: String,
    pub env_keys: FounderEnvKeys,
}

#[derive(Debug, Clone, Serialize)]
pub struct FounderEnvKeys {
    #[serde(rename = "FOUNDER_ADDRESS")]
    pub founder_address: &'static str,
}
