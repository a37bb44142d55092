//! Award entity

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A stored award record. Immutable after insertion; the only mutation path
/// is founder-initiated deletion.
///
/// Field names match the database columns; the record is serialized as-is
/// in responses.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Award {
    pub id: Uuid,
    pub issuer: String,
    pub recipient: Option<String>,
    pub recipient_name: Option<String>,
    pub recipient_email: Option<String>,
    pub title: String,
    pub category: Option<String>,
    pub year: Option<String>,
    pub summary: Option<String>,
    pub image_url: Option<String>,
    pub payment_hash: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Data for a not-yet-inserted award. The database assigns `id` and
/// defaults `timestamp` when the caller did not supply one.
#[derive(Debug, Clone)]
pub struct NewAward {
    pub issuer: String,
    pub recipient: Option<String>,
    pub recipient_name: Option<String>,
    pub recipient_email: Option<String>,
    pub title: String,
    pub category: Option<String>,
    pub year: Option<String>,
    pub summary: Option<String>,
    pub image_url: Option<String>,
    pub payment_hash: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_award_serializes_db_field_names() {
        let award = Award {
            id: Uuid::nil(),
            issuer: "0xfounder".into(),
            recipient: None,
            recipient_name: Some("Ada".into()),
            recipient_email: None,
            title: "Innovation".into(),
            category: None,
            year: Some("2025".into()),
            summary: None,
            image_url: Some("https://example.com/a.png".into()),
            payment_hash: Some("0x111".into()),
            timestamp: Utc::now(),
        };

        let json = serde_json::to_string(&award).unwrap();
        assert!(json.contains(r#""recipient_name":"Ada""#));
        assert!(json.contains(r#""image_url""#));
        assert!(json.contains(r#""payment_hash":"0x111""#));
    }
}
