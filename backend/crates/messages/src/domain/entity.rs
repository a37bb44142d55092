//! Message entity

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A chat message between two wallet addresses. Serialized camelCase; the
/// field names are part of the wire contract with web clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub convo_id: String,
    pub sender: String,
    pub recipient: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// A conversation summary for the inbox view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSummary {
    pub convo_id: String,
    pub other_participant: String,
    pub last_message: Message,
}
