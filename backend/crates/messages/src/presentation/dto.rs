//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::{ConversationSummary, Message};

/// Request body for POST /api/messages. `convoId` is accepted for
/// compatibility but the server derives the conversation from the pair.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    #[serde(default)]
    pub convo_id: Option<String>,
    #[serde(default)]
    pub recipient: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

/// Response for POST /api/messages
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageResponse {
    pub success: bool,
    pub message: Message,
}

/// Query parameters for GET /api/messages
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMessagesParams {
    #[serde(default)]
    pub convo_id: Option<String>,
    #[serde(default)]
    pub cursor: Option<DateTime<Utc>>,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Response for GET /api/messages
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMessagesResponse {
    pub success: bool,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<DateTime<Utc>>,
}

/// Query parameters for GET /api/messages/conversations
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListConversationsParams {
    #[serde(default)]
    pub user: Option<String>,
}

/// Response for GET /api/messages/conversations
#[derive(Debug, Clone, Serialize)]
pub struct ListConversationsResponse {
    pub success: bool,
    pub conversations: Vec<ConversationSummary>,
}
