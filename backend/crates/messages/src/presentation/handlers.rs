//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use platform::rate_limit::{RateLimitConfig, RateLimitStore};

use crate::application::{
    GetMessagesInput, GetMessagesUseCase, ListConversationsUseCase, SendMessageInput,
    SendMessageUseCase,
};
use crate::domain::repository::MessageStore;
use crate::error::{MessageError, MessageResult};
use crate::presentation::dto::{
    GetMessagesParams, GetMessagesResponse, ListConversationsParams, ListConversationsResponse,
    SendMessageRequest, SendMessageResponse,
};

/// Shared state for message handlers
pub struct MessagesAppState<M, L>
where
    M: MessageStore + Send + Sync + 'static,
    L: RateLimitStore + Send + Sync + 'static,
{
    pub store: Arc<M>,
    pub limiter: Arc<L>,
    pub limit: RateLimitConfig,
}

// Manual Clone: the store and limiter types themselves are not Clone,
// only the Arcs around them are
impl<M, L> Clone for MessagesAppState<M, L>
where
    M: MessageStore + Send + Sync + 'static,
    L: RateLimitStore + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            limiter: self.limiter.clone(),
            limit: self.limit.clone(),
        }
    }
}

fn wallet_header(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-wallet-address")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// POST /api/messages
pub async fn send_message<M, L>(
    State(state): State<MessagesAppState<M, L>>,
    headers: HeaderMap,
    Json(request): Json<SendMessageRequest>,
) -> MessageResult<Json<SendMessageResponse>>
where
    M: MessageStore + Send + Sync + 'static,
    L: RateLimitStore + Send + Sync + 'static,
{
    let sender = wallet_header(&headers).ok_or(MessageError::MissingField("sender"))?;

    let use_case = SendMessageUseCase::new(
        state.store.clone(),
        state.limiter.clone(),
        state.limit.clone(),
    );
    let message = use_case
        .execute(SendMessageInput {
            sender,
            recipient: request.recipient.unwrap_or_default(),
            body: request.body.unwrap_or_default(),
        })
        .await?;

    Ok(Json(SendMessageResponse {
        success: true,
        message,
    }))
}

/// GET /api/messages?convoId=&cursor=&limit=
pub async fn get_messages<M, L>(
    State(state): State<MessagesAppState<M, L>>,
    Query(params): Query<GetMessagesParams>,
) -> MessageResult<Json<GetMessagesResponse>>
where
    M: MessageStore + Send + Sync + 'static,
    L: RateLimitStore + Send + Sync + 'static,
{
    let use_case = GetMessagesUseCase::new(state.store.clone());
    let output = use_case
        .execute(GetMessagesInput {
            convo_id: params.convo_id.unwrap_or_default(),
            cursor: params.cursor,
            limit: params.limit,
        })
        .await?;

    Ok(Json(GetMessagesResponse {
        success: true,
        messages: output.messages,
        next_cursor: output.next_cursor,
    }))
}

/// GET /api/messages/conversations?user=
pub async fn list_conversations<M, L>(
    State(state): State<MessagesAppState<M, L>>,
    Query(params): Query<ListConversationsParams>,
) -> MessageResult<Json<ListConversationsResponse>>
where
    M: MessageStore + Send + Sync + 'static,
    L: RateLimitStore + Send + Sync + 'static,
{
    let user = params.user.unwrap_or_default();
    let use_case = ListConversationsUseCase::new(state.store.clone());
    let conversations = use_case.execute(&user).await?;

    Ok(Json(ListConversationsResponse {
        success: true,
        conversations,
    }))
}
