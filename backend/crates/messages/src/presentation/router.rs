//! Messages router

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use platform::rate_limit::{MemoryRateLimitStore, RateLimitConfig, RateLimitStore};

use crate::domain::repository::MessageStore;
use crate::infra::memory::MemoryMessageStore;
use crate::presentation::handlers::{
    MessagesAppState, get_messages, list_conversations, send_message,
};

/// Builds the messages router with the in-memory store and the default
/// send limit (30 per 24h per sender).
///
/// Mounted under `/api/messages`:
/// - `POST /`              - send a message
/// - `GET  /`              - page through a conversation
/// - `GET  /conversations` - inbox summary for a user
pub fn messages_router() -> Router {
    let state = MessagesAppState {
        store: Arc::new(MemoryMessageStore::new()),
        limiter: Arc::new(MemoryRateLimitStore::new()),
        limit: RateLimitConfig::default(),
    };
    messages_router_generic(state)
}

/// Generic router constructor, usable with fakes in tests.
pub fn messages_router_generic<M, L>(state: MessagesAppState<M, L>) -> Router
where
    M: MessageStore + Send + Sync + 'static,
    L: RateLimitStore + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/",
            get(get_messages::<M, L>).post(send_message::<M, L>),
        )
        .route("/conversations", get(list_conversations::<M, L>))
        .with_state(state)
}
