//! Get Messages Use Case
//!
//! Cursor pagination over a single conversation. The cursor is the
//! `createdAt` of the last message on the previous page; a page walks
//! newest-first but is returned in chronological order for rendering.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entity::Message;
use crate::domain::repository::MessageStore;
use crate::error::{MessageError, MessageResult};

/// Default page size.
pub const DEFAULT_PAGE_LIMIT: usize = 50;

#[derive(Debug, Clone, Default)]
pub struct GetMessagesInput {
    pub convo_id: String,
    pub cursor: Option<DateTime<Utc>>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct GetMessagesOutput {
    /// Page contents in chronological order
    pub messages: Vec<Message>,
    /// Cursor for the next (older) page, when one exists
    pub next_cursor: Option<DateTime<Utc>>,
}

pub struct GetMessagesUseCase<M> {
    store: Arc<M>,
}

impl<M> GetMessagesUseCase<M>
where
    M: MessageStore + Send + Sync,
{
    pub fn new(store: Arc<M>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, input: GetMessagesInput) -> MessageResult<GetMessagesOutput> {
        if input.convo_id.trim().is_empty() {
            return Err(MessageError::MissingField("convoId"));
        }

        let mut messages = self.store.by_convo(input.convo_id.trim()).await?;
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        if let Some(cursor) = input.cursor {
            messages.retain(|m| m.created_at < cursor);
        }

        let limit = input.limit.unwrap_or(DEFAULT_PAGE_LIMIT).max(1);
        let has_more = messages.len() > limit;
        messages.truncate(limit);

        let next_cursor = if has_more {
            messages.last().map(|m| m.created_at)
        } else {
            None
        };

        messages.reverse();
        Ok(GetMessagesOutput {
            messages,
            next_cursor,
        })
    }
}
