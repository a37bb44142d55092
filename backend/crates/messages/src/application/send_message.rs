//! Send Message Use Case
//!
//! Validates the body, rate-limits the sender, then appends to the store.
//! The conversation ID is always computed server-side from the participant
//! pair; a client-supplied ID is ignored.

use std::sync::Arc;

use platform::address;
use platform::rate_limit::{RateLimitConfig, RateLimitStore};

use crate::convo::{MAX_BODY_CHARS, conversation_id};
use crate::domain::entity::Message;
use crate::domain::repository::MessageStore;
use crate::error::{MessageError, MessageResult};

/// Input for message sending. `sender` comes from the wallet header, the
/// rest from the request body.
#[derive(Debug, Clone, Default)]
pub struct SendMessageInput {
    pub sender: String,
    pub recipient: String,
    pub body: String,
}

pub struct SendMessageUseCase<M, L> {
    store: Arc<M>,
    limiter: Arc<L>,
    limit: RateLimitConfig,
}

impl<M, L> SendMessageUseCase<M, L>
where
    M: MessageStore + Send + Sync,
    L: RateLimitStore + Send + Sync,
{
    pub fn new(store: Arc<M>, limiter: Arc<L>, limit: RateLimitConfig) -> Self {
        Self {
            store,
            limiter,
            limit,
        }
    }

    pub async fn execute(&self, input: SendMessageInput) -> MessageResult<Message> {
        let sender = address::normalize(&input.sender);
        if sender.is_empty() {
            return Err(MessageError::MissingField("sender"));
        }
        let recipient = address::normalize(&input.recipient);
        if recipient.is_empty() {
            return Err(MessageError::MissingField("recipient"));
        }

        let body = input.body.trim();
        if body.is_empty() {
            return Err(MessageError::EmptyBody);
        }
        if input.body.chars().count() > MAX_BODY_CHARS {
            return Err(MessageError::BodyTooLong);
        }

        let verdict = self.limiter.check_and_increment(&sender, &self.limit).await;
        if !verdict.allowed {
            return Err(MessageError::RateLimited {
                reset_at_ms: verdict.reset_at_ms,
            });
        }

        let message = Message {
            id: kernel::id::message_id(),
            convo_id: conversation_id(&sender, &recipient),
            sender,
            recipient,
            body: body.to_string(),
            created_at: chrono::Utc::now(),
        };

        self.store.push(message.clone()).await?;
        tracing::info!(
            message_id = %message.id,
            convo_id = %message.convo_id,
            remaining = verdict.remaining,
            "Message sent"
        );

        Ok(message)
    }
}
