//! List Conversations Use Case

use std::collections::HashMap;
use std::sync::Arc;

use platform::address;

use crate::domain::entity::ConversationSummary;
use crate::domain::repository::MessageStore;
use crate::error::{MessageError, MessageResult};

pub struct ListConversationsUseCase<M> {
    store: Arc<M>,
}

impl<M> ListConversationsUseCase<M>
where
    M: MessageStore + Send + Sync,
{
    pub fn new(store: Arc<M>) -> Self {
        Self { store }
    }

    /// All conversations involving a user, most recently active first.
    pub async fn execute(&self, user: &str) -> MessageResult<Vec<ConversationSummary>> {
        let user = address::normalize(user);
        if user.is_empty() {
            return Err(MessageError::MissingField("user"));
        }

        let messages = self.store.involving(&user).await?;

        let mut by_convo: HashMap<String, ConversationSummary> = HashMap::new();
        for message in messages {
            let other = if address::normalize(&message.sender) == user {
                message.recipient.clone()
            } else {
                message.sender.clone()
            };

            by_convo
                .entry(message.convo_id.clone())
                .and_modify(|summary| {
                    if message.created_at > summary.last_message.created_at {
                        summary.last_message = message.clone();
                    }
                })
                .or_insert_with(|| ConversationSummary {
                    convo_id: message.convo_id.clone(),
                    other_participant: other,
                    last_message: message,
                });
        }

        let mut conversations: Vec<ConversationSummary> = by_convo.into_values().collect();
        conversations
            .sort_by(|a, b| b.last_message.created_at.cmp(&a.last_message.created_at));

        Ok(conversations)
    }
}
