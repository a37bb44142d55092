//! In-memory Message Store

use platform::address;
use tokio::sync::RwLock;

use crate::domain::entity::Message;
use crate::domain::repository::MessageStore;
use crate::error::MessageResult;

/// In-memory message store. Contents reset on restart.
#[derive(Debug, Default)]
pub struct MemoryMessageStore {
    messages: RwLock<Vec<Message>>,
}

impl MemoryMessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.messages.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn clear(&self) {
        self.messages.write().await.clear();
    }
}

impl MessageStore for MemoryMessageStore {
    async fn push(&self, message: Message) -> MessageResult<()> {
        self.messages.write().await.push(message);
        Ok(())
    }

    async fn by_convo(&self, convo_id: &str) -> MessageResult<Vec<Message>> {
        Ok(self
            .messages
            .read()
            .await
            .iter()
            .filter(|m| m.convo_id == convo_id)
            .cloned()
            .collect())
    }

    async fn involving(&self, user: &str) -> MessageResult<Vec<Message>> {
        let user = address::normalize(user);
        Ok(self
            .messages
            .read()
            .await
            .iter()
            .filter(|m| {
                address::normalize(&m.sender) == user
                    || address::normalize(&m.recipient) == user
            })
            .cloned()
            .collect())
    }
}
