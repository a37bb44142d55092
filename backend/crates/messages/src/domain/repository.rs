//! Message Store Trait

use crate::domain::entity::Message;
use crate::error::MessageResult;

/// Message storage trait. The production implementation is in-memory;
/// a database-backed one can be slotted in without touching callers.
#[trait_variant::make(MessageStore: Send)]
pub trait LocalMessageStore {
    /// Append a message.
    async fn push(&self, message: Message) -> MessageResult<()>;

    /// All messages in a conversation, insertion order.
    async fn by_convo(&self, convo_id: &str) -> MessageResult<Vec<Message>>;

    /// All messages where the user is sender or recipient, insertion order.
    async fn involving(&self, user: &str) -> MessageResult<Vec<Message>>;
}
