pub mod get_messages;
pub mod list_conversations;
pub mod send_message;

pub use get_messages::{GetMessagesInput, GetMessagesOutput, GetMessagesUseCase};
pub use list_conversations::ListConversationsUseCase;
pub use send_message::{SendMessageInput, SendMessageUseCase};
