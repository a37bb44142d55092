//! Messages Backend Module
//!
//! Private 1:1 chat between wallet addresses. Storage is in-memory behind a
//! repository trait; contents do not survive a restart, which matches how
//! the service has always behaved. Sends are rate-limited per sender.
//!
//! Conversation IDs are deterministic: both participants derive the same
//! `convo_<hash>` from the sorted pair of addresses, so no conversation
//! registry exists.

pub mod application;
pub mod convo;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use convo::conversation_id;
pub use error::{MessageError, MessageResult};
pub use infra::memory::MemoryMessageStore;
pub use presentation::router::{messages_router, messages_router_generic};
