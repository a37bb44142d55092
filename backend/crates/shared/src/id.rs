//! Synthetic Identifier Generation
//!
//! String IDs for records that are not keyed by a database-side uuid.
//! Proof IDs are derived from the payment transaction hash so repeated
//! submissions are easy to correlate in logs; message IDs are purely
//! time-plus-entropy.

use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// Build a proof ID from a transaction hash: `proof_<hash[2..10]>_<ms>`.
///
/// The slice skips the `0x` prefix and takes the next 8 characters. Two
/// requests sharing the same slice within the same millisecond would
/// collide; the database unique constraint on `payment_hash` is the actual
/// correctness backstop.
pub fn proof_id(tx_hash: &str) -> String {
    let trimmed = tx_hash.strip_prefix("0x").unwrap_or(tx_hash);
    let slice: String = trimmed.chars().take(8).collect();
    format!("proof_{}_{}", slice, now_ms())
}

/// Build a message ID: `msg_<ms>_<9 hex chars of entropy>`.
pub fn message_id() -> String {
    let entropy = Uuid::new_v4().simple().to_string();
    format!("msg_{}_{}", now_ms(), &entropy[..9])
}
