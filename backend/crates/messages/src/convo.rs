//! Conversation Identifiers
//!
//! A conversation ID is derived from the sorted, lowercased pair of
//! participant addresses, so both sides compute the same ID without any
//! registration step. The hash is the classic 32-bit rolling string hash
//! (`h = h * 31 + c` in shifted form); web clients compute the identical
//! value, so the algorithm is part of the wire contract and must not change.

/// Maximum message body length in characters.
pub const MAX_BODY_CHARS: usize = 2000;

fn rolling_hash(s: &str) -> u32 {
    let mut hash: i32 = 0;
    for c in s.chars() {
        hash = hash.wrapping_shl(5).wrapping_sub(hash).wrapping_add(c as i32);
    }
    hash.unsigned_abs()
}

/// Deterministic conversation ID for a pair of addresses, order-independent.
pub fn conversation_id(address1: &str, address2: &str) -> String {
    let a = address1.trim().to_lowercase();
    let b = address2.trim().to_lowercase();

    let combined = if a <= b {
        format!("{a}:{b}")
    } else {
        format!("{b}:{a}")
    };

    format!("convo_{:0>8x}", rolling_hash(&combined))
}
