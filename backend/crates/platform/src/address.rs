//! Wallet address helpers
//!
//! Addresses are treated as opaque lowercase strings. No checksum or
//! on-chain validation happens server-side; the founder check is a plain
//! string comparison after normalization.

/// Normalize an address for comparison: trim, lowercase, strip inner
/// whitespace. Empty input normalizes to an empty string.
pub fn normalize(address: &str) -> String {
    address
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Mask an address for logs and health reports: `0x1234…abcd`.
///
/// Addresses too short to mask are returned unchanged. Counts characters,
/// not bytes: addresses come from request bodies and are not guaranteed
/// to be ASCII.
pub fn mask(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}
