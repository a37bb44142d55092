//! Rate Limiting Infrastructure
//!
//! Fixed-window rate limiting behind a storage trait. The only production
//! implementation is in-memory: state is lost on restart and is not shared
//! across instances, which matches how the service has always behaved. A
//! durable backend can be slotted in behind [`RateLimitStore`] without
//! touching callers.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Rate limit configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests allowed in the window
    pub max_requests: u32,
    /// Time window duration
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        // 30 requests per 24 hours
        Self {
            max_requests: 30,
            window: Duration::from_secs(24 * 60 * 60),
        }
    }
}

impl RateLimitConfig {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window: Duration::from_secs(window_secs),
        }
    }

    pub fn window_ms(&self) -> i64 {
        self.window.as_millis() as i64
    }
}

/// Rate limit check result
#[derive(Debug, Clone)]
pub struct RateLimitResult {
    pub allowed: bool,
    pub remaining: u32,
    pub reset_at_ms: i64,
}

/// Trait for rate limit storage backends
#[trait_variant::make(RateLimitStore: Send)]
pub trait LocalRateLimitStore {
    /// Check and increment the counter for a key.
    async fn check_and_increment(&self, key: &str, config: &RateLimitConfig) -> RateLimitResult;

    /// Current status for a key without incrementing.
    async fn status(&self, key: &str, config: &RateLimitConfig) -> RateLimitResult;

    /// Drop the counter for a key.
    async fn reset(&self, key: &str);
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    count: u32,
    reset_at_ms: i64,
}

/// In-memory fixed-window store.
#[derive(Debug, Default)]
pub struct MemoryRateLimitStore {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryRateLimitStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove entries whose window has passed. Callers decide cadence.
    pub fn cleanup_expired(&self) -> usize {
        let now = now_ms();
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let before = entries.len();
        entries.retain(|_, e| e.reset_at_ms > now);
        before - entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

impl RateLimitStore for MemoryRateLimitStore {
    async fn check_and_increment(&self, key: &str, config: &RateLimitConfig) -> RateLimitResult {
        let now = now_ms();
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());

        let entry = entries.get(key).copied();
        match entry {
            None => {
                let fresh = Entry {
                    count: 1,
                    reset_at_ms: now + config.window_ms(),
                };
                entries.insert(key.to_string(), fresh);
                RateLimitResult {
                    allowed: true,
                    remaining: config.max_requests.saturating_sub(1),
                    reset_at_ms: fresh.reset_at_ms,
                }
            }
            Some(e) if now > e.reset_at_ms => {
                // Window expired: start a new one
                let fresh = Entry {
                    count: 1,
                    reset_at_ms: now + config.window_ms(),
                };
                entries.insert(key.to_string(), fresh);
                RateLimitResult {
                    allowed: true,
                    remaining: config.max_requests.saturating_sub(1),
                    reset_at_ms: fresh.reset_at_ms,
                }
            }
            Some(e) if e.count >= config.max_requests => {
                tracing::warn!(key = %key, "Rate limit exceeded");
                RateLimitResult {
                    allowed: false,
                    remaining: 0,
                    reset_at_ms: e.reset_at_ms,
                }
            }
            Some(mut e) => {
                e.count += 1;
                entries.insert(key.to_string(), e);
                RateLimitResult {
                    allowed: true,
                    remaining: config.max_requests.saturating_sub(e.count),
                    reset_at_ms: e.reset_at_ms,
                }
            }
        }
    }

    async fn status(&self, key: &str, config: &RateLimitConfig) -> RateLimitResult {
        let now = now_ms();
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());

        match entries.get(key) {
            Some(e) if now <= e.reset_at_ms => RateLimitResult {
                allowed: e.count < config.max_requests,
                remaining: config.max_requests.saturating_sub(e.count),
                reset_at_ms: e.reset_at_ms,
            },
            _ => RateLimitResult {
                allowed: true,
                remaining: config.max_requests,
                reset_at_ms: now + config.window_ms(),
            },
        }
    }

    async fn reset(&self, key: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
    }
}

#[cfg(test)]
mod tests {
    // `LocalRateLimitStore` deliberately left out: importing both trait
    // flavors makes every method call ambiguous
    use super::{MemoryRateLimitStore, RateLimitConfig, RateLimitStore};
    use std::time::Duration;

    #[tokio::test]
    async fn test_allows_up_to_limit_then_denies() {
        let store = MemoryRateLimitStore::new();
        let config = RateLimitConfig::new(3, 60);

        for i in 0..3 {
            let result = store.check_and_increment("user-a", &config).await;
            assert!(result.allowed, "request {} should be allowed", i);
            assert_eq!(result.remaining, 2 - i);
        }

        let result = store.check_and_increment("user-a", &config).await;
        assert!(!result.allowed);
        assert_eq!(result.remaining, 0);
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let store = MemoryRateLimitStore::new();
        let config = RateLimitConfig::new(1, 60);

        assert!(store.check_and_increment("a", &config).await.allowed);
        assert!(!store.check_and_increment("a", &config).await.allowed);
        assert!(store.check_and_increment("b", &config).await.allowed);
    }

    #[tokio::test]
    async fn test_status_does_not_increment() {
        let store = MemoryRateLimitStore::new();
        let config = RateLimitConfig::new(2, 60);

        store.check_and_increment("a", &config).await;
        let s1 = store.status("a", &config).await;
        let s2 = store.status("a", &config).await;
        assert_eq!(s1.remaining, 1);
        assert_eq!(s2.remaining, 1);
    }

    #[tokio::test]
    async fn test_reset_clears_counter() {
        let store = MemoryRateLimitStore::new();
        let config = RateLimitConfig::new(1, 60);

        assert!(store.check_and_increment("a", &config).await.allowed);
        assert!(!store.check_and_increment("a", &config).await.allowed);

        store.reset("a").await;
        assert!(store.check_and_increment("a", &config).await.allowed);
    }

    #[tokio::test]
    async fn test_status_for_unknown_key() {
        let store = MemoryRateLimitStore::new();
        let config = RateLimitConfig::new(5, 60);

        let s = store.status("never-seen", &config).await;
        assert!(s.allowed);
        assert_eq!(s.remaining, 5);
    }

    #[tokio::test]
    async fn test_expired_window_re_allows() {
        let store = MemoryRateLimitStore::new();
        // Zero-length window: the stamp is already `now` at insert time
        let config = RateLimitConfig::new(1, 0);

        let first = store.check_and_increment("a", &config).await;
        assert!(first.allowed);

        // Let the clock move past reset_at_ms
        std::thread::sleep(Duration::from_millis(5));
        let second = store.check_and_increment("a", &config).await;
        assert!(second.allowed, "expired window should start fresh");
        assert!(second.reset_at_ms > first.reset_at_ms);
    }

    #[tokio::test]
    async fn test_cleanup_expired() {
        let store = MemoryRateLimitStore::new();
        // Zero-length window: entries expire immediately
        let config = RateLimitConfig::new(5, 0);

        store.check_and_increment("a", &config).await;
        assert_eq!(store.len(), 1);

        // reset_at_ms == now, so retain(reset_at_ms > now) drops it
        // once the clock moves past the stamp
        std::thread::sleep(Duration::from_millis(5));
        let removed = store.cleanup_expired();
        assert_eq!(removed, 1);
        assert!(store.is_empty());
    }

    #[test]
    fn test_default_config() {
        let config = RateLimitConfig::default();
        assert_eq!(config.max_requests, 30);
        assert_eq!(config.window, Duration::from_secs(86400));
    }
}
