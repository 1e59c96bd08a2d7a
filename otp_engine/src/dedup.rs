//! Caller-side message deduplication.
//!
//! The extractor is stateless; callers that may receive the same message
//! more than once deduplicate here before invoking it.

use sha2::{Digest, Sha256};
use std::collections::{HashSet, VecDeque};

/// Default number of message keys remembered before eviction begins.
pub const DEFAULT_RECENT_CAPACITY: usize = 100;

/// Compute a SHA-256 content key for messages without a platform-provided id.
///
/// Concatenates the message source and text, then returns the hex-encoded
/// SHA-256 digest.
#[must_use]
pub fn content_key(source: &str, text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(source.as_bytes());
    hasher.update(b":");
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Bounded set of recently-seen message keys with FIFO eviction.
#[derive(Debug)]
pub struct RecentMessages {
    seen: HashSet<String>,
    order: VecDeque<String>,
    capacity: usize,
}

impl RecentMessages {
    /// Create a set that remembers at most `capacity` keys.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            seen: HashSet::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a message key.
    ///
    /// Returns `false` when the key was already present. Once the set is at
    /// capacity, each new key evicts the oldest one.
    pub fn insert(&mut self, key: impl Into<String>) -> bool {
        let key = key.into();
        if self.seen.contains(&key) {
            return false;
        }
        if self.order.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.seen.remove(&oldest);
            }
        }
        self.seen.insert(key.clone());
        self.order.push_back(key);
        true
    }

    /// True when the key is currently remembered.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.seen.contains(key)
    }

    /// Number of keys currently remembered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when no keys are remembered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Default for RecentMessages {
    fn default() -> Self {
        Self::new(DEFAULT_RECENT_CAPACITY)
    }
}
