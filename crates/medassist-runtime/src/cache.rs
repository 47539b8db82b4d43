//! Exact-text response cache.
//!
//! Keys are the lower-cased, trimmed input. With `CachePolicy::Freeze` the
//! cache stops accepting entries once full and never evicts; with
//! `CachePolicy::EvictOldest` the oldest insertion makes room.

use std::collections::{HashMap, VecDeque};

use medassist_core::CachePolicy;
use parking_lot::Mutex;

/// Thread-safe bounded response cache.
pub struct ResponseCache {
    inner: Mutex<CacheInner>,
}

struct CacheInner {
    entries: HashMap<String, String>,
    order: VecDeque<String>,
    capacity: usize,
    policy: CachePolicy,
}

impl ResponseCache {
    pub fn new(capacity: usize, policy: CachePolicy) -> Self {
        Self {
            inner: Mutex::new(CacheInner {
                entries: HashMap::with_capacity(capacity),
                order: VecDeque::with_capacity(capacity),
                capacity,
                policy,
            }),
        }
    }

    /// Normalized cache key for `text`.
    pub fn key(text: &str) -> String {
        text.trim().to_lowercase()
    }

    /// Cached response for `text`, if any.
    pub fn get(&self, text: &str) -> Option<String> {
        self.inner.lock().entries.get(&Self::key(text)).cloned()
    }

    /// Store a response. Existing entries are never overwritten.
    pub fn put(&self, text: &str, response: String) {
        let key = Self::key(text);
        let mut inner = self.inner.lock();

        if inner.entries.contains_key(&key) || inner.capacity == 0 {
            return;
        }

        if inner.entries.len() >= inner.capacity {
            match inner.policy {
                CachePolicy::Freeze => return,
                CachePolicy::EvictOldest => {
                    if let Some(oldest) = inner.order.pop_front() {
                        inner.entries.remove(&oldest);
                    }
                }
            }
        }

        inner.order.push_back(key.clone());
        inner.entries.insert(key, response);
    }

    /// Number of entries in the cache.
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity
    }
}
