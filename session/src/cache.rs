//! Query cache for API reads.
//!
//! DESIGN
//! ======
//! Entries are stored as JSON values keyed by logical query, each key with its
//! own staleness window. `begin_fetch`/`finish_fetch` give callers a cheap way
//! to avoid issuing the same request twice while one is in flight. Time is
//! passed in as milliseconds so the cache stays clock-agnostic.

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use serde::de::DeserializeOwned;

const SECOND_MS: u64 = 1_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryKey {
    CurrentUser,
    ProfileSummary,
    Profile,
    SubscriptionStatus,
}

impl QueryKey {
    /// How long a cached value stays fresh.
    #[must_use]
    pub fn stale_after_ms(self) -> u64 {
        match self {
            Self::ProfileSummary | Self::SubscriptionStatus => 60 * SECOND_MS,
            Self::CurrentUser | Self::Profile => 5 * 60 * SECOND_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct CacheEntry {
    value: serde_json::Value,
    fetched_at_ms: u64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryCache {
    entries: HashMap<QueryKey, CacheEntry>,
    in_flight: HashSet<QueryKey>,
}

impl QueryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh cached value for `key`, if any.
    #[must_use]
    pub fn get<T: DeserializeOwned>(&self, key: QueryKey, now_ms: u64) -> Option<T> {
        let entry = self.entries.get(&key)?;
        if now_ms.saturating_sub(entry.fetched_at_ms) >= key.stale_after_ms() {
            return None;
        }
        serde_json::from_value(entry.value.clone()).ok()
    }

    /// Cached value for `key` regardless of age, for showing while revalidating.
    #[must_use]
    pub fn peek<T: DeserializeOwned>(&self, key: QueryKey) -> Option<T> {
        let entry = self.entries.get(&key)?;
        serde_json::from_value(entry.value.clone()).ok()
    }

    /// True when `key` has no fresh entry and nobody is fetching it.
    #[must_use]
    pub fn needs_fetch(&self, key: QueryKey, now_ms: u64) -> bool {
        if self.in_flight.contains(&key) {
            return false;
        }
        self.entries
            .get(&key)
            .is_none_or(|entry| now_ms.saturating_sub(entry.fetched_at_ms) >= key.stale_after_ms())
    }

    pub fn put<T: Serialize>(&mut self, key: QueryKey, value: &T, now_ms: u64) {
        match serde_json::to_value(value) {
            Ok(value) => {
                self.entries.insert(key, CacheEntry { value, fetched_at_ms: now_ms });
            }
            Err(e) => log::warn!("not caching {key:?}: {e}"),
        }
    }

    pub fn invalidate(&mut self, key: QueryKey) {
        self.entries.remove(&key);
    }

    /// Drop every cached value. In-flight markers survive so late responses
    /// still clear them.
    pub fn invalidate_all(&mut self) {
        self.entries.clear();
    }

    /// Drop everything, including in-flight markers.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.in_flight.clear();
    }

    /// Claim `key` for fetching. Returns `false` when a fetch is already running.
    pub fn begin_fetch(&mut self, key: QueryKey) -> bool {
        self.in_flight.insert(key)
    }

    pub fn finish_fetch(&mut self, key: QueryKey) {
        self.in_flight.remove(&key);
    }

    #[must_use]
    pub fn is_fetching(&self, key: QueryKey) -> bool {
        self.in_flight.contains(&key)
    }
}
