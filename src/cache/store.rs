//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with LRU tracking and TTL expiration.
//! The store itself is not synchronized; `DecryptionCache` wraps it in a lock.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::cache::{CacheEntry, CacheStats, LruTracker};
use crate::config::CacheConfig;
use crate::models::{CacheStatsSnapshot, EntryMetadata};

// == Lookup Result ==
/// Outcome of a read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Live entry found
    Hit(String),
    /// No entry under the key
    Missing,
    /// Entry was present but had lapsed; it has been removed
    Expired,
}

impl Lookup {
    /// Converts into the value, if any.
    pub fn into_value(self) -> Option<String> {
        match self {
            Lookup::Hit(value) => Some(value),
            Lookup::Missing | Lookup::Expired => None,
        }
    }
}

// == Set Outcome ==
/// What a write displaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetOutcome {
    /// Key evicted to make room, if the cache was full
    pub evicted: Option<String>,
    /// True if the key already existed and was overwritten
    pub replaced: bool,
}

// == Cache Store ==
/// Main cache storage with LRU eviction and TTL support.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// LRU access tracker
    lru: LruTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_size: usize,
    /// TTL for entries set without an explicit TTL
    default_ttl: Duration,
    /// Whether hits move the entry to MRU and reset its age
    reset_age_on_read: bool,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore.
    ///
    /// # Arguments
    /// * `max_size` - Maximum number of entries, raised to 1 if zero
    /// * `default_ttl` - TTL for entries set without an explicit TTL
    /// * `reset_age_on_read` - Refresh recency and age on every hit
    pub fn new(max_size: usize, default_ttl: Duration, reset_age_on_read: bool) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            max_size: max_size.max(1),
            default_ttl,
            reset_age_on_read,
        }
    }

    /// Creates a store from configuration.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(
            config.max_size,
            config.default_ttl_duration(),
            config.reset_age_on_read,
        )
    }

    // == Set ==
    /// Stores a value with an optional TTL.
    ///
    /// An existing key is overwritten in place and becomes most recently
    /// used. A new key arriving at capacity evicts exactly one entry, the
    /// least recently used.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The decrypted value
    /// * `ttl` - Entry lifetime (uses default_ttl if None)
    pub fn set(&mut self, key: String, value: String, ttl: Option<Duration>) -> SetOutcome {
        let replaced = self.entries.contains_key(&key);

        let mut evicted = None;
        if !replaced && self.entries.len() >= self.max_size {
            if let Some(evicted_key) = self.lru.evict_oldest() {
                self.entries.remove(&evicted_key);
                self.stats.record_eviction();
                evicted = Some(evicted_key);
            }
        }

        let entry = CacheEntry::new(value, ttl.unwrap_or(self.default_ttl));
        self.lru.touch(&key);
        self.entries.insert(key, entry);
        self.stats.record_set();

        SetOutcome { evicted, replaced }
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Expired entries are removed on discovery and counted as misses.
    pub fn get(&mut self, key: &str) -> Lookup {
        let Some(entry) = self.entries.get_mut(key) else {
            self.stats.record_miss();
            return Lookup::Missing;
        };

        if entry.is_expired() {
            self.entries.remove(key);
            self.lru.remove(key);
            self.stats.record_miss();
            self.stats.record_expirations(1);
            return Lookup::Expired;
        }

        entry.record_access(self.reset_age_on_read);
        let value = entry.value().to_string();
        self.stats.record_hit();
        if self.reset_age_on_read {
            self.lru.touch(key);
        }
        Lookup::Hit(value)
    }

    // == Remove ==
    /// Removes a single entry by exact key.
    ///
    /// Returns true if an entry was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        if self.entries.remove(key).is_some() {
            self.lru.remove(key);
            self.stats.record_invalidations(1);
            true
        } else {
            false
        }
    }

    // == Remove Matching ==
    /// Removes every entry whose key satisfies `matches`.
    ///
    /// Returns the removed keys, least recently used first.
    pub fn remove_where<F>(&mut self, matches: F) -> Vec<String>
    where
        F: Fn(&str) -> bool,
    {
        let doomed: Vec<String> = self
            .lru
            .iter_oldest_first()
            .filter(|key| matches(key.as_str()))
            .cloned()
            .collect();

        for key in &doomed {
            self.entries.remove(key);
            self.lru.remove(key);
        }

        self.stats.record_invalidations(doomed.len());
        doomed
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the removed keys.
    pub fn cleanup_expired(&mut self) -> Vec<String> {
        let now = Instant::now();
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            self.entries.remove(key);
            self.lru.remove(key);
        }

        self.stats.record_expirations(expired_keys.len());
        expired_keys
    }

    // == Clear ==
    /// Drops every entry and resets all counters.
    ///
    /// Returns the keys that were present.
    pub fn clear(&mut self) -> Vec<String> {
        let keys: Vec<String> = self.lru.iter_oldest_first().cloned().collect();
        self.entries.clear();
        self.lru.clear();
        self.stats.reset();
        keys
    }

    // == Metadata ==
    /// Describes every entry whose key satisfies `matches`, least recently
    /// used first. Does not touch recency, age or counters.
    pub fn metadata_where<F>(&self, matches: F) -> Vec<EntryMetadata>
    where
        F: Fn(&str) -> bool,
    {
        self.lru
            .iter_oldest_first()
            .filter(|key| matches(key.as_str()))
            .filter_map(|key| {
                self.entries
                    .get(key)
                    .map(|entry| EntryMetadata::from_entry(key, entry))
            })
            .collect()
    }

    // == Contains ==
    /// True if a live entry exists under `key`. No stats or recency effect.
    pub fn contains(&self, key: &str) -> bool {
        self.entries
            .get(key)
            .map(|entry| !entry.is_expired())
            .unwrap_or(false)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.clone()
    }

    /// Counters plus occupancy, ready for export.
    pub fn snapshot(&self) -> CacheStatsSnapshot {
        CacheStatsSnapshot::new(
            &self.stats,
            self.entries.len(),
            self.max_size,
            self.default_ttl.as_secs(),
        )
    }

    // == Length ==
    /// Returns the current number of entries, including lapsed ones not yet swept.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }
}
