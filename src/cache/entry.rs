//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::fmt;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use zeroize::Zeroizing;

// == Cache Entry ==
/// A decrypted value together with its expiry metadata.
///
/// The value is wiped from memory when the entry is dropped.
pub struct CacheEntry {
    /// The decrypted payload
    value: Zeroizing<String>,
    /// Monotonic time of last write, or of last read when age reset is on
    pub created_at: Instant,
    /// Wall-clock counterpart of `created_at`, used for reports
    pub created_at_utc: DateTime<Utc>,
    /// Lifetime measured from `created_at`
    pub ttl: Duration,
    /// Number of successful reads
    pub access_count: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl` after now.
    pub fn new(value: String, ttl: Duration) -> Self {
        Self {
            value: Zeroizing::new(value),
            created_at: Instant::now(),
            created_at_utc: Utc::now(),
            ttl,
            access_count: 0,
        }
    }

    /// Borrow the decrypted value.
    pub fn value(&self) -> &str {
        self.value.as_str()
    }

    /// Size of the stored value in bytes.
    pub fn size_bytes(&self) -> usize {
        self.value.len()
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once its age is greater than or equal to its TTL,
    /// so a zero TTL expires on the very next check.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// Expiry check against a caller-supplied instant.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.ttl
    }

    // == Time To Live ==
    /// Returns the remaining lifetime, zero once expired.
    pub fn ttl_remaining(&self) -> Duration {
        self.ttl
            .saturating_sub(Instant::now().saturating_duration_since(self.created_at))
    }

    // == Record Access ==
    /// Counts a successful read and optionally resets the entry's age.
    pub fn record_access(&mut self, reset_age: bool) {
        self.access_count += 1;
        if reset_age {
            self.created_at = Instant::now();
            self.created_at_utc = Utc::now();
        }
    }
}

impl fmt::Debug for CacheEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheEntry")
            .field("value", &"<redacted>")
            .field("size_bytes", &self.size_bytes())
            .field("created_at_utc", &self.created_at_utc)
            .field("ttl", &self.ttl)
            .field("access_count", &self.access_count)
            .finish()
    }
}
