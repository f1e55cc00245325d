//! Access report records
//!
//! Metadata describing one cached entry for a data-subject access request.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cache::CacheEntry;

/// Metadata for a single cached entry.
///
/// Built only from entry metadata; there is no field that could hold the
/// decrypted value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryMetadata {
    /// The cache key
    pub key: String,
    /// Size of the cached value in bytes
    pub size_bytes: usize,
    /// Last write, or last read when age reset is enabled
    pub created_at: DateTime<Utc>,
    /// Entry lifetime in seconds, with sub-second precision
    pub ttl_seconds: f64,
    /// Seconds left before the entry lapses
    pub expires_in_seconds: f64,
    /// True if the entry has lapsed but not yet been swept
    pub expired: bool,
    /// Number of successful reads
    pub access_count: u64,
}

impl EntryMetadata {
    /// Describes `entry` stored under `key`.
    pub fn from_entry(key: &str, entry: &CacheEntry) -> Self {
        Self {
            key: key.to_string(),
            size_bytes: entry.size_bytes(),
            created_at: entry.created_at_utc,
            ttl_seconds: entry.ttl.as_secs_f64(),
            expires_in_seconds: entry.ttl_remaining().as_secs_f64(),
            expired: entry.is_expired(),
            access_count: entry.access_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_metadata_from_entry() {
        let mut entry = CacheEntry::new("confidential".to_string(), Duration::from_secs(120));
        entry.record_access(false);

        let meta = EntryMetadata::from_entry("user:7:email", &entry);

        assert_eq!(meta.key, "user:7:email");
        assert_eq!(meta.size_bytes, 12);
        assert_eq!(meta.ttl_seconds, 120.0);
        assert!(meta.expires_in_seconds <= 120.0);
        assert!(!meta.expired);
        assert_eq!(meta.access_count, 1);
    }

    #[test]
    fn test_metadata_serialization_omits_value() {
        let entry = CacheEntry::new("jane@example.com".to_string(), Duration::from_secs(60));
        let meta = EntryMetadata::from_entry("user:7:email", &entry);

        let json = serde_json::to_string(&meta).unwrap();
        assert!(json.contains("user:7:email"));
        assert!(json.contains("size_bytes"));
        assert!(!json.contains("jane@example.com"));
    }

    #[test]
    fn test_metadata_keeps_sub_second_ttl() {
        let entry = CacheEntry::new("v".to_string(), Duration::from_millis(500));
        let meta = EntryMetadata::from_entry("k", &entry);

        assert_eq!(meta.ttl_seconds, 0.5);
        assert!(meta.expires_in_seconds > 0.0 && meta.expires_in_seconds <= 0.5);
        assert!(!meta.expired);
    }

    #[test]
    fn test_metadata_size_counts_bytes_not_chars() {
        let entry = CacheEntry::new("héllo".to_string(), Duration::from_secs(60));
        let meta = EntryMetadata::from_entry("k", &entry);
        assert_eq!(meta.size_bytes, 6);
    }
}
