//! Decryption Cache - an in-memory cache for decrypted field values
//!
//! Sits in front of a field-level decryption path: callers look a value up
//! before decrypting and store the plaintext afterwards. Entries expire after
//! a TTL, the least recently used entry makes room when the cache is full,
//! and writes to the backing store invalidate by entity. Data-subject erasure
//! and metadata-only access reports cover compliance requests.
//!
//! Values live only in process memory and are wiped when dropped.
//!
//! ```
//! use decryption_cache::{CacheConfig, DecryptionCache};
//!
//! let cache = DecryptionCache::new(CacheConfig::default()).unwrap();
//! cache.set("cases:123:title", "Smith v. Jones", None);
//! assert_eq!(cache.get("cases:123:title").as_deref(), Some("Smith v. Jones"));
//!
//! cache.invalidate_entity("cases", 123);
//! assert_eq!(cache.get("cases:123:title"), None);
//! ```

pub mod audit;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod tasks;

pub use audit::{
    AuditEvent, AuditEventType, AuditSink, EvictionObserver, EvictionReason, TracingAuditSink,
};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use models::{CacheStatsSnapshot, EntryMetadata};
pub use service::DecryptionCache;
pub use tasks::spawn_cleanup_task;
