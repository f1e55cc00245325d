//! Cache Module
//!
//! Unsynchronized engine: TTL expiration, LRU eviction, pattern removal and
//! the key convention used by invalidation and erasure.

mod entry;
pub mod keys;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::{CacheStore, Lookup, SetOutcome};
