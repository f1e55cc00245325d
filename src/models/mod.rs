//! Serializable views of the cache
//!
//! Outputs handed to monitoring and compliance callers. None of them carry
//! decrypted values.

pub mod report;
pub mod stats;

// Re-export commonly used types
pub use report::EntryMetadata;
pub use stats::CacheStatsSnapshot;
