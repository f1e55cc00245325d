//! Error types for the decryption cache
//!
//! Lookups, expirations and zero-match removals are normal outcomes and never
//! surface here. Only malformed caller input is rejected.

use thiserror::Error;

// == Cache Error Enum ==
/// Validation errors raised at the boundary of the cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Subject identifier unusable for erasure or access reports
    #[error("Invalid subject identifier: {0}")]
    InvalidSubject(String),

    /// Constructor-level configuration rejected
    #[error("Invalid cache configuration: {0}")]
    InvalidConfig(String),
}

// == Result Type Alias ==
/// Convenience Result type for the decryption cache.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CacheError::InvalidSubject("subject id cannot be empty".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid subject identifier: subject id cannot be empty"
        );

        let err = CacheError::InvalidConfig("max_size must be at least 1".to_string());
        assert!(err.to_string().contains("max_size"));
    }
}
