//! Configuration Module
//!
//! Constructor-level settings for the decryption cache, loadable from
//! environment variables.

use std::env;
use std::time::Duration;

use crate::error::{CacheError, Result};

const ENV_MAX_SIZE: &str = "DECRYPTION_CACHE_MAX_SIZE";
const ENV_DEFAULT_TTL: &str = "DECRYPTION_CACHE_DEFAULT_TTL";
const ENV_RESET_AGE_ON_READ: &str = "DECRYPTION_CACHE_RESET_AGE_ON_READ";
const ENV_CLEANUP_INTERVAL: &str = "DECRYPTION_CACHE_CLEANUP_INTERVAL";

/// Cache configuration parameters.
///
/// Values are fixed once the cache is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold
    pub max_size: usize,
    /// Default TTL in seconds for entries set without an explicit TTL
    pub default_ttl: u64,
    /// Whether a successful read moves the entry to MRU and resets its age
    pub reset_age_on_read: bool,
    /// Interval in seconds for the optional cleanup task, 0 disables it
    pub cleanup_interval: u64,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DECRYPTION_CACHE_MAX_SIZE` - Maximum cache entries (default: 1000)
    /// - `DECRYPTION_CACHE_DEFAULT_TTL` - Default TTL in seconds (default: 300)
    /// - `DECRYPTION_CACHE_RESET_AGE_ON_READ` - `true`/`false` (default: true)
    /// - `DECRYPTION_CACHE_CLEANUP_INTERVAL` - Sweep interval in seconds (default: 60)
    ///
    /// Missing or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            max_size: lookup(ENV_MAX_SIZE)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.max_size),
            default_ttl: lookup(ENV_DEFAULT_TTL)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.default_ttl),
            reset_age_on_read: lookup(ENV_RESET_AGE_ON_READ)
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.reset_age_on_read),
            cleanup_interval: lookup(ENV_CLEANUP_INTERVAL)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.cleanup_interval),
        }
    }

    /// Sets the maximum number of entries.
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    /// Sets the default TTL in seconds.
    pub fn with_default_ttl(mut self, seconds: u64) -> Self {
        self.default_ttl = seconds;
        self
    }

    /// Enables or disables age reset on read.
    pub fn with_reset_age_on_read(mut self, enabled: bool) -> Self {
        self.reset_age_on_read = enabled;
        self
    }

    /// Default TTL as a Duration.
    pub fn default_ttl_duration(&self) -> Duration {
        Duration::from_secs(self.default_ttl)
    }

    /// Rejects settings that would break the size invariant.
    pub fn validate(&self) -> Result<()> {
        if self.max_size == 0 {
            return Err(CacheError::InvalidConfig(
                "max_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_size: 1000,
            default_ttl: 300,
            reset_age_on_read: true,
            cleanup_interval: 60,
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
