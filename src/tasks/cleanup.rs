//! TTL Cleanup Task
//!
//! Optional background task that periodically sweeps expired cache entries.
//! Expiration is enforced lazily on reads either way; the sweep only bounds
//! memory for keys that are never read again.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::service::DecryptionCache;

/// Spawns a background task that periodically cleans up expired cache entries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. Each sweep holds the cache lock only for the scan itself.
///
/// # Arguments
/// * `cache` - Handle to the shared cache
/// * `cleanup_interval_secs` - Interval in seconds between sweeps, 0 disables the task
///
/// # Returns
/// A JoinHandle for the spawned task, or None when disabled. Abort it at shutdown.
///
/// # Example
/// ```ignore
/// let cache = DecryptionCache::new(CacheConfig::default())?;
/// if let Some(cleanup_handle) = spawn_cleanup_task(cache.clone(), 60) {
///     // Later, during shutdown:
///     cleanup_handle.abort();
/// }
/// ```
pub fn spawn_cleanup_task(
    cache: DecryptionCache,
    cleanup_interval_secs: u64,
) -> Option<JoinHandle<()>> {
    spawn_cleanup_task_every(cache, Duration::from_secs(cleanup_interval_secs))
}

/// Starts the sweep at the cache's configured `cleanup_interval`.
///
/// Returns None when the interval is 0. Must be called inside a Tokio runtime
/// otherwise.
pub fn spawn_configured_cleanup(cache: &DecryptionCache) -> Option<JoinHandle<()>> {
    spawn_cleanup_task(cache.clone(), cache.config().cleanup_interval)
}

/// Same as [`spawn_cleanup_task`] with a sub-second capable interval.
///
/// A zero interval disables the sweep and returns None.
pub fn spawn_cleanup_task_every(
    cache: DecryptionCache,
    interval: Duration,
) -> Option<JoinHandle<()>> {
    if interval.is_zero() {
        debug!("TTL cleanup task disabled: interval is zero");
        return None;
    }

    Some(tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} ms",
            interval.as_millis()
        );

        loop {
            tokio::time::sleep(interval).await;

            // Non-empty sweeps are logged by the cache itself
            if cache.cleanup_expired() == 0 {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    }))
}
