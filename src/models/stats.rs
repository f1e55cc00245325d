//! Statistics snapshot for monitoring

use serde::Serialize;

use crate::cache::CacheStats;

/// Point-in-time view of cache occupancy and counters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheStatsSnapshot {
    /// Current number of entries in cache
    pub size: usize,
    /// Configured capacity
    pub max_size: usize,
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Number of capacity evictions
    pub evictions: u64,
    /// Number of set calls
    pub sets: u64,
    /// Number of entries dropped after their TTL lapsed
    pub expirations: u64,
    /// Number of entries removed by invalidation or erasure
    pub invalidations: u64,
    /// Default TTL in seconds
    pub default_ttl: u64,
}

impl CacheStatsSnapshot {
    /// Combines running counters with occupancy figures.
    pub fn new(stats: &CacheStats, size: usize, max_size: usize, default_ttl: u64) -> Self {
        Self {
            size,
            max_size,
            hits: stats.hits,
            misses: stats.misses,
            hit_rate: stats.hit_rate(),
            evictions: stats.evictions,
            sets: stats.sets,
            expirations: stats.expirations,
            invalidations: stats.invalidations,
            default_ttl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_hit_rate() {
        let stats = CacheStats {
            hits: 80,
            misses: 20,
            evictions: 5,
            sets: 100,
            ..CacheStats::default()
        };
        let snapshot = CacheStatsSnapshot::new(&stats, 95, 1000, 300);

        assert!((snapshot.hit_rate - 0.8).abs() < 0.001);
        assert_eq!(snapshot.size, 95);
        assert_eq!(snapshot.max_size, 1000);
        assert_eq!(snapshot.sets, 100);
    }

    #[test]
    fn test_snapshot_zero_requests() {
        let snapshot = CacheStatsSnapshot::new(&CacheStats::default(), 0, 10, 300);
        assert_eq!(snapshot.hit_rate, 0.0);
    }

    #[test]
    fn test_snapshot_serialize() {
        let snapshot = CacheStatsSnapshot::new(&CacheStats::default(), 0, 10, 300);
        let json: serde_json::Value = serde_json::to_value(&snapshot).unwrap();

        for field in [
            "size",
            "max_size",
            "hits",
            "misses",
            "hit_rate",
            "evictions",
            "sets",
            "default_ttl",
        ] {
            assert!(json.get(field).is_some(), "missing field {}", field);
        }
    }
}
