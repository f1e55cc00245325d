//! Eviction observer

use serde::Serialize;

use super::AuditAction;

/// Why an entry left the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EvictionReason {
    /// Least recently used entry dropped to make room
    Capacity,
    /// TTL lapsed, found by a read or a sweep
    Expired,
    /// Removed by key, entity or entity-type invalidation
    Invalidated,
    /// Removed by a data-subject erasure
    Erased,
    /// Removed by a full clear
    Cleared,
}

impl EvictionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvictionReason::Capacity => "capacity",
            EvictionReason::Expired => "expired",
            EvictionReason::Invalidated => "invalidated",
            EvictionReason::Erased => "erased",
            EvictionReason::Cleared => "cleared",
        }
    }

    pub(crate) fn audit_action(&self) -> AuditAction {
        match self {
            EvictionReason::Capacity => AuditAction::Evict,
            EvictionReason::Expired => AuditAction::Expire,
            EvictionReason::Invalidated => AuditAction::Invalidate,
            EvictionReason::Erased => AuditAction::Erase,
            EvictionReason::Cleared => AuditAction::Clear,
        }
    }
}

/// Receives a callback for every entry removed from the cache.
///
/// Called synchronously on the thread that performed the removal, after the
/// cache lock is released. Overwriting a key with `set` is not a removal.
pub trait EvictionObserver: Send + Sync {
    fn on_evict(&self, key: &str, reason: EvictionReason);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_names() {
        assert_eq!(EvictionReason::Capacity.as_str(), "capacity");
        assert_eq!(
            serde_json::to_value(EvictionReason::Erased).unwrap(),
            "erased"
        );
        assert_eq!(EvictionReason::Expired.audit_action(), AuditAction::Expire);
        assert_eq!(EvictionReason::Capacity.audit_action(), AuditAction::Evict);
    }
}
