//! Shared Cache Handle
//!
//! `DecryptionCache` is the instance callers hold. It serializes every
//! operation on one mutex and reports to the audit sink and eviction
//! observer only after the guard has been dropped.

use std::fmt::{self, Display};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::audit::{
    AuditAction, AuditEvent, AuditEventType, AuditSink, EvictionObserver, EvictionReason,
};
use crate::cache::{keys, CacheStore, Lookup};
use crate::config::CacheConfig;
use crate::error::Result;
use crate::models::{CacheStatsSnapshot, EntryMetadata};

/// Scope recorded for operations spanning the whole cache.
const ALL_ENTRIES: &str = "*";

// == Decryption Cache ==
/// Process-wide cache of decrypted field values.
///
/// Cloning yields another handle to the same entries. Attach the audit sink
/// and observer before handing clones out; handles cloned earlier keep the
/// collaborators they were created with.
#[derive(Clone)]
pub struct DecryptionCache {
    store: Arc<Mutex<CacheStore>>,
    config: CacheConfig,
    audit: Option<Arc<dyn AuditSink>>,
    observer: Option<Arc<dyn EvictionObserver>>,
}

impl DecryptionCache {
    // == Constructors ==
    /// Creates a cache from validated configuration.
    pub fn new(config: CacheConfig) -> Result<Self> {
        config.validate()?;
        let store = CacheStore::from_config(&config);
        debug!(
            "Decryption cache created: max_size={}, default_ttl={}s, reset_age_on_read={}",
            config.max_size, config.default_ttl, config.reset_age_on_read
        );
        Ok(Self {
            store: Arc::new(Mutex::new(store)),
            config,
            audit: None,
            observer: None,
        })
    }

    /// Attaches an audit sink.
    pub fn with_audit_sink(mut self, sink: Arc<dyn AuditSink>) -> Self {
        self.audit = Some(sink);
        self
    }

    /// Attaches an eviction observer.
    pub fn with_observer(mut self, observer: Arc<dyn EvictionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    // == Cache Engine ==
    /// Looks up a decrypted value.
    ///
    /// Unknown and expired keys both return `None`; an expired entry is
    /// removed on discovery.
    pub fn get(&self, key: &str) -> Option<String> {
        let lookup = self.store.lock().get(key);

        match lookup {
            Lookup::Hit(value) => {
                self.emit(AuditEventType::Hit, AuditAction::Get, key, || json!({}));
                Some(value)
            }
            Lookup::Missing => {
                self.emit(AuditEventType::Miss, AuditAction::Get, key, || {
                    json!({ "expired": false })
                });
                None
            }
            Lookup::Expired => {
                self.notify_observer(key, EvictionReason::Expired);
                self.emit(AuditEventType::Miss, AuditAction::Get, key, || {
                    json!({ "expired": true })
                });
                None
            }
        }
    }

    /// Caches a decrypted value.
    ///
    /// `ttl` overrides the configured default; a zero TTL makes the entry
    /// expire on its next access.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>, ttl: Option<Duration>) {
        let key = key.into();
        let value = value.into();
        let size_bytes = value.len();
        let ttl_seconds = ttl
            .unwrap_or(self.config.default_ttl_duration())
            .as_secs_f64();

        let outcome = self.store.lock().set(key.clone(), value, ttl);

        if let Some(evicted) = outcome.evicted.as_deref() {
            debug!("Evicted least recently used entry {}", evicted);
            self.notify_observer(evicted, EvictionReason::Capacity);
            self.emit(AuditEventType::Evict, AuditAction::Evict, evicted, || {
                json!({ "reason": EvictionReason::Capacity })
            });
        }

        self.emit(AuditEventType::Set, AuditAction::Set, &key, || {
            json!({
                "replaced": outcome.replaced,
                "ttl_seconds": ttl_seconds,
                "size_bytes": size_bytes,
            })
        });
    }

    /// Sweeps lapsed entries without waiting for a read.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&self) -> usize {
        let removed = self.store.lock().cleanup_expired();
        if !removed.is_empty() {
            info!("TTL cleanup: removed {} expired entries", removed.len());
            self.finish_removal(
                AuditEventType::Evict,
                ALL_ENTRIES,
                &removed,
                EvictionReason::Expired,
            );
        }
        removed.len()
    }

    // == Invalidation ==
    /// Drops a single key. Returns true if it was cached.
    pub fn invalidate(&self, key: &str) -> bool {
        let removed = self.store.lock().remove(key);
        if removed {
            self.finish_removal(
                AuditEventType::Evict,
                key,
                &[key.to_string()],
                EvictionReason::Invalidated,
            );
        }
        removed
    }

    /// Drops every field cached for one entity row (`<entity_type>:<entity_id>:*`).
    ///
    /// Call after updating the row so stale plaintext is never served.
    pub fn invalidate_entity(&self, entity_type: &str, entity_id: impl Display) -> usize {
        let prefix = keys::entity_prefix(entity_type, entity_id);
        let removed = self
            .store
            .lock()
            .remove_where(|key| key.starts_with(&prefix));

        debug!("Invalidated {} entries under {}", removed.len(), prefix);
        self.finish_removal(
            AuditEventType::Evict,
            &prefix,
            &removed,
            EvictionReason::Invalidated,
        );
        removed.len()
    }

    /// Drops every key of one entity type (`<entity_type>:*`), e.g. after a
    /// bulk delete.
    pub fn invalidate_entity_type(&self, entity_type: &str) -> usize {
        let prefix = keys::entity_type_prefix(entity_type);
        let removed = self
            .store
            .lock()
            .remove_where(|key| key.starts_with(&prefix));

        debug!("Invalidated {} entries under {}", removed.len(), prefix);
        self.finish_removal(
            AuditEventType::Evict,
            &prefix,
            &removed,
            EvictionReason::Invalidated,
        );
        removed.len()
    }

    // == Compliance ==
    /// Erases every entry embedding `user:<subject_id>`.
    ///
    /// Succeeds with 0 when nothing matched. Fails only for an empty, blank
    /// or colon-containing subject id.
    pub fn clear_user_data(&self, subject_id: &str) -> Result<usize> {
        keys::validate_subject_id(subject_id)?;

        let removed = self
            .store
            .lock()
            .remove_where(|key| keys::matches_subject(key, subject_id));

        info!("Erased {} cached entries for a data subject", removed.len());
        debug!("Erased entries under {}", keys::subject_scope(subject_id));
        self.finish_removal(
            AuditEventType::Clear,
            &keys::subject_scope(subject_id),
            &removed,
            EvictionReason::Erased,
        );
        Ok(removed.len())
    }

    /// Lists metadata for every entry embedding `user:<subject_id>`.
    ///
    /// The decrypted values are never part of the report. Reading the report
    /// does not count as an access.
    pub fn get_user_cache_report(&self, subject_id: &str) -> Result<Vec<EntryMetadata>> {
        keys::validate_subject_id(subject_id)?;

        let report = self
            .store
            .lock()
            .metadata_where(|key| keys::matches_subject(key, subject_id));

        self.emit(
            AuditEventType::Report,
            AuditAction::Report,
            &keys::subject_scope(subject_id),
            || json!({ "entries": report.len() }),
        );
        Ok(report)
    }

    // == Observability ==
    /// Current occupancy and counters.
    pub fn get_stats(&self) -> CacheStatsSnapshot {
        self.store.lock().snapshot()
    }

    /// Drops every entry and zeroes all counters.
    ///
    /// `reason` is only forwarded to the audit sink. Returns the number of
    /// entries that were present.
    pub fn clear(&self, reason: &str) -> usize {
        let removed = self.store.lock().clear();

        info!("Cache cleared ({}): removed {} entries", reason, removed.len());
        self.notify_all(&removed, EvictionReason::Cleared);
        self.emit(AuditEventType::Clear, AuditAction::Clear, ALL_ENTRIES, || {
            json!({ "reason": reason, "removed": removed.len() })
        });
        removed.len()
    }

    /// True if a live entry is cached under `key`. Not counted as a read.
    pub fn contains(&self, key: &str) -> bool {
        self.store.lock().contains(key)
    }

    /// Number of resident entries, including lapsed ones not yet swept.
    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }

    // == Collaborator Plumbing ==
    fn emit<F>(&self, event_type: AuditEventType, action: AuditAction, resource_id: &str, details: F)
    where
        F: FnOnce() -> Value,
    {
        if let Some(sink) = &self.audit {
            sink.record(AuditEvent::new(event_type, action, resource_id, details()));
        }
    }

    fn notify_observer(&self, key: &str, reason: EvictionReason) {
        if let Some(observer) = &self.observer {
            observer.on_evict(key, reason);
        }
    }

    fn notify_all(&self, keys: &[String], reason: EvictionReason) {
        if let Some(observer) = &self.observer {
            for key in keys {
                observer.on_evict(key, reason);
            }
        }
    }

    /// Observer callbacks for each key plus one audit event for the operation.
    fn finish_removal(
        &self,
        event_type: AuditEventType,
        scope: &str,
        removed: &[String],
        reason: EvictionReason,
    ) {
        self.notify_all(removed, reason);
        self.emit(event_type, reason.audit_action(), scope, || {
            json!({ "reason": reason, "removed": removed.len() })
        });
    }
}

impl Default for DecryptionCache {
    fn default() -> Self {
        let config = CacheConfig::default();
        Self {
            store: Arc::new(Mutex::new(CacheStore::from_config(&config))),
            config,
            audit: None,
            observer: None,
        }
    }
}

impl fmt::Debug for DecryptionCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecryptionCache")
            .field("config", &self.config)
            .field("audit", &self.audit.is_some())
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
