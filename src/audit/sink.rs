//! Audit sinks

use tracing::{debug, info};

use super::{AuditEvent, AuditEventType};

/// Destination for cache audit events.
///
/// Implementations should return quickly; persistence belongs to the
/// collaborator behind the sink, not to the cache.
pub trait AuditSink: Send + Sync {
    fn record(&self, event: AuditEvent);
}

// == Tracing Sink ==
/// Writes audit events as structured `tracing` events.
///
/// Per-key events (hit, miss, set, evict) are logged at debug level with
/// the key. Bulk clears and reports are logged at info without their
/// resource id, since a subject scope names the subject.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&self, event: AuditEvent) {
        match event.event_type {
            AuditEventType::Hit
            | AuditEventType::Miss
            | AuditEventType::Set
            | AuditEventType::Evict => debug!(
                event_type = %event.event_type,
                resource_type = event.resource_type,
                resource_id = %event.resource_id,
                action = %event.action,
                success = event.success,
                details = %event.details,
                "cache audit"
            ),
            AuditEventType::Clear | AuditEventType::Report => info!(
                event_type = %event.event_type,
                resource_type = event.resource_type,
                action = %event.action,
                success = event.success,
                details = %event.details,
                "cache audit"
            ),
        }
    }
}
