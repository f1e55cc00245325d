//! Audit Module
//!
//! Collaborator seams: an optional audit sink receiving one event per cache
//! operation, and an optional observer told about every removed entry.
//! Both are invoked after the cache lock has been released.

mod event;
mod observer;
mod sink;

pub use event::{AuditAction, AuditEvent, AuditEventType, RESOURCE_TYPE};
pub use observer::{EvictionObserver, EvictionReason};
pub use sink::{AuditSink, TracingAuditSink};
