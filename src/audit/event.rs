//! Audit event records

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Resource type stamped on every cache audit event.
pub const RESOURCE_TYPE: &str = "cache";

// == Event Type ==
/// Category of an audit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AuditEventType {
    #[serde(rename = "cache.hit")]
    Hit,
    #[serde(rename = "cache.miss")]
    Miss,
    #[serde(rename = "cache.set")]
    Set,
    #[serde(rename = "cache.evict")]
    Evict,
    #[serde(rename = "cache.clear")]
    Clear,
    #[serde(rename = "cache.report")]
    Report,
}

impl AuditEventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditEventType::Hit => "cache.hit",
            AuditEventType::Miss => "cache.miss",
            AuditEventType::Set => "cache.set",
            AuditEventType::Evict => "cache.evict",
            AuditEventType::Clear => "cache.clear",
            AuditEventType::Report => "cache.report",
        }
    }
}

impl fmt::Display for AuditEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Action ==
/// Operation that produced the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Get,
    Set,
    Evict,
    Expire,
    Invalidate,
    Erase,
    Clear,
    Report,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Get => "get",
            AuditAction::Set => "set",
            AuditAction::Evict => "evict",
            AuditAction::Expire => "expire",
            AuditAction::Invalidate => "invalidate",
            AuditAction::Erase => "erase",
            AuditAction::Clear => "clear",
            AuditAction::Report => "report",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Audit Event ==
/// One structured audit record. Never carries a decrypted value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditEvent {
    pub event_type: AuditEventType,
    /// Always [`RESOURCE_TYPE`]
    pub resource_type: &'static str,
    /// Cache key, or the scope of a bulk operation
    pub resource_id: String,
    pub action: AuditAction,
    pub success: bool,
    pub details: Value,
    pub timestamp: DateTime<Utc>,
}

impl AuditEvent {
    pub fn new(
        event_type: AuditEventType,
        action: AuditAction,
        resource_id: impl Into<String>,
        details: Value,
    ) -> Self {
        Self {
            event_type,
            resource_type: RESOURCE_TYPE,
            resource_id: resource_id.into(),
            action,
            success: true,
            details,
            timestamp: Utc::now(),
        }
    }
}
