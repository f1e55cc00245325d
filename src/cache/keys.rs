//! Key Convention Module
//!
//! Keys are opaque strings to the engine. Invalidation and erasure rely on
//! callers building them as colon-separated segments:
//!
//! - entity-scoped: `<entity>:<entity_id>:<field>`, e.g. `cases:123:title`
//! - subject-scoped: `user:<user_id>:<field>`, possibly embedded further in,
//!   e.g. `cases:456:user:123:note`
//!
//! Entity names containing `:` break prefix matching; the helpers here do not
//! guard against that.

use std::fmt::Display;

use crate::error::{CacheError, Result};

/// Separator between key segments.
pub const KEY_SEPARATOR: char = ':';

/// Segment that introduces a data-subject identifier.
pub const SUBJECT_NAMESPACE: &str = "user";

/// Builds `<entity>:<entity_id>:<field>`.
pub fn entity_key(entity_type: &str, entity_id: impl Display, field: &str) -> String {
    format!("{entity_type}{KEY_SEPARATOR}{entity_id}{KEY_SEPARATOR}{field}")
}

/// Builds `user:<subject_id>:<field>`.
pub fn subject_key(subject_id: &str, field: &str) -> String {
    format!("{SUBJECT_NAMESPACE}{KEY_SEPARATOR}{subject_id}{KEY_SEPARATOR}{field}")
}

/// Prefix shared by every field of one entity row.
pub fn entity_prefix(entity_type: &str, entity_id: impl Display) -> String {
    format!("{entity_type}{KEY_SEPARATOR}{entity_id}{KEY_SEPARATOR}")
}

/// Prefix shared by every key of one entity type.
pub fn entity_type_prefix(entity_type: &str) -> String {
    format!("{entity_type}{KEY_SEPARATOR}")
}

/// Scope string naming one data subject, e.g. `user:42`.
pub fn subject_scope(subject_id: &str) -> String {
    format!("{SUBJECT_NAMESPACE}{KEY_SEPARATOR}{subject_id}")
}

/// True when `user` followed by `subject_id` appear as consecutive segments
/// anywhere in `key`.
///
/// Matching is per segment, so `user:42` does not match `user:421:x` or
/// `superuser:42:x`.
pub fn matches_subject(key: &str, subject_id: &str) -> bool {
    let mut segments = key.split(KEY_SEPARATOR).peekable();
    while let Some(segment) = segments.next() {
        if segment == SUBJECT_NAMESPACE && segments.peek() == Some(&subject_id) {
            return true;
        }
    }
    false
}

/// Rejects subject identifiers that would match nothing meaningful or
/// spill across segment boundaries.
pub fn validate_subject_id(subject_id: &str) -> Result<()> {
    if subject_id.trim().is_empty() {
        return Err(CacheError::InvalidSubject(
            "subject id cannot be empty".to_string(),
        ));
    }
    if subject_id.contains(KEY_SEPARATOR) {
        return Err(CacheError::InvalidSubject(format!(
            "subject id cannot contain '{KEY_SEPARATOR}'"
        )));
    }
    Ok(())
}
