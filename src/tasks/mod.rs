//! Background Tasks Module
//!
//! Contains background tasks callers may opt into.
//!
//! # Tasks
//! - TTL Cleanup: Removes expired cache entries at configured intervals

mod cleanup;

pub use cleanup::{spawn_cleanup_task, spawn_cleanup_task_every, spawn_configured_cleanup};
