//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Expiry sweep: removes anchor entries whose sliding window has elapsed

mod cleanup;

pub use cleanup::spawn_cleanup_task;
