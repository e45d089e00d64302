//! Anchor Share - spatial anchor sharing service
//!
//! Stores opaque anchor keys under short sequential anchor numbers with a
//! sliding expiration, and hands out Spatial Anchors access tokens.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;
pub mod token;

pub use api::AppState;
pub use cache::{AnchorKeyCache, MemoryAnchorCache};
pub use config::Config;
pub use error::{Result, ShareError};
pub use tasks::spawn_cleanup_task;
