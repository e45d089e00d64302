//! Anchor Key Cache Port
//!
//! The contract the HTTP layer and background tasks depend on.

use async_trait::async_trait;

use crate::cache::CacheStats;
use crate::error::Result;

/// Maps opaque anchor keys to sequential anchor numbers.
#[async_trait]
pub trait AnchorKeyCache: Send + Sync {
    /// Whether `anchor_number` holds a live entry. Does not slide expiration.
    async fn contains(&self, anchor_number: i64) -> bool;

    /// Anchor key stored under `anchor_number`, or `ShareError::NotFound`.
    async fn get_anchor_key(&self, anchor_number: i64) -> Result<String>;

    /// The most recently stored anchor key, if it has not expired.
    async fn get_last_anchor_key(&self) -> Option<String>;

    /// Stores `anchor_key` and returns the anchor number assigned to it.
    async fn set_anchor_key(&self, anchor_key: String) -> i64;

    /// Drops expired entries and returns how many were removed.
    async fn purge_expired(&self) -> usize;

    /// Snapshot of lookup, expiry and issue counters.
    async fn stats(&self) -> CacheStats;
}
