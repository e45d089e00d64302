//! In-Memory Anchor Cache
//!
//! Shares an [`AnchorStore`] between request handlers behind `Arc<RwLock<>>`.
//! Numbering and insertion happen under one write guard, so two concurrent
//! uploads can never be handed the same anchor number.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{AnchorKeyCache, AnchorStore, CacheStats};
use crate::error::Result;

/// Process-lifetime anchor cache. Cloning yields another handle to the same store.
#[derive(Debug, Clone)]
pub struct MemoryAnchorCache {
    store: Arc<RwLock<AnchorStore>>,
}

impl MemoryAnchorCache {
    pub fn new(ttl: Duration) -> Self {
        Self::from_store(AnchorStore::new(ttl))
    }

    pub fn from_store(store: AnchorStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

#[async_trait]
impl AnchorKeyCache for MemoryAnchorCache {
    async fn contains(&self, anchor_number: i64) -> bool {
        self.store.read().await.contains(anchor_number)
    }

    async fn get_anchor_key(&self, anchor_number: i64) -> Result<String> {
        // Write lock: a hit slides the expiry deadline
        self.store.write().await.get(anchor_number)
    }

    async fn get_last_anchor_key(&self) -> Option<String> {
        self.store.write().await.get_last()
    }

    async fn set_anchor_key(&self, anchor_key: String) -> i64 {
        let number = self.store.write().await.set(anchor_key);
        debug!(anchor_number = number, "Stored anchor key");
        number
    }

    async fn purge_expired(&self) -> usize {
        self.store.write().await.purge_expired()
    }

    async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }
}
