//! Expiry Sweep Task
//!
//! Expired entries are already invisible to readers; the sweep reclaims the
//! memory of entries nobody asks for again.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::AnchorKeyCache;

/// Spawns a background task that periodically purges expired anchor entries.
///
/// # Arguments
/// * `cache` - shared anchor cache
/// * `cleanup_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, aborted during graceful shutdown.
pub fn spawn_cleanup_task(
    cache: Arc<dyn AnchorKeyCache>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting expiry sweep task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.purge_expired().await;

            if removed > 0 {
                info!("Expiry sweep: removed {} expired anchors", removed);
            } else {
                debug!("Expiry sweep: no expired anchors found");
            }
        }
    })
}
