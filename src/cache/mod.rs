//! Cache Module
//!
//! In-memory anchor key storage with sequential numbering and sliding expiration.

use std::time::Duration;

mod entry;
mod memory;
mod stats;
mod store;
mod traits;


// Re-export public types
pub use entry::AnchorEntry;
pub use memory::MemoryAnchorCache;
pub use stats::CacheStats;
pub use store::AnchorStore;
pub use traits::AnchorKeyCache;

// == Public Constants ==
/// Maximum accepted anchor key size in bytes
pub const MAX_ANCHOR_KEY_SIZE: usize = 1024 * 1024; // 1 MB

/// Longest accepted sliding expiration window (10 years)
pub const MAX_ANCHOR_TTL: Duration = Duration::from_secs(10 * 365 * 24 * 60 * 60);
