//! Anchor Entry Module
//!
//! Defines a single stored anchor key with its sliding expiration deadline.

use std::time::{Duration, Instant};

use crate::cache::MAX_ANCHOR_TTL;

// == Anchor Entry ==
/// Represents a stored anchor key and its expiry metadata.
#[derive(Debug, Clone)]
pub struct AnchorEntry {
    /// The opaque anchor key
    pub anchor_key: String,
    /// Last read or write that touched this entry
    pub last_access: Instant,
    /// Deadline after which the entry is gone, `last_access + ttl`
    pub expires_at: Instant,
}

impl AnchorEntry {
    // == Constructor ==
    /// Creates a new entry whose window starts at `now`.
    pub fn new(anchor_key: String, ttl: Duration, now: Instant) -> Self {
        Self {
            anchor_key,
            last_access: now,
            expires_at: deadline(now, ttl),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now`.
    ///
    /// Boundary condition: the entry is expired once `now` reaches `expires_at`.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    // == Touch ==
    /// Slides the expiration window so it restarts at `now`.
    ///
    /// Returns how long the entry sat idle since its previous access.
    pub fn touch(&mut self, ttl: Duration, now: Instant) -> Duration {
        let idle = now.saturating_duration_since(self.last_access);
        self.last_access = now;
        self.expires_at = deadline(now, ttl);
        idle
    }
}

/// `now + ttl`, capped at [`MAX_ANCHOR_TTL`] when the sum does not fit in an `Instant`.
fn deadline(now: Instant, ttl: Duration) -> Instant {
    now.checked_add(ttl)
        .or_else(|| now.checked_add(MAX_ANCHOR_TTL))
        .unwrap_or(now)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(48 * 3600);

    #[test]
    fn test_entry_creation() {
        let now = Instant::now();
        let entry = AnchorEntry::new("anchor-key".to_string(), TTL, now);

        assert_eq!(entry.anchor_key, "anchor-key");
        assert_eq!(entry.last_access, now);
        assert_eq!(entry.expires_at, now + TTL);
        assert!(!entry.is_expired_at(now));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = Instant::now();
        let entry = AnchorEntry::new("k".to_string(), TTL, now);

        assert!(!entry.is_expired_at(now + TTL - Duration::from_millis(1)));
        assert!(entry.is_expired_at(now + TTL), "Entry should be expired at boundary");
    }

    #[test]
    fn test_touch_slides_window() {
        let now = Instant::now();
        let mut entry = AnchorEntry::new("k".to_string(), TTL, now);

        let later = now + Duration::from_secs(47 * 3600);
        let idle = entry.touch(TTL, later);

        assert_eq!(idle, Duration::from_secs(47 * 3600));
        // The original deadline has passed but the slid one has not
        assert!(!entry.is_expired_at(now + TTL));
        assert!(entry.is_expired_at(later + TTL));
        assert_eq!(entry.last_access, later);
    }

    #[test]
    fn test_oversized_ttl_does_not_overflow() {
        let now = Instant::now();
        let mut entry = AnchorEntry::new("k".to_string(), Duration::MAX, now);

        assert!(!entry.is_expired_at(now + TTL));
        assert!(entry.expires_at > now);

        entry.touch(Duration::MAX, now + TTL);
        assert!(!entry.is_expired_at(now + TTL + TTL));
    }
}
