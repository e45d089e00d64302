//! Anchor Store Module
//!
//! Synchronous anchor storage: a HashMap of entries keyed by anchor number,
//! an ordered expiry index for sweeping, and the sequential number counter.
//!
//! Every operation has an `_at` form taking the current `Instant`; the plain
//! forms call it with `Instant::now()`.

use std::collections::{BTreeSet, HashMap};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::cache::{AnchorEntry, CacheStats, MAX_ANCHOR_TTL};
use crate::error::{Result, ShareError};

// == Anchor Store ==
/// Anchor key storage with sequential numbering and sliding expiration.
#[derive(Debug)]
pub struct AnchorStore {
    /// Entries keyed by anchor number
    entries: HashMap<i64, AnchorEntry>,
    /// `(expires_at, anchor_number)` for every entry, ordered by deadline
    expiry: BTreeSet<(Instant, i64)>,
    /// Most recently issued anchor number, -1 before the first insert
    last_number: i64,
    /// Sliding expiration window
    ttl: Duration,
    /// Lookup statistics
    stats: CacheStats,
}

impl AnchorStore {
    // == Constructor ==
    /// Creates an empty store whose entries expire `ttl` after last access.
    ///
    /// `ttl` is capped at [`MAX_ANCHOR_TTL`].
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            expiry: BTreeSet::new(),
            last_number: -1,
            ttl: ttl.min(MAX_ANCHOR_TTL),
            stats: CacheStats::new(),
        }
    }

    // == Set ==
    /// Stores an anchor key under the next sequential number and returns it.
    ///
    /// Numbering starts at 0. After `i64::MAX` the counter restarts at 0 and
    /// overwrites whatever is stored there.
    pub fn set(&mut self, anchor_key: String) -> i64 {
        self.set_at(anchor_key, Instant::now())
    }

    pub fn set_at(&mut self, anchor_key: String, now: Instant) -> i64 {
        if self.last_number == i64::MAX {
            warn!("Anchor number counter exhausted, restarting at 0");
            self.last_number = -1;
        }
        self.last_number += 1;
        let number = self.last_number;

        self.remove_entry(number);

        let entry = AnchorEntry::new(anchor_key, self.ttl, now);
        self.expiry.insert((entry.expires_at, number));
        self.entries.insert(number, entry);

        self.stats.record_issue();
        self.stats.set_total_entries(self.entries.len());
        number
    }

    // == Get ==
    /// Retrieves the anchor key for `number` and slides its window.
    ///
    /// Expired entries are removed and reported as `NotFound`.
    pub fn get(&mut self, number: i64) -> Result<String> {
        self.get_at(number, Instant::now())
    }

    pub fn get_at(&mut self, number: i64, now: Instant) -> Result<String> {
        if self
            .entries
            .get(&number)
            .is_some_and(|entry| entry.is_expired_at(now))
        {
            self.remove_entry(number);
            self.stats.record_expirations(1);
            self.stats.set_total_entries(self.entries.len());
        }

        let ttl = self.ttl;
        match self.entries.get_mut(&number) {
            Some(entry) => {
                let previous = entry.expires_at;
                let idle = entry.touch(ttl, now);
                debug!(
                    anchor_number = number,
                    idle_secs = idle.as_secs(),
                    "Slid anchor expiry"
                );
                self.expiry.remove(&(previous, number));
                self.expiry.insert((entry.expires_at, number));
                self.stats.record_hit();
                Ok(entry.anchor_key.clone())
            }
            None => {
                self.stats.record_miss();
                Err(ShareError::NotFound(number))
            }
        }
    }

    // == Get Last ==
    /// Returns the most recently stored anchor key if it is still live.
    pub fn get_last(&mut self) -> Option<String> {
        self.get_last_at(Instant::now())
    }

    pub fn get_last_at(&mut self, now: Instant) -> Option<String> {
        if self.last_number < 0 {
            return None;
        }
        self.get_at(self.last_number, now).ok()
    }

    // == Contains ==
    /// Existence probe. Does not slide the expiration window.
    pub fn contains(&self, number: i64) -> bool {
        self.contains_at(number, Instant::now())
    }

    pub fn contains_at(&self, number: i64, now: Instant) -> bool {
        self.entries
            .get(&number)
            .is_some_and(|entry| !entry.is_expired_at(now))
    }

    // == Purge Expired ==
    /// Removes every entry whose window has elapsed, returning the count.
    pub fn purge_expired(&mut self) -> usize {
        self.purge_expired_at(Instant::now())
    }

    pub fn purge_expired_at(&mut self, now: Instant) -> usize {
        let mut removed = 0;
        while let Some(&(deadline, number)) = self.expiry.first() {
            if deadline > now {
                break;
            }
            self.expiry.pop_first();
            self.entries.remove(&number);
            removed += 1;
        }

        self.stats.record_expirations(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Sliding expiration window.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Number of entries held, including expired ones not yet swept.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn remove_entry(&mut self, number: i64) {
        if let Some(previous) = self.entries.remove(&number) {
            self.expiry.remove(&(previous.expires_at, number));
        }
    }
}
