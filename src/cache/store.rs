//! Request Cache Module
//!
//! Insertion-ordered exact-match cache over generation requests, capped at a
//! fixed capacity with oldest-first eviction. Persists its full contents
//! through the injected snapshot store after every insert; persistence
//! failures are logged and the in-memory cache stays authoritative.

use std::collections::VecDeque;

use tracing::{debug, info, warn};

use crate::cache::{CacheEntry, CacheStats, SnapshotStore, DEFAULT_CAPACITY};
use crate::models::GenerateRequest;

// == Request Cache ==
/// Exact-match result cache for generation requests.
pub struct RequestCache {
    /// Cached results, oldest at the front
    entries: VecDeque<CacheEntry>,
    /// Maximum number of entries retained
    capacity: usize,
    /// Performance statistics
    stats: CacheStats,
    /// Injected persistence port
    snapshot: Box<dyn SnapshotStore>,
}

impl RequestCache {
    // == Constructor ==
    /// Creates an empty cache with the given capacity and snapshot store.
    pub fn new(capacity: usize, snapshot: Box<dyn SnapshotStore>) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
            stats: CacheStats::new(),
            snapshot,
        }
    }

    /// Creates a cache with the default capacity.
    pub fn with_default_capacity(snapshot: Box<dyn SnapshotStore>) -> Self {
        Self::new(DEFAULT_CAPACITY, snapshot)
    }

    // == Restore ==
    /// Restores the persisted snapshot wholesale.
    ///
    /// An oversized snapshot keeps only its newest `capacity` entries. A
    /// missing or unreadable snapshot leaves the cache empty.
    pub fn restore(&mut self) {
        match self.snapshot.load() {
            Ok(Some(mut entries)) => {
                if entries.len() > self.capacity {
                    entries.drain(..entries.len() - self.capacity);
                }
                info!("Restored {} cached results from snapshot", entries.len());
                self.entries = entries.into();
                self.stats.set_entries(self.entries.len());
            }
            Ok(None) => {
                debug!("No cache snapshot found, starting empty");
            }
            Err(err) => {
                warn!("Failed to restore cache snapshot, starting empty: {:#}", err);
            }
        }
    }

    // == Lookup ==
    /// Scans entries in insertion order for an exact key match.
    ///
    /// Returns the stored result of the first matching entry, or None when
    /// every key differs in at least one field.
    pub fn lookup(&mut self, request: &GenerateRequest) -> Option<String> {
        let key = request.cache_key();

        if let Some(entry) = self.entries.iter().find(|entry| entry.key() == key) {
            let result = entry.result.clone();
            self.stats.record_hit();
            debug!(entry_id = %entry.id, "Cache hit");
            Some(result)
        } else {
            self.stats.record_miss();
            None
        }
    }

    // == Record ==
    /// Appends a freshly generated result, evicting the oldest entries
    /// beyond capacity, then persists the full snapshot.
    pub fn record(&mut self, request: &GenerateRequest, result: String) {
        let entry = CacheEntry::new(request, result);
        self.entries.push_back(entry);

        while self.entries.len() > self.capacity {
            self.entries.pop_front();
            self.stats.record_eviction();
        }

        self.stats.set_entries(self.entries.len());
        self.persist();
    }

    // == Clear ==
    /// Removes all entries and the persisted snapshot.
    ///
    /// Returns the number of entries removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        self.stats.set_entries(0);

        if let Err(err) = self.snapshot.clear() {
            warn!("Failed to remove cache snapshot: {:#}", err);
        }

        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of cached results.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Persist ==
    /// Saves the full cache contents through the snapshot store.
    ///
    /// Storage failure is non-fatal; the in-memory cache remains usable.
    fn persist(&self) {
        let entries: Vec<CacheEntry> = self.entries.iter().cloned().collect();
        if let Err(err) = self.snapshot.save(&entries) {
            warn!("Failed to persist cache snapshot: {:#}", err);
        }
    }
}

impl std::fmt::Debug for RequestCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestCache")
            .field("entries", &self.entries.len())
            .field("capacity", &self.capacity)
            .field("stats", &self.stats)
            .finish()
    }
}
