//! Snapshot Store Module
//!
//! Storage port for cache persistence. The cache serializes its full
//! contents after every insert and restores them wholesale at startup;
//! storage failures are best-effort and never fail the cache itself.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cache::CacheEntry;

// == Snapshot Store Port ==
/// Persistence port injected into the cache.
pub trait SnapshotStore: Send + Sync {
    /// Loads the persisted snapshot, if any.
    ///
    /// Returns Ok(None) when no snapshot exists.
    fn load(&self) -> Result<Option<Vec<CacheEntry>>>;

    /// Persists the full cache contents.
    fn save(&self, entries: &[CacheEntry]) -> Result<()>;

    /// Removes the persisted snapshot.
    fn clear(&self) -> Result<()>;
}

// == File Snapshot Store ==
/// JSON-file-backed snapshot store.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    /// Creates a store persisting to the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> Result<Option<Vec<CacheEntry>>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read snapshot {}", self.path.display()))?;
        let entries = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse snapshot {}", self.path.display()))?;

        Ok(Some(entries))
    }

    fn save(&self, entries: &[CacheEntry]) -> Result<()> {
        let raw = serde_json::to_string(entries).context("failed to serialize snapshot")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("failed to write snapshot {}", self.path.display()))?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("failed to remove snapshot {}", self.path.display()))?;
        }
        Ok(())
    }
}

// == Null Snapshot Store ==
/// No-op store for tests and cache-only operation.
#[derive(Debug, Clone, Default)]
pub struct NullSnapshotStore;

impl SnapshotStore for NullSnapshotStore {
    fn load(&self) -> Result<Option<Vec<CacheEntry>>> {
        Ok(None)
    }

    fn save(&self, _entries: &[CacheEntry]) -> Result<()> {
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        Ok(())
    }
}
