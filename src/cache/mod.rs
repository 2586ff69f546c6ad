//! Cache Module
//!
//! Exact-match result caching for generation requests, with FIFO eviction
//! and snapshot persistence through an injected storage port.

mod entry;
mod key;
mod snapshot;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use key::canonical_key;
pub use snapshot::{FileSnapshotStore, NullSnapshotStore, SnapshotStore};
pub use stats::CacheStats;
pub use store::RequestCache;

// == Public Constants ==
/// Default maximum number of cached results
pub const DEFAULT_CAPACITY: usize = 50;
