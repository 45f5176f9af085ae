//! Shared result store
//!
//! Provides [`SharedResultStore`], the append-only sequence of
//! [`DiscoveredPair`] entries that expansion workers read and grow
//! concurrently.

use aliasmap_path::DiscoveredPair;
use parking_lot::RwLock;

/// Append-only, multi-reader/single-writer collection of discovered pairs
///
/// Any number of workers may hold a read view at once; an append excludes
/// every reader and every other writer for its duration. Entries are never
/// removed or rewritten, so the length is non-decreasing.
///
/// # Consistency
/// [`snapshot`](Self::snapshot) is approximate: it reflects every append that
/// completed before the read lock was taken and nothing after. Batches from
/// different workers interleave in lock-acquisition order, which is
/// unspecified.
#[derive(Debug, Default)]
pub struct SharedResultStore {
    entries: RwLock<Vec<DiscoveredPair>>,
}

impl SharedResultStore {
    /// Create empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Point-in-time copy of the current contents
    ///
    /// May lag concurrent appends; the copy is never re-validated.
    #[must_use]
    pub fn snapshot(&self) -> Vec<DiscoveredPair> {
        self.entries.read().clone()
    }

    /// Append a batch under one exclusive write
    ///
    /// Returns the number of entries appended. An empty batch takes no lock.
    pub fn append(&self, batch: Vec<DiscoveredPair>) -> usize {
        if batch.is_empty() {
            return 0;
        }
        let count = batch.len();
        self.entries.write().extend(batch);
        count
    }

    /// Current number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if no entries have been appended
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Final contents, once every worker has joined
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> Vec<DiscoveredPair> {
        self.entries.into_inner()
    }
}
