//! Expansion coordinator
//!
//! Provides [`ExpansionCoordinator`], which partitions alias pairs across a
//! fixed worker pool, runs every worker and joins them before returning.

use crate::error::ExpansionError;
use crate::partition::chunk_ranges;
use crate::store::SharedResultStore;
use crate::worker::{AliasExpansionWorker, PeerVisibility, WorkerReport};
use aliasmap_path::{AliasPair, Haystack};
use parking_lot::Mutex;
use rayon::ThreadPoolBuilder;
use tracing::{debug, info};

/// Fork-join driver for one expansion pass
///
/// Launches one worker per chunk on a pool sized to the chunk count, and
/// waits for all of them. There is no partial-result path: the pass either
/// completes or the pool could not be started.
#[derive(Debug, Clone, Copy)]
pub struct ExpansionCoordinator {
    workers: usize,
}

/// Outcome of one pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassReport {
    /// Chunks launched (one worker each)
    pub chunks: usize,

    /// Pairs appended across all workers
    pub appended: usize,

    /// Per-worker reports, by chunk index
    pub workers: Vec<WorkerReport>,
}

impl ExpansionCoordinator {
    /// Create coordinator for `workers` workers
    ///
    /// Zero is accepted and treated as a single worker.
    #[inline]
    #[must_use]
    pub fn new(workers: usize) -> Self {
        Self { workers }
    }

    /// Requested worker count
    #[inline]
    #[must_use]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Worker count actually used for `aliases` alias pairs
    ///
    /// Zero, or more workers than alias pairs, clamps to one.
    #[inline]
    #[must_use]
    pub fn effective_workers(&self, aliases: usize) -> usize {
        if self.workers == 0 || self.workers > aliases {
            1
        } else {
            self.workers
        }
    }

    /// Run one pass of `aliases` over `haystacks`, appending into `store`
    ///
    /// # Errors
    /// Returns [`ExpansionError::WorkerPool`] if the worker threads cannot be
    /// spawned.
    pub fn run<H: Haystack + Sync>(
        &self,
        aliases: &[AliasPair],
        haystacks: &[H],
        store: &SharedResultStore,
        visibility: PeerVisibility,
    ) -> Result<PassReport, ExpansionError> {
        let ranges = chunk_ranges(aliases.len(), self.workers);
        if ranges.is_empty() {
            debug!("no alias pairs, skipping pass");
            return Ok(PassReport::default());
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(ranges.len())
            .thread_name(|i| format!("aliasmap-worker-{i}"))
            .build()?;

        let reports = Mutex::new(Vec::with_capacity(ranges.len()));
        pool.scope(|scope| {
            let reports = &reports;
            for (index, range) in ranges.iter().cloned().enumerate() {
                let chunk = &aliases[range];
                scope.spawn(move |_| {
                    let report = AliasExpansionWorker::new(index, chunk, haystacks, store)
                        .with_visibility(visibility)
                        .run();
                    reports.lock().push(report);
                });
            }
        });

        let mut workers = reports.into_inner();
        workers.sort_by_key(|report| report.index);
        let appended = workers.iter().map(|report| report.appended).sum();

        info!(
            chunks = ranges.len(),
            aliases = aliases.len(),
            haystacks = haystacks.len(),
            appended,
            "expansion pass complete"
        );

        Ok(PassReport {
            chunks: ranges.len(),
            appended,
            workers,
        })
    }
}
