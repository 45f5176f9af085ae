//! Alias expansion worker
//!
//! Provides [`AliasExpansionWorker`], which applies one chunk of alias pairs
//! to the static haystacks and to a live snapshot of peer results.

use crate::store::SharedResultStore;
use aliasmap_path::{AliasPair, BoundaryMatcher, DiscoveredPair, Haystack};
use tracing::{debug, trace};

/// Whether a worker folds peer results into its scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PeerVisibility {
    /// Snapshot the store before every alias and scan the snapshot too
    #[default]
    LiveSnapshots,

    /// Scan only the static haystacks; the store is write-only
    Isolated,
}

/// Outcome of one worker run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkerReport {
    /// Chunk index assigned by the coordinator
    pub index: usize,

    /// Alias pairs processed
    pub aliases: usize,

    /// Pairs appended to the store
    pub appended: usize,
}

/// Processes one chunk of alias pairs
///
/// For each alias, in chunk order:
/// 1. Snapshot the store (when peers are visible)
/// 2. Rewrite every static haystack the alias matches
/// 3. Rewrite every snapshot entry the alias matches, carrying its
///    original value through unchanged
/// 4. Append the new pairs in one batched write
///
/// The snapshot may miss entries appended by peers moments later, so how much
/// compounding happens depends on scheduling. Static inputs are never mutated.
#[derive(Debug)]
pub struct AliasExpansionWorker<'a, H> {
    index: usize,
    aliases: &'a [AliasPair],
    haystacks: &'a [H],
    store: &'a SharedResultStore,
    visibility: PeerVisibility,
}

impl<'a, H: Haystack> AliasExpansionWorker<'a, H> {
    /// Create worker over one alias chunk
    #[inline]
    #[must_use]
    pub fn new(
        index: usize,
        aliases: &'a [AliasPair],
        haystacks: &'a [H],
        store: &'a SharedResultStore,
    ) -> Self {
        Self {
            index,
            aliases,
            haystacks,
            store,
            visibility: PeerVisibility::default(),
        }
    }

    /// With peer visibility
    #[inline]
    #[must_use]
    pub fn with_visibility(mut self, visibility: PeerVisibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Run the chunk to completion
    pub fn run(&self) -> WorkerReport {
        let mut appended = 0;

        for alias in self.aliases {
            let snapshot = match self.visibility {
                PeerVisibility::LiveSnapshots => self.store.snapshot(),
                PeerVisibility::Isolated => Vec::new(),
            };
            trace!(worker = self.index, snapshot = snapshot.len(), %alias, "scanning");

            let mut batch = Vec::new();
            collect_matches(alias, self.haystacks, &mut batch);
            collect_matches(alias, &snapshot, &mut batch);

            appended += self.store.append(batch);
        }

        debug!(
            worker = self.index,
            aliases = self.aliases.len(),
            appended,
            "worker finished"
        );

        WorkerReport {
            index: self.index,
            aliases: self.aliases.len(),
            appended,
        }
    }
}

/// Rewrite every haystack `alias` matches into `out`
pub fn collect_matches<T: Haystack>(
    alias: &AliasPair,
    haystacks: &[T],
    out: &mut Vec<DiscoveredPair>,
) {
    out.extend(haystacks.iter().filter_map(|haystack| {
        BoundaryMatcher::rewrite(haystack.key(), alias)
            .map(|key| DiscoveredPair::new(key, haystack.value()))
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use aliasmap_test_utils::{aliases, keys, pairs_of};
    use pretty_assertions::assert_eq;

    #[test]
    fn worker_rewrites_original_keys() {
        let store = SharedResultStore::new();
        let aliases = aliases(&[("a", "x")]);
        let keys = keys(&["a.b.c", "b.a", "ab.c"]);

        let report = AliasExpansionWorker::new(0, &aliases, &keys, &store).run();

        assert_eq!(report.appended, 2);
        assert_eq!(
            pairs_of(&store.into_inner()),
            vec![("x.b.c", "a.b.c"), ("b.x", "b.a")]
        );
    }

    #[test]
    fn worker_compounds_on_earlier_results() {
        let store = SharedResultStore::new();
        let aliases = aliases(&[("y", "z"), ("z", "w")]);
        let keys = keys(&["x.y"]);

        AliasExpansionWorker::new(0, &aliases, &keys, &store).run();

        assert_eq!(
            pairs_of(&store.into_inner()),
            vec![("x.z", "x.y"), ("x.w", "x.y")]
        );
    }

    #[test]
    fn worker_scans_entries_left_by_peers() {
        let store = SharedResultStore::new();
        store.append(vec![DiscoveredPair::new("p.q", "orig.q")]);
        let aliases = aliases(&[("p", "r")]);
        let keys = keys(&[]);

        AliasExpansionWorker::new(3, &aliases, &keys, &store).run();

        assert_eq!(
            pairs_of(&store.into_inner()),
            vec![("p.q", "orig.q"), ("r.q", "orig.q")]
        );
    }

    #[test]
    fn worker_isolated_ignores_store_contents() {
        let store = SharedResultStore::new();
        store.append(vec![DiscoveredPair::new("p.q", "orig.q")]);
        let aliases = aliases(&[("p", "r")]);
        let keys = keys(&[]);

        let report = AliasExpansionWorker::new(0, &aliases, &keys, &store)
            .with_visibility(PeerVisibility::Isolated)
            .run();

        assert_eq!(report.appended, 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn worker_unmatched_alias_contributes_nothing() {
        let store = SharedResultStore::new();
        let aliases = aliases(&[("nothing", "here")]);
        let keys = keys(&["a.b"]);

        let report = AliasExpansionWorker::new(0, &aliases, &keys, &store).run();

        assert_eq!(report, WorkerReport { index: 0, aliases: 1, appended: 0 });
        assert!(store.is_empty());
    }

    #[test]
    fn worker_does_not_deduplicate() {
        let store = SharedResultStore::new();
        let aliases = aliases(&[("a", "x"), ("a", "x")]);
        let keys = keys(&["a.b"]);

        AliasExpansionWorker::new(0, &aliases, &keys, &store).run();

        assert_eq!(
            pairs_of(&store.into_inner()),
            vec![("x.b", "a.b"), ("x.b", "a.b")]
        );
    }
}
