//! Expansion strategies
//!
//! Defines the [`ExpansionStrategy`] trait and its two implementations:
//!
//! - [`SinglePassStrategy`]: one concurrent pass with live snapshots
//!   (best-effort compounding, no dedup)
//! - [`FixedPointStrategy`]: round-based closure with a barrier between
//!   rounds (deduplicated, bounded by a round limit)

use crate::coordinator::ExpansionCoordinator;
use crate::error::ExpansionError;
use crate::store::SharedResultStore;
use crate::worker::PeerVisibility;
use aliasmap_path::{AliasPair, DiscoveredPair, OriginalKey};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use tracing::{debug, warn};

/// How an expansion strategy derives alias pairs
pub trait ExpansionStrategy: Send + Sync + fmt::Debug {
    /// Strategy name for diagnostics
    fn name(&self) -> &'static str;

    /// Completeness guarantee of the output
    fn completeness(&self) -> Completeness;

    /// Expand `aliases` over `keys` with `workers` workers
    ///
    /// # Errors
    /// Returns [`ExpansionError::WorkerPool`] if the worker pool cannot start.
    fn expand(
        &self,
        aliases: &[AliasPair],
        keys: &[OriginalKey],
        workers: usize,
    ) -> Result<ExpansionOutcome, ExpansionError>;
}

/// Completeness guarantee
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completeness {
    /// Single pass; compounding depends on scheduling
    BestEffort,

    /// Closure computed round by round, up to a round limit
    FixedPoint {
        /// Maximum number of rounds
        max_rounds: usize,
    },
}

/// Result of an expansion run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionOutcome {
    /// Discovered pairs in final store order
    pub pairs: Vec<DiscoveredPair>,

    /// Run statistics
    pub stats: ExpansionStats,
}

/// Expansion run statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpansionStats {
    /// Effective worker count after clamping
    pub workers: usize,

    /// Chunks launched in the widest round
    pub chunks: usize,

    /// Passes run
    pub rounds: usize,

    /// Pairs in the output
    pub discovered: usize,

    /// Whether a round added nothing new (always false for single pass)
    pub converged: bool,
}

/// Strategy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// [`SinglePassStrategy`]
    #[default]
    SinglePass,

    /// [`FixedPointStrategy`]
    FixedPoint,
}

impl StrategyKind {
    /// Canonical name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SinglePass => "single-pass",
            Self::FixedPoint => "fixed-point",
        }
    }

    /// Build the selected strategy
    #[must_use]
    pub fn build(self, max_rounds: usize) -> Box<dyn ExpansionStrategy> {
        match self {
            Self::SinglePass => Box::new(SinglePassStrategy::new()),
            Self::FixedPoint => Box::new(FixedPointStrategy::new(max_rounds)),
        }
    }
}

impl Display for StrategyKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = ExpansionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single-pass" => Ok(Self::SinglePass),
            "fixed-point" => Ok(Self::FixedPoint),
            other => Err(ExpansionError::UnknownStrategy(other.to_string())),
        }
    }
}

/// One concurrent pass with live snapshots
///
/// Every worker snapshots the shared store before each alias, so aliases
/// compound onto whatever peers have already appended. Output is neither
/// deduplicated nor ordered, and a chain of dependent aliases may or may not
/// fully resolve depending on scheduling.
#[derive(Debug, Clone, Copy, Default)]
pub struct SinglePassStrategy;

impl SinglePassStrategy {
    /// Create single pass strategy
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ExpansionStrategy for SinglePassStrategy {
    fn name(&self) -> &'static str {
        "SinglePass"
    }

    fn completeness(&self) -> Completeness {
        Completeness::BestEffort
    }

    fn expand(
        &self,
        aliases: &[AliasPair],
        keys: &[OriginalKey],
        workers: usize,
    ) -> Result<ExpansionOutcome, ExpansionError> {
        let coordinator = ExpansionCoordinator::new(workers);
        let store = SharedResultStore::new();
        let report = coordinator.run(
            aliases,
            keys,
            &store,
            PeerVisibility::LiveSnapshots,
        )?;

        let pairs = store.into_inner();
        let stats = ExpansionStats {
            workers: coordinator.effective_workers(aliases.len()),
            chunks: report.chunks,
            rounds: 1,
            discovered: pairs.len(),
            converged: false,
        };
        Ok(ExpansionOutcome { pairs, stats })
    }
}

/// Round-based closure
///
/// Round 1 applies every alias to the original keys. Each later round
/// applies every alias to the frontier: pairs first discovered in the
/// previous round. Workers within a round are isolated from each other and
/// the coordinator joins them all before merging, so a round only ever sees
/// complete results of the round before it.
///
/// Pairs already discovered are dropped on merge, which keeps cyclic aliases
/// finite. Stops when a round adds nothing or `max_rounds` is reached.
#[derive(Debug, Clone, Copy)]
pub struct FixedPointStrategy {
    max_rounds: usize,
}

impl FixedPointStrategy {
    /// Create fixed point strategy; a limit of zero is raised to one
    #[inline]
    #[must_use]
    pub fn new(max_rounds: usize) -> Self {
        Self {
            max_rounds: max_rounds.max(1),
        }
    }

    /// Round limit
    #[inline]
    #[must_use]
    pub fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    /// Keep first-seen pairs, returning them as the next frontier
    fn merge(
        round: Vec<DiscoveredPair>,
        seen: &mut HashSet<DiscoveredPair>,
        discovered: &mut Vec<DiscoveredPair>,
    ) -> Vec<DiscoveredPair> {
        let frontier: Vec<_> = round
            .into_iter()
            .filter(|pair| seen.insert(pair.clone()))
            .collect();
        discovered.extend(frontier.iter().cloned());
        frontier
    }
}

impl Default for FixedPointStrategy {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MAX_ROUNDS)
    }
}

impl ExpansionStrategy for FixedPointStrategy {
    fn name(&self) -> &'static str {
        "FixedPoint"
    }

    fn completeness(&self) -> Completeness {
        Completeness::FixedPoint {
            max_rounds: self.max_rounds,
        }
    }

    fn expand(
        &self,
        aliases: &[AliasPair],
        keys: &[OriginalKey],
        workers: usize,
    ) -> Result<ExpansionOutcome, ExpansionError> {
        let coordinator = ExpansionCoordinator::new(workers);
        let mut seen = HashSet::new();
        let mut discovered = Vec::new();

        let store = SharedResultStore::new();
        let report = coordinator.run(aliases, keys, &store, PeerVisibility::Isolated)?;
        let mut chunks = report.chunks;
        let mut frontier = Self::merge(store.into_inner(), &mut seen, &mut discovered);
        let mut rounds = 1;
        debug!(round = rounds, added = frontier.len(), "round merged");

        while !frontier.is_empty() && rounds < self.max_rounds {
            let store = SharedResultStore::new();
            let report = coordinator.run(aliases, &frontier, &store, PeerVisibility::Isolated)?;
            chunks = chunks.max(report.chunks);
            frontier = Self::merge(store.into_inner(), &mut seen, &mut discovered);
            rounds += 1;
            debug!(round = rounds, added = frontier.len(), "round merged");
        }

        let converged = frontier.is_empty();
        if !converged {
            warn!(
                max_rounds = self.max_rounds,
                pending = frontier.len(),
                "round limit reached before closure"
            );
        }

        let stats = ExpansionStats {
            workers: coordinator.effective_workers(aliases.len()),
            chunks,
            rounds,
            discovered: discovered.len(),
            converged,
        };
        Ok(ExpansionOutcome {
            pairs: discovered,
            stats,
        })
    }
}
