//! aliasmap Expansion Engine
//!
//! Applies alias pairs to a universe of dotted keys and collects every
//! derived `(expanded_key, original_value)` pair.
//!
//! # Core Concepts
//!
//! - [`SharedResultStore`]: append-only, multi-reader/single-writer results
//! - [`AliasExpansionWorker`]: applies one chunk of aliases, compounding on
//!   a snapshot of peer results
//! - [`ExpansionCoordinator`]: partitions aliases and joins all workers
//! - [`ExpansionStrategy`]: single pass (default) or round-based fixed point
//!
//! # Example
//!
//! ```rust
//! use aliasmap_expansion::{expand, ExpansionConfig};
//! use aliasmap_path::{AliasPair, OriginalKey};
//!
//! let aliases = vec![AliasPair::new("a", "x").unwrap()];
//! let keys = vec![OriginalKey::new("a.b.c")];
//!
//! let outcome = expand(&aliases, &keys, &ExpansionConfig::new().with_workers(1)).unwrap();
//! assert_eq!(outcome.pairs[0].expanded_key(), "x.b.c");
//! assert_eq!(outcome.pairs[0].original_value(), "a.b.c");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod coordinator;
pub mod error;
pub mod partition;
pub mod store;
pub mod strategy;
pub mod worker;

// Re-exports
pub use config::{available_workers, ExpansionConfig, DEFAULT_MAX_ROUNDS};
pub use coordinator::{ExpansionCoordinator, PassReport};
pub use error::ExpansionError;
pub use partition::chunk_ranges;
pub use store::SharedResultStore;
pub use strategy::{
    Completeness, ExpansionOutcome, ExpansionStats, ExpansionStrategy, FixedPointStrategy,
    SinglePassStrategy, StrategyKind,
};
pub use worker::{AliasExpansionWorker, PeerVisibility, WorkerReport};

use aliasmap_path::{AliasPair, OriginalKey};
use tracing::info;

/// Expand `aliases` over `keys` as configured
///
/// # Errors
/// Returns [`ExpansionError`] if the configuration is invalid or the worker
/// pool cannot start.
pub fn expand(
    aliases: &[AliasPair],
    keys: &[OriginalKey],
    config: &ExpansionConfig,
) -> Result<ExpansionOutcome, ExpansionError> {
    let strategy = config.strategy()?;
    let workers = config.resolved_workers();

    info!(
        strategy = strategy.name(),
        workers,
        aliases = aliases.len(),
        keys = keys.len(),
        "starting expansion"
    );

    let outcome = strategy.expand(aliases, keys, workers)?;

    info!(
        discovered = outcome.stats.discovered,
        rounds = outcome.stats.rounds,
        converged = outcome.stats.converged,
        "expansion finished"
    );

    Ok(outcome)
}

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for running expansions
    pub use crate::{
        expand, ExpansionConfig, ExpansionOutcome, ExpansionStrategy, SharedResultStore,
        StrategyKind,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
