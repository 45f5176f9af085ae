//! Expansion configuration
//!
//! [`ExpansionConfig`] is layered: defaults, then an optional TOML file, then
//! explicit overrides applied by the caller through the `with_*` builders.
//!
//! ```toml
//! workers = 8
//! strategy = "fixed-point"
//! max_rounds = 32
//! ```

use crate::error::ExpansionError;
use crate::strategy::{ExpansionStrategy, StrategyKind};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::Path;
use std::thread;

/// Default round limit for the fixed point strategy
pub const DEFAULT_MAX_ROUNDS: usize = 16;

/// Expansion configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExpansionConfig {
    /// Worker count; `None` derives it from host parallelism
    pub workers: Option<usize>,

    /// Expansion strategy
    pub strategy: StrategyKind,

    /// Round limit for the fixed point strategy
    pub max_rounds: usize,
}

impl ExpansionConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With explicit worker count
    #[inline]
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// With strategy
    #[inline]
    #[must_use]
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// With round limit
    #[inline]
    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Parse from TOML text
    ///
    /// # Errors
    /// Returns [`ExpansionError::ConfigParse`] on invalid TOML or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self, ExpansionError> {
        Ok(toml::from_str(text)?)
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// Returns [`ExpansionError::ConfigRead`] if the file cannot be read, or
    /// [`ExpansionError::ConfigParse`] if it is not a valid configuration.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ExpansionError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ExpansionError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Check value ranges
    ///
    /// # Errors
    /// Returns [`ExpansionError::InvalidConfig`] if `max_rounds` is zero.
    pub fn validate(&self) -> Result<(), ExpansionError> {
        if self.max_rounds == 0 {
            return Err(ExpansionError::InvalidConfig(
                "max_rounds must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Worker count to run with
    #[must_use]
    pub fn resolved_workers(&self) -> usize {
        self.workers.unwrap_or_else(available_workers)
    }

    /// Build the configured strategy
    ///
    /// # Errors
    /// Returns the [`validate`](Self::validate) error, if any.
    pub fn strategy(&self) -> Result<Box<dyn ExpansionStrategy>, ExpansionError> {
        self.validate()?;
        Ok(self.strategy.build(self.max_rounds))
    }
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            workers: None,
            strategy: StrategyKind::SinglePass,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

/// Host parallelism, or 1 when it cannot be determined
#[must_use]
pub fn available_workers() -> usize {
    thread::available_parallelism().map_or(1, NonZeroUsize::get)
}
