//! Error types for alias expansion
//!
//! Expansion itself is total over well-formed strings; the only failures are
//! starting the worker pool and loading configuration.

use std::path::PathBuf;

/// Expansion error type
#[derive(Debug, thiserror::Error)]
pub enum ExpansionError {
    /// Worker threads could not be spawned
    #[error("failed to start worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    /// Configuration values are inconsistent
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Strategy name not recognized
    #[error("unknown expansion strategy: {0} (expected single-pass or fixed-point)")]
    UnknownStrategy(String),

    /// Configuration file could not be read
    #[error("failed to read config file {}: {source}", path.display())]
    ConfigRead {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for [`crate::ExpansionConfig`]
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl ExpansionError {
    /// Check if error came from configuration rather than execution
    #[inline]
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        !matches!(self, Self::WorkerPool(_))
    }
}
