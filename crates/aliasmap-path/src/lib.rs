//! aliasmap Path System
//!
//! Dotted identifier keys, alias rules, and boundary-aware segment matching.
//!
//! # Overview
//!
//! - **OriginalKey**: an identifier from the input universe, mapped to itself
//! - **AliasPair**: a `pattern -> replacement` rename rule
//! - **DiscoveredPair**: an alias-derived key resolving back to an original
//! - **BoundaryMatcher**: first-occurrence, segment-aligned substring lookup
//!
//! # Example
//!
//! ```rust
//! use aliasmap_path::{AliasPair, BoundaryMatcher};
//!
//! let alias = AliasPair::new("a", "x").unwrap();
//!
//! assert_eq!(BoundaryMatcher::find("a.b.c", "a"), Some(0));
//! assert_eq!(BoundaryMatcher::rewrite("a.b.c", &alias).as_deref(), Some("x.b.c"));
//!
//! // "oo" is not aligned to a segment boundary in "foo.bar"
//! assert_eq!(BoundaryMatcher::find("foo.bar", "oo"), None);
//! ```

#![warn(missing_docs)]

pub mod key;
pub mod matcher;

// Re-exports
pub use key::{AliasPair, DiscoveredPair, Haystack, OriginalKey, PathError};
pub use matcher::{BoundaryMatcher, SEPARATOR};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for alias matching
    pub use crate::{AliasPair, BoundaryMatcher, DiscoveredPair, Haystack, OriginalKey};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
