//! Keys and alias rules
//!
//! Provides [`OriginalKey`], [`AliasPair`] and [`DiscoveredPair`], the value
//! types flowing through alias expansion, plus the [`Haystack`] view the
//! expansion workers scan.

use serde::ser::{Serialize, SerializeTuple, Serializer};
use std::fmt::{self, Display, Formatter};

/// Identifier from the input universe
///
/// The base relation maps every original key to itself, so an original key
/// is both the haystack searched by aliases and the value its derived names
/// resolve back to.
///
/// # Examples
/// - `window.location.href`
/// - `document.cookie`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OriginalKey(String);

impl OriginalKey {
    /// Create key from identifier text
    #[inline]
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Key text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for OriginalKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OriginalKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for OriginalKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Rename rule: `pattern -> replacement`
///
/// Pattern and replacement address dotted segments of a larger key. A
/// pattern that starts or ends with `.` supplies that boundary itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AliasPair {
    pattern: String,
    replacement: String,
}

impl AliasPair {
    /// Create alias rule
    ///
    /// # Errors
    /// Returns [`PathError::EmptyPattern`] if `pattern` is empty; an empty
    /// pattern would match at every offset of every key.
    pub fn new(
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Result<Self, PathError> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(PathError::EmptyPattern);
        }
        Ok(Self {
            pattern,
            replacement: replacement.into(),
        })
    }

    /// Text searched for
    #[inline]
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Text substituted for the matched span
    #[inline]
    #[must_use]
    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

impl Display for AliasPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.pattern, self.replacement)
    }
}

/// Alias-derived key resolving back to an original identifier
///
/// `expanded_key` is a name produced by applying one or more aliases;
/// `original_value` is always the original key it started from, never an
/// intermediate alias. Serializes as the two-element array
/// `[expanded_key, original_value]`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DiscoveredPair {
    expanded_key: String,
    original_value: String,
}

impl DiscoveredPair {
    /// Create discovered pair
    #[inline]
    #[must_use]
    pub fn new(expanded_key: impl Into<String>, original_value: impl Into<String>) -> Self {
        Self {
            expanded_key: expanded_key.into(),
            original_value: original_value.into(),
        }
    }

    /// Derived key
    #[inline]
    #[must_use]
    pub fn expanded_key(&self) -> &str {
        &self.expanded_key
    }

    /// Original identifier the derived key resolves to
    #[inline]
    #[must_use]
    pub fn original_value(&self) -> &str {
        &self.original_value
    }

    /// Split into `(expanded_key, original_value)`
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.expanded_key, self.original_value)
    }
}

impl Display for DiscoveredPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.expanded_key, self.original_value)
    }
}

impl Serialize for DiscoveredPair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.expanded_key)?;
        tuple.serialize_element(&self.original_value)?;
        tuple.end()
    }
}

/// Anything an alias can be applied to
///
/// `key` is the text searched; `value` is the original identifier carried
/// into every pair derived from it.
pub trait Haystack {
    /// Text searched by the matcher
    fn key(&self) -> &str;

    /// Original identifier propagated to derived pairs
    fn value(&self) -> &str;
}

impl Haystack for OriginalKey {
    #[inline]
    fn key(&self) -> &str {
        &self.0
    }

    #[inline]
    fn value(&self) -> &str {
        &self.0
    }
}

impl Haystack for DiscoveredPair {
    #[inline]
    fn key(&self) -> &str {
        &self.expanded_key
    }

    #[inline]
    fn value(&self) -> &str {
        &self.original_value
    }
}

/// Errors related to keys and alias rules
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// Alias pattern is empty
    #[error("alias pattern cannot be empty")]
    EmptyPattern,
}
