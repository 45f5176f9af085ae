//! Boundary-aware segment matching
//!
//! Provides [`BoundaryMatcher`], which locates a pattern inside a dotted key
//! only when the occurrence lines up with segment boundaries.

use crate::key::AliasPair;

/// Path separator between key segments
pub const SEPARATOR: u8 = b'.';

/// Segment-aligned substring lookup
///
/// A match at offset `p` of length `n` is valid when:
/// - `p == 0`, or the byte before `p` is `.`, or the pattern starts with `.`
/// - `p + n` is the end of the key, or the byte at `p + n` is `.`, or the
///   pattern ends with `.`
///
/// Only the first textual occurrence is considered. If that occurrence is
/// not aligned the lookup fails, even when a later occurrence would be.
///
/// # Examples
/// - `"a"` in `"a.b.c"` matches at 0
/// - `"oo"` in `"foo.bar"` does not match
/// - `".b"` in `"a.b"` matches at 1
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundaryMatcher;

impl BoundaryMatcher {
    /// Offset of the first occurrence of `pattern` in `haystack`, if aligned
    #[must_use]
    pub fn find(haystack: &str, pattern: &str) -> Option<usize> {
        let pat = pattern.as_bytes();
        let (&first, &last) = (pat.first()?, pat.last()?);

        let pos = haystack.find(pattern)?;
        let end = pos + pat.len();
        let bytes = haystack.as_bytes();

        let valid_start = pos == 0 || bytes[pos - 1] == SEPARATOR || first == SEPARATOR;
        let valid_end = end == bytes.len() || bytes[end] == SEPARATOR || last == SEPARATOR;

        (valid_start && valid_end).then_some(pos)
    }

    /// Apply `alias` to `haystack`, replacing the matched span
    ///
    /// Returns `None` when [`BoundaryMatcher::find`] reports no match.
    #[must_use]
    pub fn rewrite(haystack: &str, alias: &AliasPair) -> Option<String> {
        let pos = Self::find(haystack, alias.pattern())?;
        let end = pos + alias.pattern().len();

        let capacity = haystack.len() - alias.pattern().len() + alias.replacement().len();
        let mut rewritten = String::with_capacity(capacity);
        rewritten.push_str(&haystack[..pos]);
        rewritten.push_str(alias.replacement());
        rewritten.push_str(&haystack[end..]);
        Some(rewritten)
    }
}
