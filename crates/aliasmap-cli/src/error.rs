//! Input error types
//!
//! Every variant is a malformed-input failure; any of them aborts the run
//! before expansion starts.

/// Payload parsing error
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Stream ended before the payload
    #[error("malformed input: missing {0} payload")]
    MissingPayload(&'static str),

    /// Stream is not valid JSON
    #[error("malformed input: invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Alias payload is not an array
    #[error("malformed input: alias pairs must be an array, found {0}")]
    AliasPayloadNotArray(&'static str),

    /// Alias entry is not an array
    #[error("malformed input: alias entry {index} must be an array, found {found}")]
    AliasEntryNotArray {
        /// Entry position in the payload
        index: usize,
        /// JSON type found instead
        found: &'static str,
    },

    /// Alias element is neither a string nor null
    #[error("malformed input: alias entry {index} element {position} must be a string, found {found}")]
    AliasElementNotString {
        /// Entry position in the payload
        index: usize,
        /// 0 for the pattern, 1 for the replacement
        position: usize,
        /// JSON type found instead
        found: &'static str,
    },

    /// Function map payload is not an object
    #[error("malformed input: function map must be an object, found {0}")]
    FunctionMapNotObject(&'static str),
}
