//! Errors raised at the checked boundary of a [`crate::trie::Trie`].
//!
//! Queries never fail: a missing key is simply not found. The only failure
//! is a precondition violation, where an operation which needs a key was
//! handed none at all (see [`crate::trie::Trie::try_insert`] and friends),
//! or a list of entries to build from names a key twice.

use thiserror::Error;

/// Result type alias for checked trie operations.
pub type Result<T> = std::result::Result<T, TrieError>;

/// Failures reported by checked trie operations.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum TrieError {
    /// The operation requires a key and none was supplied.
    #[error("invalid argument: {operation} requires a key")]
    MissingKey {
        /// Name of the rejecting operation.
        operation: &'static str,
    },

    /// A list of entries named the same key twice.
    #[error("invalid argument: entry {index} repeats an earlier key")]
    DuplicateKey {
        /// Position of the repeated entry.
        index: usize,
    },
}

/// Unwrap a caller supplied key or reject the call before anything happens.
pub(crate) fn required<K>(key: Option<K>, operation: &'static str) -> Result<K> {
    key.ok_or_else(|| {
        tracing::warn!(operation, "rejected call without a key");
        TrieError::MissingKey { operation }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_passes_present_keys_through() {
        assert_eq!(required(Some("abc"), "insert"), Ok("abc"));
    }

    #[test]
    fn it_names_the_rejecting_operation() {
        let err = required::<&str>(None, "delete").unwrap_err();
        assert_eq!(err, TrieError::MissingKey { operation: "delete" });
        assert_eq!(err.to_string(), "invalid argument: delete requires a key");
    }
}
