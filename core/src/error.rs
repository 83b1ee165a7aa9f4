//! Error types for trie construction and insertion.
use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T, E = TrieError> = std::result::Result<T, E>;

/// Errors raised when building or updating a [`WeightedTrie`](crate::WeightedTrie).
///
/// These are argument violations surfaced immediately to the caller; nothing
/// here is retried or recovered internally. Unknown terms and unmatched
/// prefixes are *not* errors; queries report them as empty/zero results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrieError {
    /// The `terms` and `weights` slices passed to construction differ in length.
    #[error("terms and weights have different lengths ({terms} vs {weights})")]
    LengthMismatch { terms: usize, weights: usize },

    /// A term was given a negative weight.
    #[error("negative weight {weight} for term {term:?}")]
    NegativeWeight { term: String, weight: f64 },

    /// A term was given a NaN or infinite weight, which would poison the
    /// max-weight aggregation along its path.
    #[error("non-finite weight for term {term:?}")]
    NonFiniteWeight { term: String },
}
