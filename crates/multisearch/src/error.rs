//! Error types for the multisearch engine.
//!
//! The engine uses a unified error type that wraps errors from the automaton
//! crate. Degenerate inputs (empty text, empty pattern list, out-of-range
//! offsets) are not errors: they produce empty results, since "no matches"
//! is a legitimate outcome distinct from failure.

use thiserror::Error;

/// Main error type for search operations.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Error from automaton construction
    #[error(transparent)]
    Automaton(#[from] multisearch_ac::AutomatonError),

    /// The page quota must be positive
    #[error("page size must be positive")]
    InvalidPageSize,
}

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
