//! Error types for the search crate.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur during search operations.
///
/// Every variant is a caller-contract violation caught before any matching
/// runs. The matching logic itself is total: once inputs pass validation,
/// no pair of strings can fail to produce a verdict.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Keyword list was empty at query construction
    #[error("Query must contain at least one keyword")]
    EmptyQuery,

    /// Keyword was empty or all whitespace after trimming
    #[error("Keyword cannot be empty")]
    EmptyKeyword,

    /// Keyword contained internal whitespace
    #[error("Keyword must be a single word: {0:?}")]
    MultiWordKeyword(String),
}
