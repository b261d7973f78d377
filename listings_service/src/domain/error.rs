//! Domain error types

use thiserror::Error;

/// Failure of a property search. An empty result is never an error.
#[derive(Debug, Error)]
pub enum PropertyQueryError {
    /// No connection to the store could be obtained
    #[error("Property store unavailable: {0:#}")]
    StoreUnavailable(#[source] anyhow::Error),

    /// The store rejected or failed the query, or a row could not be mapped
    #[error("Property query failed: {0:#}")]
    QueryFailure(#[source] anyhow::Error),
}

/// Result type for domain operations
pub type Result<T> = std::result::Result<T, PropertyQueryError>;
