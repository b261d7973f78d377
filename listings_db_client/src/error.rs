//! Database errors for listings operations

use thiserror::Error;

/// Errors that can occur during database operations
#[derive(Debug, Error)]
pub enum ListingsDatabaseError {
    /// No connection to the store could be obtained
    #[error("Store unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    /// A returned row did not fit the expected shape
    #[error("Row mapping error: {0}")]
    Mapping(#[source] sqlx::Error),

    #[error("Query error: {0}")]
    Query(#[source] sqlx::Error),
}

impl From<sqlx::Error> for ListingsDatabaseError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Configuration(_)
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => ListingsDatabaseError::Unavailable(err),
            sqlx::Error::Database(db_err)
                if db_err.code().is_some_and(|code| is_connection_state(&code)) =>
            {
                ListingsDatabaseError::Unavailable(err)
            }
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::TypeNotFound { .. } => ListingsDatabaseError::Mapping(err),
            _ => ListingsDatabaseError::Query(err),
        }
    }
}

/// SQLSTATEs raised while establishing a session rather than running a statement:
/// connection exceptions (08), bad credentials (28), unknown database (3D000)
/// and server shutdown / startup (57P01..57P03).
fn is_connection_state(code: &str) -> bool {
    code.starts_with("08") || code.starts_with("28") || code == "3D000" || code.starts_with("57P0")
}
