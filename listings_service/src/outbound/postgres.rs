//! PostgreSQL implementation of the storage port, backed by listings_db_client

use crate::domain::{
    error::{PropertyQueryError, Result},
    models::{MatchMode, PropertyFilter, PropertyView},
    ports::PropertiesStorage,
};
use listings_db_client::{error::ListingsDatabaseError, properties};
use sqlx::PgPool;

/// PostgreSQL storage implementation for properties
///
/// The pool is owned by the caller's wiring; each search borrows one
/// connection from it for the duration of the query.
#[derive(Debug, Clone)]
pub struct PropertiesPgStorage {
    pool: PgPool,
    match_mode: MatchMode,
}

impl PropertiesPgStorage {
    /// Create a new PostgreSQL properties storage
    pub fn new(pool: PgPool, match_mode: MatchMode) -> Self {
        Self { pool, match_mode }
    }
}

impl PropertiesStorage for PropertiesPgStorage {
    async fn get_properties(&self, filter: PropertyFilter) -> Result<Vec<PropertyView>> {
        Ok(properties::get::get_properties(&self.pool, &filter, self.match_mode).await?)
    }
}

impl From<ListingsDatabaseError> for PropertyQueryError {
    fn from(err: ListingsDatabaseError) -> Self {
        match err {
            ListingsDatabaseError::Unavailable(e) => PropertyQueryError::StoreUnavailable(e.into()),
            ListingsDatabaseError::Mapping(e) => {
                PropertyQueryError::QueryFailure(anyhow::Error::new(e).context("row mapping failed"))
            }
            ListingsDatabaseError::Query(e) => PropertyQueryError::QueryFailure(e.into()),
        }
    }
}
