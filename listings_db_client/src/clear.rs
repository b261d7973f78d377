//! Wipes every listings table.

use crate::error::ListingsDatabaseError;
use sqlx::{Pool, Postgres};

/// Tables in an order that never violates a foreign key when deleting.
pub const TABLES_IN_DELETE_ORDER: [&str; 4] =
    ["property_traces", "property_images", "properties", "owners"];

/// Deletes all rows of every listings table, children first.
/// Returns the number of affected rows per table, in deletion order.
#[tracing::instrument(skip(db))]
pub async fn clear_all(
    db: &Pool<Postgres>,
) -> Result<Vec<(&'static str, u64)>, ListingsDatabaseError> {
    let mut deleted = Vec::with_capacity(TABLES_IN_DELETE_ORDER.len());

    for table in TABLES_IN_DELETE_ORDER {
        // table names come from the constant above, never from input
        let result = sqlx::query(&format!("DELETE FROM {table}"))
            .execute(db)
            .await?;
        deleted.push((table, result.rows_affected()));
    }

    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use listings_db_migrator::LISTINGS_DB_MIGRATIONS;

    #[sqlx::test(
        migrator = "LISTINGS_DB_MIGRATIONS",
        fixtures(path = "../fixtures", scripts("listings"))
    )]
    async fn test_clear_all(pool: Pool<Postgres>) -> anyhow::Result<()> {
        let deleted = clear_all(&pool).await?;

        assert_eq!(
            deleted,
            vec![
                ("property_traces", 2),
                ("property_images", 5),
                ("properties", 4),
                ("owners", 2),
            ]
        );

        let remaining: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM properties")
            .fetch_one(&pool)
            .await?;
        assert_eq!(remaining.0, 0);

        Ok(())
    }
}
