//! Property trace insert operations.

use crate::error::ListingsDatabaseError;
use models_listings::db::PropertyTrace;
use sqlx::{Pool, Postgres};

/// Inserts a single sale trace row for an existing property.
#[tracing::instrument(skip(db), fields(trace_id = %trace.id, property_id = %trace.property_id))]
pub async fn insert_property_trace(
    db: &Pool<Postgres>,
    trace: &PropertyTrace,
) -> Result<(), ListingsDatabaseError> {
    sqlx::query(
        r#"
        INSERT INTO property_traces (id, property_id, date_sale, name, value, tax)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(&trace.id)
    .bind(&trace.property_id)
    .bind(trace.date_sale)
    .bind(&trace.name)
    .bind(trace.value)
    .bind(trace.tax)
    .execute(db)
    .await?;

    Ok(())
}
