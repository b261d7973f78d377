//! Property insert operations.

use crate::error::ListingsDatabaseError;
use models_listings::db::Property;
use sqlx::{Pool, Postgres};

/// Inserts a single property row.
#[tracing::instrument(skip(db), fields(property_id = %property.id))]
pub async fn insert_property(
    db: &Pool<Postgres>,
    property: &Property,
) -> Result<(), ListingsDatabaseError> {
    sqlx::query(
        r#"
        INSERT INTO properties (id, name, address, price, code_internal, year, owner_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(&property.id)
    .bind(&property.name)
    .bind(&property.address)
    .bind(property.price)
    .bind(&property.code_internal)
    .bind(property.year)
    .bind(&property.owner_id)
    .execute(db)
    .await?;

    Ok(())
}
