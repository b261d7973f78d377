//! Owner insert operations.

use crate::error::ListingsDatabaseError;
use models_listings::db::Owner;
use sqlx::{Pool, Postgres};

/// Inserts a single owner row.
#[tracing::instrument(skip(db), fields(owner_id = %owner.id))]
pub async fn insert_owner(db: &Pool<Postgres>, owner: &Owner) -> Result<(), ListingsDatabaseError> {
    sqlx::query(
        r#"
        INSERT INTO owners (id, name, address, photo, birthday)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(&owner.id)
    .bind(&owner.name)
    .bind(&owner.address)
    .bind(&owner.photo)
    .bind(owner.birthday)
    .execute(db)
    .await?;

    Ok(())
}
