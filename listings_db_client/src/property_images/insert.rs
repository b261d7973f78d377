//! Property image insert operations.

use crate::error::ListingsDatabaseError;
use models_listings::db::PropertyImage;
use sqlx::{Pool, Postgres};

/// Inserts a single image row for an existing property.
#[tracing::instrument(skip(db), fields(image_id = %image.id, property_id = %image.property_id))]
pub async fn insert_property_image(
    db: &Pool<Postgres>,
    image: &PropertyImage,
) -> Result<(), ListingsDatabaseError> {
    sqlx::query(
        r#"
        INSERT INTO property_images (id, property_id, file, enabled)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(&image.id)
    .bind(&image.property_id)
    .bind(&image.file)
    .bind(image.enabled)
    .execute(db)
    .await?;

    Ok(())
}
