//! Row shape of the property search query.

use rust_decimal::Decimal;

/// One row of the search query: a property joined to at most one image.
#[derive(Debug, Clone)]
pub struct PropertyViewRow {
    pub owner_id: String,
    pub name: String,
    pub address: String,
    pub price: Decimal,
    pub image_file: Option<String>,
}

impl<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> for PropertyViewRow {
    fn from_row(row: &'r sqlx::postgres::PgRow) -> Result<Self, sqlx::Error> {
        use sqlx::Row;

        Ok(PropertyViewRow {
            owner_id: row.try_get("owner_id")?,
            name: row.try_get("name")?,
            address: row.try_get("address")?,
            price: row.try_get("price")?,
            image_file: row.try_get("image_file")?,
        })
    }
}

impl From<PropertyViewRow> for crate::service::PropertyView {
    fn from(row: PropertyViewRow) -> Self {
        Self {
            owner_id: row.owner_id,
            name: row.name,
            address: row.address,
            price: row.price,
            image_file: row.image_file,
        }
    }
}
