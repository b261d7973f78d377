//! Property search.

use crate::error::ListingsDatabaseError;
use models_listings::db::PropertyViewRow;
use models_listings::service::PROPERTY_RESULT_CAP;
use models_listings::{MatchMode, PropertyFilter, PropertyView};
use sqlx::{Pool, Postgres};

type Result<T> = std::result::Result<T, ListingsDatabaseError>;

/// Every filter is a `($n IS NULL OR ...)` predicate so absent filters are
/// tautologies and the text never changes with the filter combination.
/// The joined image is the enabled image with the smallest id, if any.
const SEARCH_PROPERTIES_SQL: &str = r#"
    SELECT
        p.owner_id,
        p.name,
        p.address,
        p.price,
        img.file AS image_file
    FROM properties p
    LEFT JOIN property_images img
        ON img.id = (
            SELECT MIN(pi.id)
            FROM property_images pi
            WHERE pi.property_id = p.id
            AND pi.enabled = TRUE
        )
    WHERE ($1::text IS NULL OR CASE WHEN $5::boolean THEN p.name ILIKE $1 ELSE p.name LIKE $1 END)
    AND ($2::text IS NULL OR CASE WHEN $5::boolean THEN p.address ILIKE $2 ELSE p.address LIKE $2 END)
    AND ($3::numeric IS NULL OR p.price >= $3)
    AND ($4::numeric IS NULL OR p.price <= $4)
    ORDER BY p.name ASC, p.id ASC
    LIMIT $6
"#;

/// Gets at most [PROPERTY_RESULT_CAP] properties matching every supplied
/// filter, ordered by name.
///
/// A single connection is taken from `db` for the query and handed back when
/// this function returns, whether it succeeds or not.
#[tracing::instrument(skip(db))]
pub async fn get_properties(
    db: &Pool<Postgres>,
    filter: &PropertyFilter,
    match_mode: MatchMode,
) -> Result<Vec<PropertyView>> {
    let mut conn = db.acquire().await?;

    let rows = sqlx::query_as::<_, PropertyViewRow>(SEARCH_PROPERTIES_SQL)
        .bind(filter.name.as_deref().map(contains_pattern))
        .bind(filter.address.as_deref().map(contains_pattern))
        .bind(filter.price_min)
        .bind(filter.price_max)
        .bind(match_mode.is_case_insensitive())
        .bind(PROPERTY_RESULT_CAP as i64)
        .fetch_all(&mut *conn)
        .await?;

    Ok(rows.into_iter().map(PropertyView::from).collect())
}

/// Builds a LIKE pattern matching any text that contains `needle` literally.
fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
