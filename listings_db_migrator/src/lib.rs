//! The sole responsibility of this crate is to expose the statically imported sql migrations for the listings db.
//!
//! The services never run these; they exist so `#[sqlx::test]` can build a scratch database.
pub static LISTINGS_DB_MIGRATIONS: sqlx::migrate::Migrator =
    sqlx::migrate!("../listings_db_client/migrations");
