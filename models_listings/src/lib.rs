//! Listings Models
//!
//! Data models for the property listings system, split by layer:
//!
//! - **shared**: types used by every layer (MatchMode)
//! - **db**: stored entities and row shapes (used by listings_db_client)
//! - **service**: query filter and result types (used within listings_service)
//! - **api**: HTTP wire types (query parameters, error body)

pub mod api;
pub mod db;
pub mod service;
pub mod shared;

pub use service::{PropertyFilter, PropertyView};
pub use shared::MatchMode;
