//! Database layer property image model.

use serde::{Deserialize, Serialize};

/// An image of a property (row of `property_images`).
/// Only enabled images are ever surfaced by a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PropertyImage {
    pub id: String,
    pub property_id: String,
    pub file: String,
    pub enabled: bool,
}
