//! Database layer property model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A listed property (row of `properties`). Belongs to exactly one owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Property {
    pub id: String,
    pub name: String,
    pub address: String,
    pub price: Decimal,
    pub code_internal: String,
    pub year: i32,
    pub owner_id: String,
}
