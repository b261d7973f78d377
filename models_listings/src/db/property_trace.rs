//! Database layer property trace model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A recorded sale of a property (row of `property_traces`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PropertyTrace {
    pub id: String,
    pub property_id: String,
    pub date_sale: NaiveDate,
    pub name: String,
    pub value: Decimal,
    pub tax: Decimal,
}
