//! Database layer owner model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A property owner (row of `owners`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Owner {
    pub id: String,
    pub name: String,
    pub address: String,
    pub photo: String,
    pub birthday: NaiveDate,
}
