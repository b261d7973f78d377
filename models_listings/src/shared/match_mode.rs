//! How substring filters compare text.

use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;
use utoipa::ToSchema;

/// Case handling for the `name` and `address` substring filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// The store's default comparison (`LIKE` in Postgres).
    #[default]
    CaseSensitive,
    /// Case folded comparison (`ILIKE` in Postgres).
    CaseInsensitive,
}

impl MatchMode {
    pub fn is_case_insensitive(self) -> bool {
        matches!(self, MatchMode::CaseInsensitive)
    }
}

impl Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchMode::CaseSensitive => write!(f, "case_sensitive"),
            MatchMode::CaseInsensitive => write!(f, "case_insensitive"),
        }
    }
}

/// Represents a value which cannot be converted into a [MatchMode]
#[derive(Debug, Error, PartialEq)]
#[error("Could not convert {0} into a match mode")]
pub struct UnknownMatchMode(String);

impl FromStr for MatchMode {
    type Err = UnknownMatchMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "case_sensitive" => Ok(MatchMode::CaseSensitive),
            "case_insensitive" => Ok(MatchMode::CaseInsensitive),
            other => Err(UnknownMatchMode(other.to_string())),
        }
    }
}
