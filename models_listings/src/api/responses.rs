//! API layer response types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Short description of the failure class
    pub message: String,
    /// The underlying error
    pub detail: String,
}
