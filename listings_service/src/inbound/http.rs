//! HTTP inbound adapters - thin wrappers around domain services

#[cfg(test)]
mod tests;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use models_listings::api::{ErrorResponse, PropertyQueryParams};
use std::sync::Arc;
use thiserror::Error;

use crate::domain::{
    error::PropertyQueryError,
    models::{PropertyFilter, PropertyView},
    ports::PropertyService,
};

/// Route of the property search
pub const PROPERTIES_PATH: &str = "/api/properties";

/// Router exposing the property search over `service`
pub fn router<S>(service: Arc<S>) -> Router
where
    S: PropertyService,
{
    Router::new()
        .route(PROPERTIES_PATH, get(list_properties::<S>))
        .with_state(service)
}

// ===== Error Handling =====

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("{0}")]
    Unavailable(String),
    #[error("{0}")]
    Internal(String),
}

impl From<PropertyQueryError> for HttpError {
    fn from(err: PropertyQueryError) -> Self {
        match err {
            PropertyQueryError::StoreUnavailable(_) => HttpError::Unavailable(err.to_string()),
            PropertyQueryError::QueryFailure(_) => HttpError::Internal(err.to_string()),
        }
    }
}

impl From<QueryRejection> for HttpError {
    fn from(rejection: QueryRejection) -> Self {
        HttpError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status_code, message) = match &self {
            HttpError::BadRequest(_) => (StatusCode::BAD_REQUEST, "Invalid query parameters"),
            HttpError::Unavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "Property store unavailable")
            }
            HttpError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "HttpError",
                "Internal server error"
            );
        }

        let detail = match self {
            HttpError::BadRequest(detail)
            | HttpError::Unavailable(detail)
            | HttpError::Internal(detail) => detail,
        };

        (
            status_code,
            Json(ErrorResponse {
                message: message.to_string(),
                detail,
            }),
        )
            .into_response()
    }
}

// ===== Handlers =====

/// List properties matching the optional filters, ordered by name, at most 100
#[utoipa::path(
    get,
    path = "/api/properties",
    params(
        ("name" = Option<String>, Query, description = "Substring the property name must contain"),
        ("address" = Option<String>, Query, description = "Substring the property address must contain"),
        ("priceMin" = Option<f64>, Query, description = "Inclusive lower price bound"),
        ("priceMax" = Option<f64>, Query, description = "Inclusive upper price bound")
    ),
    responses(
        (status = 200, description = "Matching properties, possibly none", body = Vec<PropertyView>),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse),
        (status = 500, description = "The query could not be executed", body = ErrorResponse),
        (status = 503, description = "The property store is unreachable", body = ErrorResponse)
    ),
    tag = "Properties"
)]
#[tracing::instrument(skip(service, params))]
pub async fn list_properties<S>(
    State(service): State<Arc<S>>,
    params: Result<Query<PropertyQueryParams>, QueryRejection>,
) -> Result<Json<Vec<PropertyView>>, HttpError>
where
    S: PropertyService,
{
    let Query(params) = params?;
    let filter = PropertyFilter::from(params);

    tracing::info!(
        name = ?filter.name,
        address = ?filter.address,
        price_min = ?filter.price_min,
        price_max = ?filter.price_max,
        "listing properties"
    );

    let properties = service
        .list_properties(filter)
        .await
        .inspect_err(|e| {
            tracing::error!(error = ?e, "failed to list properties");
        })?;

    tracing::info!(
        properties_count = properties.len(),
        "successfully listed properties"
    );

    Ok(Json(properties))
}
