//! API layer query parameter types.

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};
use utoipa::ToSchema;

use crate::service::PropertyFilter;

/// Query parameters of the property search endpoint.
/// An empty value (`?name=`) is the same as leaving the parameter out.
#[serde_as]
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyQueryParams {
    /// Substring the property name must contain
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub name: Option<String>,
    /// Substring the property address must contain
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub address: Option<String>,
    /// Inclusive lower price bound
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default, alias = "price_min")]
    #[schema(value_type = Option<f64>)]
    pub price_min: Option<Decimal>,
    /// Inclusive upper price bound
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default, alias = "price_max")]
    #[schema(value_type = Option<f64>)]
    pub price_max: Option<Decimal>,
}

impl From<PropertyQueryParams> for PropertyFilter {
    fn from(params: PropertyQueryParams) -> Self {
        PropertyFilter {
            name: params.name,
            address: params.address,
            price_min: params.price_min,
            price_max: params.price_max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_json(value: serde_json::Value) -> PropertyQueryParams {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn missing_parameters_are_absent() {
        let filter: PropertyFilter = from_json(serde_json::json!({})).into();
        assert!(filter.is_unconstrained());
    }

    #[test]
    fn empty_parameters_are_absent() {
        let filter: PropertyFilter = from_json(serde_json::json!({
            "name": "",
            "address": "",
            "priceMin": "",
            "priceMax": "",
        }))
        .into();
        assert!(filter.is_unconstrained());
    }

    #[test]
    fn parses_camel_case_and_snake_case_prices() {
        let params = from_json(serde_json::json!({
            "name": "Casa",
            "priceMin": "95000",
            "price_max": "260000.50",
        }));

        assert_eq!(params.name.as_deref(), Some("Casa"));
        assert_eq!(params.price_min, Some(Decimal::new(95000, 0)));
        assert_eq!(params.price_max, Some(Decimal::new(26000050, 2)));
    }

    #[test]
    fn rejects_non_numeric_prices() {
        let result =
            serde_json::from_value::<PropertyQueryParams>(serde_json::json!({"priceMin": "cheap"}));
        assert!(result.is_err());
    }

    #[test]
    fn keeps_inverted_ranges() {
        let filter: PropertyFilter = from_json(serde_json::json!({
            "priceMin": "10",
            "priceMax": "1",
        }))
        .into();

        assert_eq!(filter.price_min, Some(Decimal::TEN));
        assert_eq!(filter.price_max, Some(Decimal::ONE));
    }
}
