//! Denormalized search result.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A property as returned by a search, carrying at most one image.
///
/// `image_file` is the file of the lowest-id enabled image of the property,
/// or `None` when the property has no enabled image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PropertyView {
    #[serde(rename = "idOwner")]
    pub owner_id: String,
    #[serde(rename = "name")]
    pub name: String,
    #[serde(rename = "addressProperty")]
    pub address: String,
    #[serde(rename = "priceProperty", with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    #[serde(rename = "imageFile")]
    pub image_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_wire_names() {
        let view = PropertyView {
            owner_id: "a00000000000000000000001".to_string(),
            name: "Casa Sol".to_string(),
            address: "Calle 1".to_string(),
            price: Decimal::new(10000050, 2),
            image_file: None,
        };

        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            json!({
                "idOwner": "a00000000000000000000001",
                "name": "Casa Sol",
                "addressProperty": "Calle 1",
                "priceProperty": 100000.5,
                "imageFile": null,
            })
        );
    }
}
