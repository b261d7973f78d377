use super::*;
use crate::domain::services::PropertyServiceImpl;
use crate::outbound::mock::MockPropertiesStorage;
use axum_test::TestServer;
use rust_decimal::Decimal;
use serde_json::{Value, json};

fn server(storage: MockPropertiesStorage) -> TestServer {
    TestServer::new(router(Arc::new(PropertyServiceImpl::new(storage)))).unwrap()
}

fn casa_sol() -> PropertyView {
    PropertyView {
        owner_id: "a00000000000000000000001".to_string(),
        name: "Casa Sol".to_string(),
        address: "Calle 1".to_string(),
        price: Decimal::from(100000),
        image_file: Some("https://img.example/sol-first.jpg".to_string()),
    }
}

#[tokio::test]
async fn test_list_properties_returns_wire_shape() {
    let mut storage = MockPropertiesStorage::new();
    storage
        .expect_get_properties()
        .times(1)
        .returning(|_| Box::pin(async move { Ok(vec![casa_sol()]) }));

    let response = server(storage).get(PROPERTIES_PATH).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(
        body,
        json!([{
            "idOwner": "a00000000000000000000001",
            "name": "Casa Sol",
            "addressProperty": "Calle 1",
            "priceProperty": 100000.0,
            "imageFile": "https://img.example/sol-first.jpg",
        }])
    );
}

#[tokio::test]
async fn test_list_properties_parses_filters() {
    let mut storage = MockPropertiesStorage::new();
    storage
        .expect_get_properties()
        .withf(|filter| {
            *filter
                == PropertyFilter {
                    name: Some("Casa".to_string()),
                    address: Some("Calle".to_string()),
                    price_min: Some(Decimal::from(95000)),
                    price_max: Some(Decimal::from(260000)),
                }
        })
        .times(1)
        .returning(|_| Box::pin(async move { Ok(vec![casa_sol()]) }));

    let response = server(storage)
        .get(PROPERTIES_PATH)
        .add_query_param("name", "Casa")
        .add_query_param("address", "Calle")
        .add_query_param("priceMin", "95000")
        .add_query_param("priceMax", "260000")
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_list_properties_treats_empty_params_as_absent() {
    let mut storage = MockPropertiesStorage::new();
    storage
        .expect_get_properties()
        .withf(PropertyFilter::is_unconstrained)
        .times(1)
        .returning(|_| Box::pin(async move { Ok(vec![]) }));

    let response = server(storage)
        .get(PROPERTIES_PATH)
        .add_query_param("name", "")
        .add_query_param("priceMax", "")
        .await;

    response.assert_status_ok();
    let body: Vec<PropertyView> = response.json();
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_list_properties_rejects_non_numeric_price() {
    let mut storage = MockPropertiesStorage::new();
    storage.expect_get_properties().never();

    let response = server(storage)
        .get(PROPERTIES_PATH)
        .add_query_param("priceMin", "cheap")
        .await;

    response.assert_status_bad_request();
    let body: ErrorResponse = response.json();
    assert_eq!(body.message, "Invalid query parameters");
}

#[tokio::test]
async fn test_list_properties_store_unavailable() {
    let mut storage = MockPropertiesStorage::new();
    storage.expect_get_properties().times(1).returning(|_| {
        Box::pin(async move {
            Err(PropertyQueryError::StoreUnavailable(anyhow::anyhow!(
                "pool timed out while waiting for an open connection"
            )))
        })
    });

    let response = server(storage).get(PROPERTIES_PATH).await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: ErrorResponse = response.json();
    assert_eq!(body.message, "Property store unavailable");
    assert_eq!(
        body.detail,
        "Property store unavailable: pool timed out while waiting for an open connection"
    );
}

#[tokio::test]
async fn test_list_properties_query_failure() {
    let mut storage = MockPropertiesStorage::new();
    storage.expect_get_properties().times(1).returning(|_| {
        Box::pin(async move {
            Err(PropertyQueryError::QueryFailure(anyhow::anyhow!(
                "canceling statement due to statement timeout"
            )))
        })
    });

    let response = server(storage).get(PROPERTIES_PATH).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorResponse = response.json();
    assert_eq!(body.message, "Internal server error");
    assert!(body.detail.contains("statement timeout"));
}
