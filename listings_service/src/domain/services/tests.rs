use super::*;
use crate::domain::error::PropertyQueryError;
use crate::outbound::mock::MockPropertiesStorage;
use rust_decimal::Decimal;

fn view(name: &str, image_file: Option<&str>) -> PropertyView {
    PropertyView {
        owner_id: "a00000000000000000000001".to_string(),
        name: name.to_string(),
        address: "Calle 1".to_string(),
        price: Decimal::from(100000),
        image_file: image_file.map(str::to_string),
    }
}

#[tokio::test]
async fn it_should_pass_filters_through_to_storage() {
    let mut storage = MockPropertiesStorage::new();
    storage
        .expect_get_properties()
        .withf(|filter| {
            assert_eq!(filter.name.as_deref(), Some("Casa"));
            assert_eq!(filter.address, None);
            assert_eq!(filter.price_min, Some(Decimal::from(95000)));
            assert_eq!(filter.price_max, Some(Decimal::from(260000)));
            true
        })
        .times(1)
        .returning(|_filter| {
            Box::pin(async move {
                Ok(vec![
                    view("Casa Luna", None),
                    view("Casa Sol", Some("https://img.example/sol-first.jpg")),
                ])
            })
        });

    let res = PropertyServiceImpl::new(storage)
        .list_properties(PropertyFilter {
            name: Some("Casa".to_string()),
            address: None,
            price_min: Some(Decimal::from(95000)),
            price_max: Some(Decimal::from(260000)),
        })
        .await
        .unwrap();

    assert_eq!(res.len(), 2);
    assert_eq!(res[0].name, "Casa Luna");
    assert_eq!(res[0].image_file, None);
    assert_eq!(
        res[1].image_file.as_deref(),
        Some("https://img.example/sol-first.jpg")
    );
}

#[tokio::test]
async fn it_should_never_return_more_than_the_cap() {
    let mut storage = MockPropertiesStorage::new();
    storage
        .expect_get_properties()
        .times(1)
        .returning(|_filter| {
            Box::pin(async move {
                Ok((0..150)
                    .map(|i| view(&format!("Propiedad {i:03}"), None))
                    .collect())
            })
        });

    let res = PropertyServiceImpl::new(storage)
        .list_properties(PropertyFilter::default())
        .await
        .unwrap();

    assert_eq!(res.len(), PROPERTY_RESULT_CAP);
    assert_eq!(res[0].name, "Propiedad 000");
    assert_eq!(res[PROPERTY_RESULT_CAP - 1].name, "Propiedad 099");
}

#[tokio::test]
async fn it_should_return_empty_success_when_nothing_matches() {
    let mut storage = MockPropertiesStorage::new();
    storage
        .expect_get_properties()
        .times(1)
        .returning(|_filter| Box::pin(async move { Ok(vec![]) }));

    let res = PropertyServiceImpl::new(storage)
        .list_properties(PropertyFilter {
            price_min: Some(Decimal::from(10)),
            price_max: Some(Decimal::from(1)),
            ..Default::default()
        })
        .await;

    assert!(matches!(res, Ok(views) if views.is_empty()));
}

#[tokio::test]
async fn it_should_propagate_storage_failures() {
    let mut storage = MockPropertiesStorage::new();
    storage
        .expect_get_properties()
        .times(1)
        .returning(|_filter| {
            Box::pin(async move {
                Err(PropertyQueryError::StoreUnavailable(anyhow::anyhow!(
                    "connection refused"
                )))
            })
        });

    let err = PropertyServiceImpl::new(storage)
        .list_properties(PropertyFilter::default())
        .await
        .unwrap_err();

    assert!(matches!(err, PropertyQueryError::StoreUnavailable(_)));
    assert_eq!(
        err.to_string(),
        "Property store unavailable: connection refused"
    );
}
