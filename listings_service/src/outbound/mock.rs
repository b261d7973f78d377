//! This module provides an [mockall::mock] concrete struct [MockPropertiesStorage] which can be used for testing
use crate::domain::{
    error::PropertyQueryError,
    models::{PropertyFilter, PropertyView},
};
use mockall::mock;

mock! {
    pub PropertiesStorage {}
    impl crate::domain::ports::PropertiesStorage for PropertiesStorage {
        fn get_properties(
            &self,
            filter: PropertyFilter,
        ) -> impl Future<Output = Result<Vec<PropertyView>, PropertyQueryError>> + Send;
    }
}
