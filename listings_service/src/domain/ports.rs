//! Ports for the property search: what the domain needs from storage and what it offers callers

use crate::domain::{
    error::Result,
    models::{PropertyFilter, PropertyView},
};

/// Storage port for reading properties
pub trait PropertiesStorage: Send + Sync + 'static {
    /// Properties matching every supplied filter, ordered by name,
    /// each joined to its lowest-id enabled image if it has one
    fn get_properties(
        &self,
        filter: PropertyFilter,
    ) -> impl Future<Output = Result<Vec<PropertyView>>> + Send;
}

/// The service level interface for property search
pub trait PropertyService: Send + Sync + 'static {
    /// List at most [crate::domain::models::PROPERTY_RESULT_CAP] properties matching `filter`
    fn list_properties(
        &self,
        filter: PropertyFilter,
    ) -> impl Future<Output = Result<Vec<PropertyView>>> + Send;
}
