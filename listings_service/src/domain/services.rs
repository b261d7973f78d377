//! Domain services - concrete implementations of service ports

#[cfg(test)]
mod tests;

use crate::domain::{
    error::Result,
    models::{PROPERTY_RESULT_CAP, PropertyFilter, PropertyView},
    ports::{PropertiesStorage, PropertyService},
};

/// Concrete implementation of PropertyService
#[derive(Debug, Clone)]
pub struct PropertyServiceImpl<S> {
    storage: S,
}

impl<S> PropertyServiceImpl<S>
where
    S: PropertiesStorage,
{
    /// Create a new property service implementation
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

impl<S> PropertyService for PropertyServiceImpl<S>
where
    S: PropertiesStorage,
{
    async fn list_properties(&self, filter: PropertyFilter) -> Result<Vec<PropertyView>> {
        let mut properties = self.storage.get_properties(filter).await?;
        properties.truncate(PROPERTY_RESULT_CAP);
        Ok(properties)
    }
}
