//! Service layer types - used within listings_service and returned by listings_db_client.

pub mod property_filter;
pub mod property_view;

pub use property_filter::{PROPERTY_RESULT_CAP, PropertyFilter};
pub use property_view::PropertyView;
