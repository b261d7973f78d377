//! Database layer types - used only by listings_db_client.
//!
//! These structs map directly onto the listings tables.

pub mod owner;
pub mod property;
pub mod property_image;
pub mod property_trace;
pub mod property_view;

pub use owner::Owner;
pub use property::Property;
pub use property_image::PropertyImage;
pub use property_trace::PropertyTrace;
pub use property_view::PropertyViewRow;
