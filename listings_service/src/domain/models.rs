//! Domain models, shared with the storage crates

pub use models_listings::service::PROPERTY_RESULT_CAP;
pub use models_listings::{MatchMode, PropertyFilter, PropertyView};
