//! API layer types - the HTTP wire shapes of the listings service.

pub mod query_params;
pub mod responses;

pub use query_params::PropertyQueryParams;
pub use responses::ErrorResponse;
