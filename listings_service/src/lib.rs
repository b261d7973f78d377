//! Listings Service library following hexagonal architecture pattern
//!
//! The domain holds the property search contract and its error taxonomy,
//! outbound adapters implement storage, inbound adapters expose it over HTTP.

#[cfg(feature = "postgres")]
pub mod api;
pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
