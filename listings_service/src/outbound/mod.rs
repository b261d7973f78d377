//! Outbound adapters - implementations of domain ports

#[cfg(any(test, feature = "mock"))]
pub mod mock;
#[cfg(feature = "postgres")]
pub mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::PropertiesPgStorage;
