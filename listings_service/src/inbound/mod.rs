//! Inbound adapters - HTTP handlers and other entry points

pub mod http;

pub use http::{PROPERTIES_PATH, router};
