//! Domain layer - property search contract, models, and port definitions

pub mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::*;
