//! Listings Database Client
//!
//! This crate provides database access functions for the listings service: the
//! filtered property search and the plain inserts used to seed the store.

pub mod clear;
pub mod error;
pub mod owners;
pub mod properties;
pub mod property_images;
pub mod property_traces;
