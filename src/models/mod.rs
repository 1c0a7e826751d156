//! Core data models for the home inventory
//!
//! The inventory has a single record type: a home listing.

pub mod home;

pub use home::{HomeRecord, HomeValidationError, DEFAULT_SALE_STATUSES};
