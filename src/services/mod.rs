//! Service layer for the home inventory
//!
//! The service sits between the shell and the in-memory store, converting
//! typed results into printable outcomes and recording audit entries.

pub mod home;
pub mod outcome;

pub use home::InventoryService;
pub use outcome::Outcome;
