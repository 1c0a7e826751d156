//! Export module for the home inventory
//!
//! The only on-disk artifact of the inventory is a plain-text copy of the
//! listing. It is write-only and never read back.

pub mod text;

pub use text::write_listing;
