//! Storage layer for the home inventory
//!
//! The inventory itself lives only in memory for the life of the process.
//! The file helpers here back the settings file.

pub mod file_io;
pub mod homes;

pub use file_io::{read_json, write_json_atomic};
pub use homes::{HomeStore, StatusChange};
