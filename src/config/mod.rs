//! Configuration module for the home inventory
//!
//! - Platform-aware path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::{InventoryPaths, EXPORT_FILE_NAME};
pub use settings::Settings;
