//! Home Inventory - console-driven inventory manager for real-estate homes
//!
//! Homes live in an in-memory, insertion-ordered store for the length of a
//! session. The interactive shell adds, removes, updates and lists them, and
//! can print the listing to a plain-text file on exit.
//!
//! # Architecture
//!
//! - `models`: the `HomeRecord` type, its validation and rendering
//! - `storage`: the in-memory `HomeStore` and JSON file helpers
//! - `services`: `InventoryService`, turning results into printable outcomes
//! - `export`: plain-text listing export
//! - `shell`: the interactive menu loop
//! - `audit`: append-only log of inventory changes
//! - `config`: path resolution and user settings
//! - `error`: custom error types
//! - `logging`: tracing subscriber setup
//! - `cli`: command handlers used by the binary
//!
//! # Example
//!
//! ```
//! use home_inventory::models::HomeRecord;
//! use home_inventory::services::InventoryService;
//!
//! let mut service = InventoryService::new();
//! let home = HomeRecord::new(1200, "1 Main St", "Springfield", "IL", 62704, "Colonial", "available");
//! assert_eq!(service.add_home(home).message(), "Home added successfully.");
//! assert_eq!(
//!     service.update_home("1 Main St", 62704, "sold").message(),
//!     "Home updated successfully."
//! );
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod shell;
pub mod storage;

pub use error::{InventoryError, InventoryResult};
