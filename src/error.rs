//! Custom error types for the home inventory
//!
//! Every domain failure renders as the prefixed, human-readable message the
//! shell prints (`Failed to <action>: <reason>`), so callers never need to
//! format errors themselves.

use std::fmt;

use thiserror::Error;

use crate::models::HomeValidationError;

/// The inventory operation an error originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
    Update,
    List,
    PrintToFile,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Add => write!(f, "add home"),
            Action::Remove => write!(f, "remove home"),
            Action::Update => write!(f, "update home"),
            Action::List => write!(f, "list homes"),
            Action::PrintToFile => write!(f, "print to file"),
        }
    }
}

/// The main error type for inventory operations
#[derive(Error, Debug)]
pub enum InventoryError {
    /// A new home failed its presence/positivity checks
    #[error("Failed to add home: Invalid input.")]
    InvalidInput(HomeValidationError),

    /// No home matched the identifying (address, ZIP code) pair
    #[error("Failed to {action}: Home not found.")]
    NotFound {
        action: Action,
        address: String,
        zip_code: i64,
    },

    /// Listing an inventory with no homes
    #[error("Failed to list homes: No homes available.")]
    Empty,

    /// Writing the listing to a file failed
    #[error("Failed to print to file: {message}")]
    Export { path: String, message: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl InventoryError {
    /// Create a "not found" error for a lookup by address and ZIP code
    pub fn home_not_found(action: Action, address: impl Into<String>, zip_code: i64) -> Self {
        Self::NotFound {
            action,
            address: address.into(),
            zip_code,
        }
    }

    /// The bare reason, without the `Failed to <action>:` prefix
    pub fn reason(&self) -> String {
        match self {
            Self::InvalidInput(_) => "Invalid input.".to_string(),
            Self::NotFound { .. } => "Home not found.".to_string(),
            Self::Empty => "No homes available.".to_string(),
            Self::Export { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

}

impl From<HomeValidationError> for InventoryError {
    fn from(err: HomeValidationError) -> Self {
        Self::InvalidInput(err)
    }
}

impl From<std::io::Error> for InventoryError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for InventoryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for inventory operations
pub type InventoryResult<T> = Result<T, InventoryError>;
