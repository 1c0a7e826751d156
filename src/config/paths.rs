//! Path management for the home inventory
//!
//! ## Path Resolution Order
//!
//! 1. `HOME_INVENTORY_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/home-inventory` or `~/.config/home-inventory`
//! 3. Windows: `%APPDATA%\home-inventory`

use std::path::PathBuf;

use crate::error::InventoryError;

/// Environment variable overriding the base directory
pub const DIR_ENV_VAR: &str = "HOME_INVENTORY_DIR";

/// File name of the printed inventory
pub const EXPORT_FILE_NAME: &str = "Home.txt";

/// Manages all paths used by the home inventory
#[derive(Debug, Clone)]
pub struct InventoryPaths {
    base_dir: PathBuf,
}

impl InventoryPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, InventoryError> {
        let base_dir = match std::env::var(DIR_ENV_VAR) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Default destination of the printed inventory
    pub fn default_export_file(&self) -> PathBuf {
        self.base_dir.join(EXPORT_FILE_NAME)
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), InventoryError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| InventoryError::Io(format!("Failed to create base directory: {}", e)))
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, InventoryError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                InventoryError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("home-inventory"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, InventoryError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| InventoryError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("home-inventory"))
}
