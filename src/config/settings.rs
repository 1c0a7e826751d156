//! User settings for the home inventory
//!
//! Stored as `config.json` in the base directory. Every field has a default,
//! so a missing or partial file is always usable.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::InventoryPaths;
use crate::error::InventoryError;
use crate::models::DEFAULT_SALE_STATUSES;
use crate::storage::{read_json, write_json_atomic};

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Where the printed inventory goes; `None` means `Home.txt` in the base directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_path: Option<PathBuf>,

    /// Whether add/remove/update are recorded in the audit log (opt-in)
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    /// Sale statuses suggested at the prompt
    #[serde(default = "default_sale_statuses")]
    pub sale_statuses: Vec<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_audit_enabled() -> bool {
    false
}

fn default_sale_statuses() -> Vec<String> {
    DEFAULT_SALE_STATUSES.iter().map(|s| s.to_string()).collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            export_path: None,
            audit_enabled: default_audit_enabled(),
            sale_statuses: default_sale_statuses(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &InventoryPaths) -> Result<Self, InventoryError> {
        read_json(paths.settings_file()).map_err(|e| {
            InventoryError::Config(format!("Failed to load settings: {}", e))
        })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &InventoryPaths) -> Result<(), InventoryError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Resolve the export destination
    pub fn export_file(&self, paths: &InventoryPaths) -> PathBuf {
        self.export_path
            .clone()
            .unwrap_or_else(|| paths.default_export_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(!settings.audit_enabled);
        assert!(settings.export_path.is_none());
        assert_eq!(
            settings.sale_statuses,
            vec!["sold", "available", "under contract"]
        );
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = InventoryPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            export_path: Some(temp_dir.path().join("out.txt")),
            audit_enabled: true,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = InventoryPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"audit_enabled": true}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(loaded.audit_enabled);
        assert_eq!(loaded.schema_version, 1);
        assert_eq!(loaded.sale_statuses.len(), 3);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = InventoryPaths::with_base_dir(temp_dir.path().to_path_buf());

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn test_export_file_resolution() {
        let temp_dir = TempDir::new().unwrap();
        let paths = InventoryPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        assert_eq!(settings.export_file(&paths), temp_dir.path().join("Home.txt"));

        settings.export_path = Some(PathBuf::from("/tmp/listing.txt"));
        assert_eq!(settings.export_file(&paths), PathBuf::from("/tmp/listing.txt"));
    }
}
