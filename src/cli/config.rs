//! Configuration CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::{InventoryPaths, Settings};
use crate::error::InventoryResult;

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show resolved paths and current settings
    Show,
    /// Set where the printed inventory is written
    SetExportPath {
        /// Destination file
        path: PathBuf,
    },
    /// Write the printed inventory to the default location again
    ResetExportPath,
    /// Record changes in the audit log
    EnableAudit,
    /// Stop recording changes in the audit log
    DisableAudit,
}

/// Handle a config command
pub fn handle_config_command(
    paths: &InventoryPaths,
    settings: &mut Settings,
    cmd: ConfigCommands,
) -> InventoryResult<()> {
    match cmd {
        ConfigCommands::Show => {
            print!("{}", format_config(paths, settings));
            return Ok(());
        }
        ConfigCommands::SetExportPath { path } => {
            println!("Export path set to: {}", path.display());
            settings.export_path = Some(path);
        }
        ConfigCommands::ResetExportPath => {
            settings.export_path = None;
            println!(
                "Export path reset to: {}",
                paths.default_export_file().display()
            );
        }
        ConfigCommands::EnableAudit => {
            settings.audit_enabled = true;
            println!("Audit logging enabled.");
        }
        ConfigCommands::DisableAudit => {
            settings.audit_enabled = false;
            println!("Audit logging disabled.");
        }
    }

    settings.save(paths)
}

/// Render the configuration summary
pub fn format_config(paths: &InventoryPaths, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str("Home Inventory Configuration\n");
    output.push_str("============================\n");
    output.push_str(&format!("Base directory: {}\n", paths.base_dir().display()));
    output.push_str(&format!("Settings file:  {}\n", paths.settings_file().display()));
    output.push_str(&format!("Audit log:      {}\n", paths.audit_log().display()));
    output.push('\n');
    output.push_str("Settings:\n");
    output.push_str(&format!(
        "  Export file:    {}\n",
        settings.export_file(paths).display()
    ));
    output.push_str(&format!(
        "  Audit logging:  {}\n",
        if settings.audit_enabled { "on" } else { "off" }
    ));
    output.push_str(&format!(
        "  Sale statuses:  {}\n",
        settings.sale_statuses.join(", ")
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_format_config() {
        let temp_dir = TempDir::new().unwrap();
        let paths = InventoryPaths::with_base_dir(temp_dir.path().to_path_buf());

        let output = format_config(&paths, &Settings::default());
        assert!(output.contains("Home.txt"));
        assert!(output.contains("Audit logging:  off"));
        assert!(output.contains("sold, available, under contract"));
    }

    #[test]
    fn test_set_export_path_persists() {
        let temp_dir = TempDir::new().unwrap();
        let paths = InventoryPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();
        let target = temp_dir.path().join("listing.txt");

        handle_config_command(
            &paths,
            &mut settings,
            ConfigCommands::SetExportPath {
                path: target.clone(),
            },
        )
        .unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.export_path, Some(target));
    }

    #[test]
    fn test_audit_toggle_persists() {
        let temp_dir = TempDir::new().unwrap();
        let paths = InventoryPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        handle_config_command(&paths, &mut settings, ConfigCommands::EnableAudit).unwrap();
        assert!(Settings::load_or_create(&paths).unwrap().audit_enabled);

        handle_config_command(&paths, &mut settings, ConfigCommands::DisableAudit).unwrap();
        assert!(!Settings::load_or_create(&paths).unwrap().audit_enabled);
    }
}
