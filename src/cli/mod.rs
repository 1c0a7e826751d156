//! CLI command handlers
//!
//! Bridges clap argument parsing with the shell and the settings/audit files.

pub mod audit;
pub mod config;

use std::io;
use std::path::PathBuf;

use tracing::warn;

use crate::config::{InventoryPaths, Settings, EXPORT_FILE_NAME};
use crate::error::InventoryResult;
use crate::services::InventoryService;
use crate::shell::Shell;

pub use audit::handle_audit_command;
pub use config::{handle_config_command, ConfigCommands};

/// Run the interactive shell on stdin/stdout
pub fn run_shell(export_file: Option<PathBuf>) -> InventoryResult<()> {
    let (service, export_path) = prepare_session(InventoryPaths::new(), export_file);

    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), service, export_path);
    shell.run()
}

/// Build the service and export destination for a shell session.
///
/// The inventory is in memory, so an unusable base directory or settings
/// file only costs the configured extras: the session falls back to default
/// settings, with no audit log, and `Home.txt` in the working directory
/// when no base directory resolves.
pub fn prepare_session(
    paths: InventoryResult<InventoryPaths>,
    export_file: Option<PathBuf>,
) -> (InventoryService, PathBuf) {
    let paths = match paths {
        Ok(paths) => paths,
        Err(e) => {
            warn!(error = %e, "No base directory, running with default settings");
            let export_path = export_file.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
            return (InventoryService::new(), export_path);
        }
    };

    let mut settings = Settings::load_or_create(&paths).unwrap_or_else(|e| {
        warn!(error = %e, "Ignoring unreadable settings");
        Settings::default()
    });
    let export_path = export_file.unwrap_or_else(|| settings.export_file(&paths));

    if settings.audit_enabled || export_path.starts_with(paths.base_dir()) {
        if let Err(e) = paths.ensure_directories() {
            warn!(error = %e, "Base directory unavailable, audit log disabled");
            settings.audit_enabled = false;
        }
    }

    (InventoryService::from_settings(&settings, &paths), export_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InventoryError;
    use crate::models::HomeRecord;
    use std::fs;
    use tempfile::TempDir;

    fn colonial() -> HomeRecord {
        HomeRecord::new(
            1200,
            "1 Main St",
            "Springfield",
            "IL",
            62704,
            "Colonial",
            "available",
        )
    }

    #[test]
    fn test_unresolved_paths_fall_back_to_working_directory() {
        let unresolved = Err(InventoryError::Config("HOME environment variable not set".into()));

        let (mut service, export_path) = prepare_session(unresolved, None);

        assert_eq!(export_path, PathBuf::from("Home.txt"));
        assert!(service.add_home(colonial()).is_success());
    }

    #[test]
    fn test_malformed_settings_use_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = InventoryPaths::with_base_dir(temp_dir.path().to_path_buf());
        fs::write(paths.settings_file(), "{ not json").unwrap();

        let (mut service, export_path) = prepare_session(Ok(paths.clone()), None);

        assert_eq!(export_path, paths.default_export_file());
        assert!(service.add_home(colonial()).is_success());
        assert!(!paths.audit_log().exists());
    }

    #[test]
    fn test_base_dir_that_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let not_a_dir = temp_dir.path().join("inventory");
        fs::write(&not_a_dir, "").unwrap();
        let paths = InventoryPaths::with_base_dir(not_a_dir.clone());

        let (mut service, export_path) = prepare_session(Ok(paths), None);

        assert_eq!(export_path, not_a_dir.join("Home.txt"));
        assert!(service.add_home(colonial()).is_success());
        assert!(service.list_homes().is_success());
        assert!(!service.print_to_file(&export_path).is_success());
    }

    #[test]
    fn test_default_session_creates_nothing_until_export() {
        let temp_dir = TempDir::new().unwrap();
        let paths = InventoryPaths::with_base_dir(temp_dir.path().join("fresh"));

        let (mut service, export_path) = prepare_session(Ok(paths.clone()), None);
        service.add_home(colonial());
        service.remove_home("1 Main St", 62704);

        assert!(paths.base_dir().is_dir());
        assert_eq!(fs::read_dir(paths.base_dir()).unwrap().count(), 0);

        assert!(service.print_to_file(&export_path).is_success());
        let names: Vec<_> = fs::read_dir(paths.base_dir())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec!["Home.txt"]);
    }

    #[test]
    fn test_export_elsewhere_leaves_base_dir_alone() {
        let temp_dir = TempDir::new().unwrap();
        let paths = InventoryPaths::with_base_dir(temp_dir.path().join("fresh"));
        let target = temp_dir.path().join("listing.txt");

        let (_, export_path) = prepare_session(Ok(paths.clone()), Some(target.clone()));

        assert_eq!(export_path, target);
        assert!(!paths.base_dir().exists());
    }
}
