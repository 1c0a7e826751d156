//! Inventory service
//!
//! Wraps the in-memory [`HomeStore`] and turns every result into an
//! [`Outcome`] the shell can print directly. Successful changes are also
//! written to the audit log when one is attached; a failed audit write is
//! only logged.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{InventoryPaths, Settings};
use crate::error::InventoryError;
use crate::export;
use crate::models::{HomeRecord, DEFAULT_SALE_STATUSES};
use crate::storage::HomeStore;

use super::outcome::Outcome;

/// Service owning the inventory for one session
pub struct InventoryService {
    store: HomeStore,
    audit: Option<AuditLogger>,
    sale_statuses: Vec<String>,
}

impl Default for InventoryService {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryService {
    /// Create a service with an empty store and no audit log
    pub fn new() -> Self {
        Self {
            store: HomeStore::new(),
            audit: None,
            sale_statuses: DEFAULT_SALE_STATUSES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Create a service configured from user settings
    pub fn from_settings(settings: &Settings, paths: &InventoryPaths) -> Self {
        let mut service = Self::new();
        service.sale_statuses = settings.sale_statuses.clone();
        if settings.audit_enabled {
            service.audit = Some(AuditLogger::new(paths.audit_log()));
        }
        service
    }

    /// Attach an audit logger
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Add a new home
    pub fn add_home(&mut self, home: HomeRecord) -> Outcome {
        if !home.sale_status.is_empty() && !self.is_known_status(&home.sale_status) {
            warn!(status = %home.sale_status, "Unrecognized sale status");
        }

        match self.store.add(home) {
            Ok(added) => {
                info!(home = %added.key(), "Home added");
                let entry = AuditEntry::added(added);
                self.record(&entry);
                Outcome::success("Home added successfully.")
            }
            Err(e) => {
                if let InventoryError::InvalidInput(reason) = &e {
                    warn!(%reason, "Rejected home");
                }
                Outcome::from(&e)
            }
        }
    }

    /// Remove the first home matching the address and ZIP code
    pub fn remove_home(&mut self, address: &str, zip_code: i64) -> Outcome {
        match self.store.remove(address, zip_code) {
            Ok(removed) => {
                info!(home = %removed.key(), "Home removed");
                self.record(&AuditEntry::removed(&removed));
                Outcome::success("Home removed successfully.")
            }
            Err(e) => {
                warn!(address, zip_code, "No home to remove");
                Outcome::from(&e)
            }
        }
    }

    /// Change the sale status of the first matching home
    pub fn update_home(&mut self, address: &str, zip_code: i64, new_sale_status: &str) -> Outcome {
        if !self.is_known_status(new_sale_status) {
            warn!(status = new_sale_status, "Unrecognized sale status");
        }

        match self.store.update(address, zip_code, new_sale_status) {
            Ok(change) => {
                info!(home = %change.after.key(), status = new_sale_status, "Home updated");
                self.record(&AuditEntry::status_changed(&change));
                Outcome::success("Home updated successfully.")
            }
            Err(e) => {
                warn!(address, zip_code, "No home to update");
                Outcome::from(&e)
            }
        }
    }

    /// Render the whole inventory
    pub fn list_homes(&self) -> Outcome {
        match self.store.list() {
            Ok(listing) => {
                debug!(count = self.store.len(), "Listed homes");
                Outcome::Success(listing)
            }
            Err(e) => Outcome::from(&e),
        }
    }

    /// Write the current listing (or the empty-inventory message) to a file
    pub fn print_to_file(&self, path: &Path) -> Outcome {
        let listing = self.list_homes();

        match export::write_listing(path, listing.message()) {
            Ok(()) => {
                info!(path = %path.display(), "Inventory printed to file");
                Outcome::success("Information printed to file.")
            }
            Err(e) => {
                warn!(error = %e, "Inventory export failed");
                Outcome::from(&e)
            }
        }
    }

    /// Read-only access to the underlying store
    pub fn store(&self) -> &HomeStore {
        &self.store
    }

    /// Sale statuses suggested at the prompt
    pub fn sale_statuses(&self) -> &[String] {
        &self.sale_statuses
    }

    fn is_known_status(&self, status: &str) -> bool {
        self.sale_statuses.iter().any(|s| s == status)
    }

    fn record(&self, entry: &AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(entry) {
                warn!(error = %e, path = %logger.path().display(), "Failed to write audit entry");
            }
        }
    }
}
