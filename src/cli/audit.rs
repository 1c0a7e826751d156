//! Audit log CLI command

use crate::audit::AuditLogger;
use crate::config::InventoryPaths;
use crate::error::InventoryResult;

/// Print the most recent audit entries
pub fn handle_audit_command(paths: &InventoryPaths, limit: usize) -> InventoryResult<()> {
    let recent = AuditLogger::new(paths.audit_log()).recent(limit)?;

    if recent.entries.is_empty() {
        println!("No audit entries found.");
        return Ok(());
    }

    for entry in &recent.entries {
        println!("{}", entry.format_human_readable());
    }

    println!(
        "\nShowing {} of {} entries",
        recent.entries.len(),
        recent.total
    );
    Ok(())
}
