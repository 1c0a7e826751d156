//! Audit logging for inventory changes
//!
//! Off unless `audit_enabled` is set. When on, every successful add, remove
//! and status update is appended to a JSONL log with the home's before and
//! after values.
//!
//! # Example
//!
//! ```rust,ignore
//! use home_inventory::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::added(&home))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::{AuditLogger, RecentEntries};
