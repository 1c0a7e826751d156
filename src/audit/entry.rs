//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::HomeRecord;
use crate::storage::StatusChange;

/// Kind of change made to the inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Home was added
    Create,
    /// Home's sale status changed
    Update,
    /// Home was removed
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// One recorded change to a home
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the change happened (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    /// Identifying pair of the home, as `address#zip`
    pub home_key: String,

    /// The home before the change (updates, removals)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<HomeRecord>,

    /// The home after the change (additions, updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<HomeRecord>,
}

impl AuditEntry {
    /// Entry for an added home
    pub fn added(home: &HomeRecord) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            home_key: home.key(),
            before: None,
            after: Some(home.clone()),
        }
    }

    /// Entry for a sale status change
    pub fn status_changed(change: &StatusChange) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            home_key: change.after.key(),
            before: Some(change.before.clone()),
            after: Some(change.after.clone()),
        }
    }

    /// Entry for a removed home
    pub fn removed(home: &HomeRecord) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            home_key: home.key(),
            before: Some(home.clone()),
            after: None,
        }
    }

    /// `sale_status: 'old' -> 'new'` for status changes
    pub fn status_summary(&self) -> Option<String> {
        match (&self.before, &self.after) {
            (Some(before), Some(after)) => Some(format!(
                "sale_status: '{}' -> '{}'",
                before.sale_status, after.sale_status
            )),
            _ => None,
        }
    }

    /// One or two lines for the `audit` command
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.home_key
        );

        if let Some(summary) = self.status_summary() {
            output.push_str(&format!("\n  Changes: {}", summary));
        }

        output
    }
}
