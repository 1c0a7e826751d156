//! Append-only audit log
//!
//! One JSON object per line. Writes open the file in append mode and flush
//! before returning; reads stream the file and keep only the tail.

use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{InventoryError, InventoryResult};

use super::entry::AuditEntry;

/// The tail of the log plus the total number of entries in it
#[derive(Debug, Default)]
pub struct RecentEntries {
    pub entries: Vec<AuditEntry>,
    pub total: usize,
}

/// Reads and appends inventory changes at a fixed path
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }

    /// Append one entry
    pub fn log(&self, entry: &AuditEntry) -> InventoryResult<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| InventoryError::Io(format!("Failed to open audit log: {}", e)))?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, entry)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    /// The last `limit` entries, oldest first. A missing log is empty.
    pub fn recent(&self, limit: usize) -> InventoryResult<RecentEntries> {
        let file = match File::open(&self.log_path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(RecentEntries::default())
            }
            Err(e) => {
                return Err(InventoryError::Io(format!(
                    "Failed to open audit log: {}",
                    e
                )))
            }
        };

        let mut tail = VecDeque::new();
        let mut total = 0;
        let stream = serde_json::Deserializer::from_reader(BufReader::new(file))
            .into_iter::<AuditEntry>();
        for entry in stream {
            let entry = entry.map_err(|e| {
                InventoryError::Json(format!("Bad audit entry after {} entries: {}", total, e))
            })?;
            total += 1;
            if limit == 0 {
                continue;
            }
            if tail.len() == limit {
                tail.pop_front();
            }
            tail.push_back(entry);
        }

        Ok(RecentEntries {
            entries: tail.into(),
            total,
        })
    }
}
