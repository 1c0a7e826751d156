//! Plain-text export of the inventory listing
//!
//! The file is created or truncated, written in one go, and closed before
//! the call returns, whether or not the write succeeded.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{InventoryError, InventoryResult};

/// Write `text` verbatim to `path`
pub fn write_listing<P: AsRef<Path>>(path: P, text: &str) -> InventoryResult<()> {
    let path = path.as_ref();
    let export_error = |e: std::io::Error| InventoryError::Export {
        path: path.display().to_string(),
        message: format!("{} ({})", path.display(), e),
    };

    let file = File::create(path).map_err(export_error)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(text.as_bytes()).map_err(export_error)?;
    writer.flush().map_err(export_error)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_writes_text_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Home.txt");
        let listing = "Home{squareFeet=1200, address='1 Main St', city='Springfield', state='IL', zipCode=62704, modelName='Colonial', saleStatus='available'}\n";

        write_listing(&path, listing).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), listing);
    }

    #[test]
    fn test_truncates_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Home.txt");
        fs::write(&path, "a much longer previous listing\n").unwrap();

        write_listing(&path, "short\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "short\n");
    }

    #[test]
    fn test_missing_directory_reports_export_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no-such-dir").join("Home.txt");

        let err = write_listing(&path, "anything").unwrap_err();
        assert!(matches!(err, InventoryError::Export { .. }));
        assert!(err.to_string().starts_with("Failed to print to file: "));
        assert!(err.reason().contains("Home.txt"));
    }
}
