//! Export module for the expense ledger
//!
//! Writes the persisted expense records in two formats:
//! - CSV: one quoted row per expense (spreadsheet-compatible)
//! - JSON: the same document layout as `expenses.json`

pub mod csv;
pub mod json;

pub use csv::{export_csv, export_csv_to_path, CSV_HEADER};
pub use json::{export_json, export_json_to_path, import_from_json};

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use crate::error::{LedgerError, LedgerResult};

/// Create `path` (and its parent directory) for writing an export
pub(crate) fn create_export_file(path: &Path) -> LedgerResult<BufWriter<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Export(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = File::create(path).map_err(|e| {
        LedgerError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
