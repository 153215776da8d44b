//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::LedgerError;

/// Read a JSON list from a file.
///
/// A missing file or a literal `null` yields an empty list. Contents that do
/// not parse give [`LedgerError::CorruptData`]; failures to open or read the
/// file give [`LedgerError::Storage`].
pub fn read_json_list<T, P>(path: P) -> Result<Vec<T>, LedgerError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .map_err(|e| LedgerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    let parsed: Option<Vec<T>> = serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            LedgerError::Storage(format!("Failed to read {}: {}", path.display(), e))
        } else {
            LedgerError::CorruptData {
                path: path.display().to_string(),
                message: e.to_string(),
            }
        }
    })?;

    Ok(parsed.unwrap_or_default())
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The target is either completely written or left as it was.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), LedgerError>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in the same directory so the rename stays on one filesystem
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = std::path::PathBuf::from(temp_name);

    let file = File::create(&temp_path)
        .map_err(|e| LedgerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| LedgerError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| LedgerError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| LedgerError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        LedgerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Move an unreadable file out of the way, returning where it went
pub fn quarantine<P: AsRef<Path>>(path: P) -> Result<std::path::PathBuf, LedgerError> {
    let path = path.as_ref();
    let mut target = path.as_os_str().to_owned();
    target.push(".corrupt");
    let target = std::path::PathBuf::from(target);

    fs::rename(path, &target).map_err(|e| {
        LedgerError::Storage(format!("Failed to move aside {}: {}", path.display(), e))
    })?;

    Ok(target)
}
