//! Path management for the expense ledger
//!
//! All file locations are derived from a single base directory that is passed
//! around explicitly instead of living in globals.
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_LEDGER_DIR` environment variable (if set)
//! 2. The platform data directory reported by `directories`
//!    (e.g. `~/.local/share/expense-ledger` on Linux)
//! 3. `./.expense-ledger` when no home directory can be determined

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::LedgerError;

/// Environment variable that overrides the base directory
pub const DIR_ENV_VAR: &str = "EXPENSE_LEDGER_DIR";

const EXPENSES_FILE: &str = "expenses.json";
const CATEGORIES_FILE: &str = "categories.json";

/// Manages all paths used by the expense ledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    /// Base directory for settings and data
    base_dir: PathBuf,
    expenses_file_name: String,
    categories_file_name: String,
}

impl LedgerPaths {
    /// Resolve the base directory from the environment or the platform default
    pub fn new() -> Result<Self, LedgerError> {
        let base_dir = match std::env::var(DIR_ENV_VAR) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path(),
        };

        Ok(Self::with_base_dir(base_dir))
    }

    /// Create LedgerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            expenses_file_name: EXPENSES_FILE.to_string(),
            categories_file_name: CATEGORIES_FILE.to_string(),
        }
    }

    /// Override the file names used for the persisted collections
    pub fn with_file_names(
        mut self,
        expenses: impl Into<String>,
        categories: impl Into<String>,
    ) -> Self {
        self.expenses_file_name = expenses.into();
        self.categories_file_name = categories.into();
        self
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the persisted expenses
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join(&self.expenses_file_name)
    }

    /// Get the path to the persisted categories
    pub fn categories_file(&self) -> PathBuf {
        self.data_dir().join(&self.categories_file_name)
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), LedgerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LedgerError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| LedgerError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> PathBuf {
    ProjectDirs::from("", "", "expense-ledger")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".expense-ledger"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.expenses_file(),
            temp_dir.path().join("data").join("expenses.json")
        );
        assert_eq!(
            paths.categories_file(),
            temp_dir.path().join("data").join("categories.json")
        );
    }

    #[test]
    fn test_custom_file_names() {
        let paths = LedgerPaths::with_base_dir("/tmp/ledger").with_file_names("e.json", "c.json");
        assert!(paths.expenses_file().ends_with("data/e.json"));
        assert!(paths.categories_file().ends_with("data/c.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
    }
}
