//! Storage layer for the expense ledger
//!
//! Persists the whole ledger as two pretty-printed JSON documents under the
//! data directory: `expenses.json` and `categories.json`. Writes are atomic
//! (temp file + rename) and the data directory is created on demand.

pub mod file_io;
pub mod records;

pub use file_io::{quarantine, read_json_list, write_json_atomic};
pub use records::ExpenseRecord;

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::ledger::Ledger;
use crate::models::{Category, Rgb};

/// Everything read back from disk, before it is turned into a [`Ledger`]
#[derive(Debug, Clone, Default)]
pub struct LoadedData {
    pub expenses: Vec<ExpenseRecord>,
    pub categories: Vec<Category>,
}

impl LoadedData {
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty() && self.categories.is_empty()
    }
}

/// Reads and writes the ledger files
pub struct Storage {
    paths: LedgerPaths,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: LedgerPaths) -> Self {
        Self { paths }
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    /// Write the full ledger to disk
    pub fn save(&self, ledger: &Ledger) -> Result<(), LedgerError> {
        self.paths.ensure_directories()?;

        let records = snapshot(ledger);
        let categories = ledger.list_categories();

        write_json_atomic(self.paths.expenses_file(), &records)?;
        write_json_atomic(self.paths.categories_file(), &categories)?;

        debug!(
            "Saved {} expenses and {} categories to {}",
            records.len(),
            categories.len(),
            self.paths.data_dir().display()
        );
        Ok(())
    }

    /// Read both files.
    ///
    /// Missing files read as empty; an unreadable file is a `Storage` error.
    pub fn load(&self) -> Result<LoadedData, LedgerError> {
        let expenses: Vec<ExpenseRecord> = read_json_list(self.paths.expenses_file())?;
        let categories: Vec<Category> = read_json_list(self.paths.categories_file())?;

        debug!(
            "Loaded {} expenses and {} categories",
            expenses.len(),
            categories.len()
        );
        Ok(LoadedData {
            expenses,
            categories,
        })
    }

    /// Load the ledger, recovering from corrupt files.
    ///
    /// Each file whose contents fail to parse is moved aside to
    /// `<file>.corrupt` and treated as empty, so a fresh ledger with the
    /// default categories is the worst case. A file that cannot be opened or
    /// read is left in place and the error is returned.
    pub fn load_or_recover(&self) -> Result<Ledger, LedgerError> {
        let data = LoadedData {
            expenses: load_or_quarantine(&self.paths.expenses_file())?,
            categories: load_or_quarantine(&self.paths.categories_file())?,
        };
        Ok(Ledger::from_loaded(data))
    }

    /// Check whether anything has been saved yet
    pub fn has_data(&self) -> bool {
        self.paths.expenses_file().exists() || self.paths.categories_file().exists()
    }
}

fn load_or_quarantine<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, LedgerError> {
    match read_json_list(path) {
        Ok(items) => Ok(items),
        Err(e) if e.is_corrupt() => {
            warn!("{}", e);
            match quarantine(path) {
                Ok(moved) => warn!("Moved corrupt file to {}", moved.display()),
                Err(e) => warn!("{}", e),
            }
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}

/// The persisted form of every expense, each embedding its current category
pub fn snapshot(ledger: &Ledger) -> Vec<ExpenseRecord> {
    ledger
        .expenses()
        .as_slice()
        .iter()
        .map(|expense| {
            let category = ledger.category_of(expense).cloned().unwrap_or_else(|| {
                warn!(
                    "Expense {} refers to unknown category '{}'",
                    expense.id, expense.category_id
                );
                Category::new(
                    expense.category_id.clone(),
                    expense.category_id.as_str(),
                    Rgb::grey(),
                    "",
                )
            });
            ExpenseRecord::from_expense(expense, category)
        })
        .collect()
}

impl Ledger {
    /// Build a ledger from data read off disk.
    ///
    /// The default categories are used only when none were persisted. A
    /// category embedded in an expense but missing from the registry is
    /// registered from that snapshot.
    pub fn from_loaded(data: LoadedData) -> Self {
        let mut ledger = if data.categories.is_empty() {
            Ledger::new()
        } else {
            Ledger::with_categories(data.categories)
        };

        let mut expenses = Vec::with_capacity(data.expenses.len());
        for record in data.expenses {
            if ledger.get_category(&record.category.id).is_none() {
                debug!("Registering category '{}' from a stored expense", record.category.name);
                if let Err(e) = ledger.categories_mut().add(record.category.clone()) {
                    warn!("{}", e);
                }
            }
            expenses.push(record.into_expense());
        }
        ledger.replace_all(expenses);

        ledger
    }
}
