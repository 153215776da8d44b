//! CLI commands for data export and import

use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::error::LedgerResult;
use crate::export::{export_csv_to_path, export_json_to_path};
use crate::ledger::Ledger;
use crate::services::ImportService;
use crate::storage::snapshot;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export all expenses to CSV
    Csv {
        /// Output file path
        output: PathBuf,
    },

    /// Export all expenses to JSON
    Json {
        /// Output file path
        output: PathBuf,
    },
}

/// Handle export commands
pub fn handle_export_command(ledger: &Ledger, cmd: ExportCommands) -> LedgerResult<()> {
    let records = snapshot(ledger);

    let output = match cmd {
        ExportCommands::Csv { output } => {
            export_csv_to_path(&records, &output)?;
            output
        }
        ExportCommands::Json { output } => {
            export_json_to_path(&records, &output)?;
            output
        }
    };

    println!("Exported {} expense(s) to {}", records.len(), output.display());
    Ok(())
}

/// Handle `import`
pub fn handle_import_command(ledger: &mut Ledger, path: &Path) -> LedgerResult<()> {
    let result = ImportService::new(ledger).import_path(path)?;

    println!("Imported {} expense(s)", result.imported);
    if result.duplicates_skipped > 0 {
        println!("Skipped {} already present", result.duplicates_skipped);
    }
    for name in &result.categories_created {
        println!("Created category: {}", name);
    }
    if !result.errors.is_empty() {
        println!("{} row(s) failed:", result.error_count());
        for (row, message) in &result.errors {
            println!("  row {}: {}", row, message);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, Expense, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_export_then_import_into_fresh_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = Ledger::new();
        ledger
            .add_expense(Expense::new(
                "Lunch",
                Money::from_cents(1250),
                CategoryId::from("1"),
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                None,
            ))
            .unwrap();

        for name in ["out.csv", "out.json"] {
            let path = temp_dir.path().join(name);
            let cmd = if name.ends_with("csv") {
                ExportCommands::Csv {
                    output: path.clone(),
                }
            } else {
                ExportCommands::Json {
                    output: path.clone(),
                }
            };
            handle_export_command(&ledger, cmd).unwrap();

            let mut fresh = Ledger::new();
            handle_import_command(&mut fresh, &path).unwrap();
            assert_eq!(fresh.list_expenses(), ledger.list_expenses());
        }
    }
}
