//! CSV Export functionality
//!
//! Every text field is double-quoted with embedded quotes doubled; the
//! amount is written bare with two decimals.

use std::io::Write;
use std::path::Path;

use crate::error::{LedgerError, LedgerResult};
use crate::storage::ExpenseRecord;

use super::create_export_file;

/// Header row of every CSV export
pub const CSV_HEADER: &str = "ID,Description,Amount,Category,Date,Notes";

/// Export expense records to CSV
pub fn export_csv<W: Write>(records: &[ExpenseRecord], writer: &mut W) -> LedgerResult<()> {
    writeln!(writer, "{}", CSV_HEADER).map_err(|e| LedgerError::Export(e.to_string()))?;

    for record in records {
        writeln!(
            writer,
            "{},{},{},{},{},{}",
            quote(&record.id.to_string()),
            quote(&record.description),
            record.amount.format_with_symbol(""),
            quote(&record.category.name),
            quote(&record.date.format("%Y-%m-%d").to_string()),
            quote(record.notes.as_deref().unwrap_or("")),
        )
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(())
}

/// Export expense records to a CSV file at `path`
pub fn export_csv_to_path(records: &[ExpenseRecord], path: &Path) -> LedgerResult<()> {
    let mut writer = create_export_file(path)?;
    export_csv(records, &mut writer)
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}
