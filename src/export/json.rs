//! JSON Export functionality
//!
//! The export is the pretty-printed list of expense records, byte-compatible
//! with the `expenses.json` data file.

use std::io::Write;
use std::path::Path;

use crate::error::{LedgerError, LedgerResult};
use crate::storage::ExpenseRecord;

use super::create_export_file;

/// Export expense records as a pretty-printed JSON array
pub fn export_json<W: Write>(records: &[ExpenseRecord], writer: &mut W) -> LedgerResult<()> {
    serde_json::to_writer_pretty(&mut *writer, records)
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))?;
    writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(())
}

/// Export expense records to a JSON file at `path`
pub fn export_json_to_path(records: &[ExpenseRecord], path: &Path) -> LedgerResult<()> {
    let mut writer = create_export_file(path)?;
    export_json(records, &mut writer)
}

/// Parse a JSON export back into records
pub fn import_from_json(json_str: &str) -> LedgerResult<Vec<ExpenseRecord>> {
    let records: Option<Vec<ExpenseRecord>> =
        serde_json::from_str(json_str).map_err(|e| LedgerError::Import(e.to_string()))?;
    Ok(records.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ExpenseId, Money, Rgb};
    use chrono::NaiveDate;

    fn record(description: &str, cents: i64) -> ExpenseRecord {
        ExpenseRecord {
            id: ExpenseId::new(),
            description: description.to_string(),
            amount: Money::from_cents(cents),
            category: Category::new("2", "Travel", Rgb::new(65, 105, 225), "✈️"),
            date: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            notes: Some("airport".to_string()),
        }
    }

    #[test]
    fn test_json_roundtrip() {
        let records = vec![record("Taxi", 3999), record("Train", 1)];

        let mut out = Vec::new();
        export_json(&records, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("[\n"));

        let imported = import_from_json(&text).unwrap();
        assert_eq!(imported, records);
    }

    #[test]
    fn test_empty_export() {
        let mut out = Vec::new();
        export_json(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().trim(), "[]");
    }

    #[test]
    fn test_import_rejects_garbage() {
        let err = import_from_json("{\"not\": \"a list\"}").unwrap_err();
        assert!(matches!(err, LedgerError::Import(_)));
        assert!(import_from_json("null").unwrap().is_empty());
    }
}
