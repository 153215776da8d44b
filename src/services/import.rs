//! Import service
//!
//! Reads expenses back from the CSV and JSON export formats. Rows whose id
//! already exists are skipped, so importing the same file twice is harmless.
//! A category named in a CSV row that the registry does not know is created
//! with a grey colour; a JSON record registers its embedded category as is.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use crate::error::{LedgerError, LedgerResult};
use crate::export::import_from_json;
use crate::ledger::Ledger;
use crate::models::{Category, CategoryId, Expense, ExpenseId, Money, Rgb};
use crate::storage::ExpenseRecord;

/// Column order of the CSV export
const COLUMNS: [&str; 6] = ["ID", "Description", "Amount", "Category", "Date", "Notes"];

/// Result of a completed import
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    /// Number of expenses imported
    pub imported: usize,
    /// Number of rows skipped because their id already exists
    pub duplicates_skipped: usize,
    /// Categories created on the fly
    pub categories_created: Vec<String>,
    /// Error messages by CSV line (header is line 1) or 1-based JSON record
    pub errors: BTreeMap<usize, String>,
}

impl ImportResult {
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

/// A CSV row after field parsing, before category resolution
#[derive(Debug, Clone)]
struct ParsedRow {
    id: Option<ExpenseId>,
    description: String,
    amount: Money,
    category_name: String,
    date: NaiveDate,
    notes: Option<String>,
}

/// Service for importing expenses
pub struct ImportService<'a> {
    ledger: &'a mut Ledger,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    /// Import a file, choosing the format from its extension (`.json` or CSV)
    pub fn import_path(&mut self, path: &Path) -> LedgerResult<ImportResult> {
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let mut file = File::open(path)
            .map_err(|e| LedgerError::Import(format!("Failed to open {}: {}", path.display(), e)))?;

        let result = if is_json {
            let mut contents = String::new();
            file.read_to_string(&mut contents)
                .map_err(|e| LedgerError::Import(e.to_string()))?;
            self.import_records(import_from_json(&contents)?)
        } else {
            self.import_csv(file)?
        };

        info!(
            "Imported {} expenses from {} ({} skipped, {} errors)",
            result.imported,
            path.display(),
            result.duplicates_skipped,
            result.error_count()
        );
        Ok(result)
    }

    /// Import the CSV export format from a reader
    pub fn import_csv<R: Read>(&mut self, reader: R) -> LedgerResult<ImportResult> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::Fields)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| LedgerError::Import(format!("Failed to read CSV header: {}", e)))?
            .clone();
        check_headers(&headers)?;

        let mut result = ImportResult::default();

        for (idx, record) in reader.records().enumerate() {
            let line = idx + 2;
            let parsed = record
                .map_err(|e| format!("Error reading CSV record: {}", e))
                .and_then(|record| parse_row(&record));

            let row = match parsed {
                Ok(row) => row,
                Err(message) => {
                    result.errors.insert(line, message);
                    continue;
                }
            };

            if let Err(message) = self.import_row(row, &mut result) {
                result.errors.insert(line, message);
            }
        }

        Ok(result)
    }

    /// Import already-parsed records (the JSON export format)
    pub fn import_records(&mut self, records: Vec<ExpenseRecord>) -> ImportResult {
        let mut result = ImportResult::default();

        for (idx, record) in records.into_iter().enumerate() {
            if self.ledger.get_expense(&record.id).is_some() {
                result.duplicates_skipped += 1;
                continue;
            }

            match self.import_record(record, &mut result) {
                Ok(()) => result.imported += 1,
                Err(message) => {
                    result.errors.insert(idx + 1, message);
                }
            }
        }

        result
    }

    fn import_record(
        &mut self,
        record: ExpenseRecord,
        result: &mut ImportResult,
    ) -> Result<(), String> {
        let category = record.category.clone();
        let expense = record.into_expense();
        // Validate before an unknown embedded category gets registered
        expense.validate().map_err(|e| e.to_string())?;

        if self.ledger.get_category(&category.id).is_none() {
            let name = category.name.clone();
            self.ledger
                .add_category(category)
                .map_err(|e| e.to_string())?;
            result.categories_created.push(name);
        }

        self.add_validated(expense)
    }

    fn import_row(&mut self, row: ParsedRow, result: &mut ImportResult) -> Result<(), String> {
        if let Some(id) = &row.id {
            if self.ledger.get_expense(id).is_some() {
                result.duplicates_skipped += 1;
                return Ok(());
            }
        }

        let mut expense = Expense::with_id(
            row.id.unwrap_or_default(),
            row.description,
            row.amount,
            CategoryId::new(row.category_name.as_str()),
            row.date,
            row.notes,
        );
        // Validate before a missing category gets created for this row
        expense.validate().map_err(|e| e.to_string())?;

        expense.category_id = self.category_for_name(&row.category_name, result)?;
        self.add_validated(expense)?;
        result.imported += 1;
        Ok(())
    }

    fn category_for_name(
        &mut self,
        name: &str,
        result: &mut ImportResult,
    ) -> Result<CategoryId, String> {
        if let Some(existing) = self.ledger.categories().find_by_name(name) {
            return Ok(existing.id.clone());
        }

        let id = self.ledger.categories().next_numeric_id();
        let category = Category::new(id.clone(), name, Rgb::grey(), "");
        self.ledger
            .add_category(category)
            .map_err(|e| e.to_string())?;

        debug!("Created category '{}' during import", name);
        result.categories_created.push(name.to_string());
        Ok(id)
    }

    fn add_validated(&mut self, expense: Expense) -> Result<(), String> {
        expense.validate().map_err(|e| e.to_string())?;
        self.ledger.add_expense(expense).map_err(|e| e.to_string())
    }
}

fn check_headers(headers: &StringRecord) -> LedgerResult<()> {
    let matches = headers.len() >= COLUMNS.len()
        && headers
            .iter()
            .zip(COLUMNS)
            .all(|(found, expected)| found.eq_ignore_ascii_case(expected));

    if matches {
        Ok(())
    } else {
        Err(LedgerError::Import(format!(
            "Unexpected CSV header, expected: {}",
            COLUMNS.join(",")
        )))
    }
}

fn parse_row(record: &StringRecord) -> Result<ParsedRow, String> {
    let field = |idx: usize| record.get(idx).unwrap_or("");

    let id = match field(0) {
        "" => None,
        raw => Some(ExpenseId::parse(raw).map_err(|_| format!("Invalid id: '{}'", raw))?),
    };

    let amount_str = field(2);
    let amount =
        Money::parse(amount_str).map_err(|e| format!("Invalid amount '{}': {}", amount_str, e))?;

    let category_name = field(3).to_string();
    if category_name.is_empty() {
        return Err("Missing category".to_string());
    }

    let date_str = field(4);
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| format!("Could not parse date: '{}'", date_str))?;

    let notes = Some(field(5).to_string()).filter(|n| !n.is_empty());

    Ok(ParsedRow {
        id,
        description: field(1).to_string(),
        amount,
        category_name,
        date,
        notes,
    })
}
