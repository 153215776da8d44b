//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod category;
pub mod expense;
pub mod export;
pub mod report;

pub use category::{handle_category_command, CategoryCommands};
pub use expense::{
    handle_add_command, handle_delete_command, handle_edit_command, handle_list_command,
    handle_show_command, AddArgs, EditArgs, ListArgs,
};
pub use export::{handle_export_command, handle_import_command, ExportCommands};
pub use report::{handle_report_command, ReportCommands};

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, Rgb, YearMonth};

/// Parse a `YYYY-MM-DD` date argument
pub fn parse_date(s: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| LedgerError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", s)))
}

/// Parse an amount argument such as `12.50` or `$12.50`
pub fn parse_amount(s: &str) -> LedgerResult<Money> {
    Money::parse(s).map_err(|e| LedgerError::Validation(format!("Invalid amount '{}': {}", s, e)))
}

/// Parse a `YYYY-MM` month argument
pub fn parse_month(s: &str) -> LedgerResult<YearMonth> {
    s.trim()
        .parse()
        .map_err(|_| LedgerError::Validation(format!("Invalid month '{}', expected YYYY-MM", s)))
}

/// Parse a colour argument (`#rrggbb` or `r,g,b`)
pub fn parse_color(s: &str) -> LedgerResult<Rgb> {
    s.parse()
        .map_err(|_| LedgerError::Validation(format!("Invalid color: '{}'", s)))
}

/// Today's date on the local clock
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
