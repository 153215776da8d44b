//! Reports module for the expense ledger
//!
//! Derived numbers only: totals, per-category breakdowns, monthly series and
//! the text summary. Nothing here is stored.

pub mod aggregate;
pub mod summary;

pub use aggregate::{
    amounts_by_category, average, largest_expense, monthly_series, monthly_series_ending,
    percentage, total_amount, total_by_category, total_by_month, CategoryTotal, MonthComparison,
};
pub use summary::{summary_report, SummaryReport, SummaryRow};
