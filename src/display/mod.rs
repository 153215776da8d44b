//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses, categories and reports for
//! terminal display.

pub mod category;
pub mod expense;
pub mod report;

pub use category::{format_category_details, format_category_list};
pub use expense::{format_expense_details, format_expense_table};
pub use report::{
    format_bar, format_category_breakdown, format_monthly_report, format_overview,
    format_percentage, truncate, Overview,
};
