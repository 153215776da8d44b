//! Service layer for the expense ledger
//!
//! The service layer validates user input and applies it to the ledger,
//! turning silent misses into errors a caller can report.

pub mod category;
pub mod expense;
pub mod import;

pub use category::CategoryService;
pub use expense::{resolve_category, ExpenseFilter, ExpenseInput, ExpenseService, ExpenseUpdate};
pub use import::{ImportResult, ImportService};
