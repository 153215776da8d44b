//! expense-ledger - personal expense tracking
//!
//! This library provides the core of the `expense` command-line tool: a
//! single-owner ledger of expenses grouped by category, aggregate reports
//! over it, and JSON persistence.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, expenses, months)
//! - `ledger`: In-memory category registry and expense store
//! - `reports`: Totals, monthly series and the summary report
//! - `storage`: JSON file storage layer
//! - `export`: CSV and JSON export
//! - `services`: Input validation, category management and import
//! - `display`, `cli`: Terminal output and command handlers for the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::config::paths::LedgerPaths;
//! use expense_ledger::storage::Storage;
//!
//! let storage = Storage::new(LedgerPaths::new()?);
//! let mut ledger = storage.load_or_recover()?;
//! // ... mutate the ledger ...
//! storage.save(&ledger)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
pub use ledger::Ledger;
