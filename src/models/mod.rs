//! Core data models for the expense ledger
//!
//! This module contains the data structures of the domain: expenses,
//! categories and the value types they are built from.

pub mod category;
pub mod color;
pub mod expense;
pub mod ids;
pub mod money;
pub mod month;

pub use category::{default_categories, Category, CategoryValidationError};
pub use color::Rgb;
pub use expense::{Expense, ExpenseValidationError};
pub use ids::{CategoryId, ExpenseId};
pub use money::Money;
pub use month::YearMonth;
