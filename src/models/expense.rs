//! Expense model
//!
//! An expense is a single outgoing payment on a calendar date. It refers to
//! its category by id; the persisted form (see `storage::records`) embeds a
//! snapshot of the category instead.

use chrono::NaiveDate;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::ids::{CategoryId, ExpenseId};
use super::money::Money;
use super::month::YearMonth;

/// A recorded expense
#[derive(Debug, Clone)]
pub struct Expense {
    /// Unique identifier, fixed at creation
    pub id: ExpenseId,

    /// What the money was spent on
    pub description: String,

    /// Amount spent (positive)
    pub amount: Money,

    /// The category this expense belongs to
    pub category_id: CategoryId,

    /// Calendar date of the expense
    pub date: NaiveDate,

    /// Free-form notes
    pub notes: Option<String>,
}

impl Expense {
    /// Create a new expense with a freshly generated id
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        category_id: CategoryId,
        date: NaiveDate,
        notes: Option<String>,
    ) -> Self {
        Self::with_id(ExpenseId::new(), description, amount, category_id, date, notes)
    }

    /// Create an expense with a known id (load and import paths)
    pub fn with_id(
        id: ExpenseId,
        description: impl Into<String>,
        amount: Money,
        category_id: CategoryId,
        date: NaiveDate,
        notes: Option<String>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            category_id,
            date,
            notes,
        }
    }

    /// The month this expense falls in
    pub fn month(&self) -> YearMonth {
        YearMonth::from_date(self.date)
    }

    /// Notes, or an empty string when there are none
    pub fn notes_or_empty(&self) -> &str {
        self.notes.as_deref().unwrap_or("")
    }

    /// Validate user-supplied fields
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        if !self.amount.is_within_limit() {
            return Err(ExpenseValidationError::AmountTooLarge(self.amount));
        }

        Ok(())
    }
}

// Identity is the id alone: two expenses with equal fields but different
// ids are distinct records.
impl PartialEq for Expense {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Expense {}

impl Hash for Expense {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount {} exceeds the maximum of {}", amount, Money::MAX)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
