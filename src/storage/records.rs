//! Persisted form of the ledger
//!
//! Stored expenses embed a copy of their category as it was when the file
//! was written, so later edits to a category do not rewrite saved history.
//! Dates are written as ISO-8601 calendar dates and colours as `{r, g, b}`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Category, Expense, ExpenseId, Money};

/// Explicit `YYYY-MM-DD` encoding for calendar dates, with no time zone
pub mod iso_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(s.trim(), FORMAT).map_err(serde::de::Error::custom)
    }
}

/// One expense as written to `expenses.json` and JSON exports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: ExpenseId,
    pub description: String,
    pub amount: Money,
    pub category: Category,
    #[serde(with = "iso_date")]
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ExpenseRecord {
    /// Snapshot an expense together with its current category
    pub fn from_expense(expense: &Expense, category: Category) -> Self {
        Self {
            id: expense.id,
            description: expense.description.clone(),
            amount: expense.amount,
            category,
            date: expense.date,
            notes: expense.notes.clone(),
        }
    }

    /// Back to the in-memory form, referencing the category by id
    pub fn into_expense(self) -> Expense {
        Expense::with_id(
            self.id,
            self.description,
            self.amount,
            self.category.id,
            self.date,
            self.notes,
        )
    }
}
