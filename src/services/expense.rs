//! Expense service
//!
//! Validation boundary in front of the ledger: trims and checks user input,
//! resolves categories by name or id, and turns silent misses into
//! `NotFound` errors.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::models::{Category, CategoryId, Expense, ExpenseId, Money, YearMonth};

/// Service for expense management
pub struct ExpenseService<'a> {
    ledger: &'a mut Ledger,
}

/// Options for filtering expenses
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Filter by category
    pub category_id: Option<CategoryId>,
    /// Filter by calendar month
    pub month: Option<YearMonth>,
    /// Filter by date range start (inclusive)
    pub start_date: Option<NaiveDate>,
    /// Filter by date range end (inclusive)
    pub end_date: Option<NaiveDate>,
    /// Maximum number of expenses to return
    pub limit: Option<usize>,
}

impl ExpenseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn month(mut self, month: YearMonth) -> Self {
        self.month = Some(month);
        self
    }

    pub fn date_range(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct ExpenseInput {
    pub description: String,
    pub amount: Money,
    pub category_id: CategoryId,
    pub date: NaiveDate,
    pub notes: Option<String>,
}

/// Changes to apply to an existing expense; `None` leaves a field as is
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub description: Option<String>,
    pub amount: Option<Money>,
    pub category_id: Option<CategoryId>,
    pub date: Option<NaiveDate>,
    /// `Some(None)` clears the notes
    pub notes: Option<Option<String>>,
}

impl ExpenseUpdate {
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.amount.is_none()
            && self.category_id.is_none()
            && self.date.is_none()
            && self.notes.is_none()
    }
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    /// Validate and record a new expense
    pub fn create(&mut self, input: ExpenseInput) -> LedgerResult<Expense> {
        let expense = Expense::new(
            input.description.trim(),
            input.amount,
            input.category_id,
            input.date,
            normalize_notes(input.notes),
        );

        expense
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        self.ledger.add_expense(expense.clone())?;
        Ok(expense)
    }

    /// Get an expense by ID
    pub fn get(&self, id: &ExpenseId) -> LedgerResult<&Expense> {
        self.ledger
            .get_expense(id)
            .ok_or_else(|| LedgerError::expense_not_found(id.to_string()))
    }

    /// Resolve a full id or an unambiguous id prefix
    pub fn find(&self, identifier: &str) -> LedgerResult<ExpenseId> {
        let identifier = identifier.trim();

        if let Ok(id) = ExpenseId::parse(identifier) {
            return if self.ledger.get_expense(&id).is_some() {
                Ok(id)
            } else {
                Err(LedgerError::expense_not_found(identifier))
            };
        }

        if identifier.is_empty() {
            return Err(LedgerError::Validation("Expense id is required".into()));
        }

        let prefix = identifier.to_lowercase();
        let matches: Vec<ExpenseId> = self
            .ledger
            .expenses()
            .as_slice()
            .iter()
            .map(|e| e.id)
            .filter(|id| id.to_string().starts_with(&prefix))
            .collect();

        match matches.as_slice() {
            [id] => Ok(*id),
            [] => Err(LedgerError::expense_not_found(identifier)),
            _ => Err(LedgerError::Validation(format!(
                "Id prefix '{}' matches {} expenses",
                identifier,
                matches.len()
            ))),
        }
    }

    /// List expenses matching `filter`, newest first
    pub fn list(&self, filter: &ExpenseFilter) -> Vec<Expense> {
        let mut expenses = match (&filter.category_id, filter.month) {
            (Some(category_id), _) => self.ledger.expenses().list_by_category(category_id),
            (None, Some(month)) => self.ledger.list_by_month(month),
            (None, None) => self.ledger.list_expenses(),
        };

        if let Some(month) = filter.month {
            expenses.retain(|e| month.contains(e.date));
        }
        if let Some(start) = filter.start_date {
            expenses.retain(|e| e.date >= start);
        }
        if let Some(end) = filter.end_date {
            expenses.retain(|e| e.date <= end);
        }

        // Stable, so same-day expenses keep insertion order
        expenses.sort_by(|a, b| b.date.cmp(&a.date));

        if let Some(limit) = filter.limit {
            expenses.truncate(limit);
        }

        expenses
    }

    /// Apply `update` to the expense with `id`
    pub fn edit(&mut self, id: &ExpenseId, update: ExpenseUpdate) -> LedgerResult<Expense> {
        let mut expense = self.get(id)?.clone();

        if let Some(description) = update.description {
            expense.description = description.trim().to_string();
        }
        if let Some(amount) = update.amount {
            expense.amount = amount;
        }
        if let Some(category_id) = update.category_id {
            expense.category_id = category_id;
        }
        if let Some(date) = update.date {
            expense.date = date;
        }
        if let Some(notes) = update.notes {
            expense.notes = normalize_notes(notes);
        }

        expense
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        if !self.ledger.update_expense(id, expense.clone())? {
            return Err(LedgerError::expense_not_found(id.to_string()));
        }

        debug!("Updated expense {}", id);
        Ok(expense)
    }

    /// Delete the expense with `id`, returning it
    pub fn remove(&mut self, id: &ExpenseId) -> LedgerResult<Expense> {
        let expense = self.get(id)?.clone();
        self.ledger.delete_expense(id);
        debug!("Deleted expense {}", id);
        Ok(expense)
    }

    /// Resolve a category by id, then by case-insensitive name
    pub fn resolve_category(&self, identifier: &str) -> LedgerResult<&Category> {
        resolve_category(&*self.ledger, identifier)
    }
}

/// Resolve a category by id, then by case-insensitive name
pub fn resolve_category<'l>(ledger: &'l Ledger, identifier: &str) -> LedgerResult<&'l Category> {
    let identifier = identifier.trim();
    ledger
        .get_category(&CategoryId::from(identifier))
        .or_else(|| ledger.categories().find_by_name(identifier))
        .ok_or_else(|| LedgerError::category_not_found(identifier))
}

fn normalize_notes(notes: Option<String>) -> Option<String> {
    notes
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
}
