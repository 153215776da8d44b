//! In-memory expense store
//!
//! A plain ordered collection. It performs no validation and treats
//! unknown ids on update/delete as a silent no-op; `Ledger` layers the
//! referential checks on top.

use chrono::NaiveDate;

use crate::models::{CategoryId, Expense, ExpenseId, YearMonth};

/// Ordered collection of expenses
#[derive(Debug, Clone, Default)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an expense unconditionally
    pub fn add(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Replace the first expense with `id` in place, keeping the original id.
    ///
    /// Returns `false` and leaves the store untouched when no expense matches.
    pub fn update(&mut self, id: &ExpenseId, mut replacement: Expense) -> bool {
        match self.expenses.iter_mut().find(|e| &e.id == id) {
            Some(slot) => {
                replacement.id = *id;
                *slot = replacement;
                true
            }
            None => false,
        }
    }

    /// Remove every expense with `id`; returns how many were removed
    pub fn delete(&mut self, id: &ExpenseId) -> usize {
        let before = self.expenses.len();
        self.expenses.retain(|e| &e.id != id);
        before - self.expenses.len()
    }

    pub fn get(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| &e.id == id)
    }

    pub fn contains(&self, id: &ExpenseId) -> bool {
        self.get(id).is_some()
    }

    /// Snapshot of all expenses in insertion order
    pub fn list(&self) -> Vec<Expense> {
        self.expenses.clone()
    }

    /// Borrow all expenses in insertion order
    pub fn as_slice(&self) -> &[Expense] {
        &self.expenses
    }

    /// Expenses dated between `start` and `end`, both inclusive
    pub fn list_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<Expense> {
        self.filtered(|e| e.date >= start && e.date <= end)
    }

    pub fn list_by_category(&self, category_id: &CategoryId) -> Vec<Expense> {
        self.filtered(|e| &e.category_id == category_id)
    }

    pub fn list_by_month(&self, month: YearMonth) -> Vec<Expense> {
        self.filtered(|e| month.contains(e.date))
    }

    /// Number of expenses referencing a category
    pub fn count_in_category(&self, category_id: &CategoryId) -> usize {
        self.expenses
            .iter()
            .filter(|e| &e.category_id == category_id)
            .count()
    }

    /// Swap in a whole new collection (load path)
    pub fn replace_all(&mut self, expenses: Vec<Expense>) {
        self.expenses = expenses;
    }

    pub fn clear(&mut self) {
        self.expenses.clear();
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    fn filtered(&self, predicate: impl Fn(&Expense) -> bool) -> Vec<Expense> {
        self.expenses
            .iter()
            .filter(|e| predicate(*e))
            .cloned()
            .collect()
    }
}
