//! The ledger: expenses plus the categories they refer to
//!
//! `Ledger` is the single source of truth for the session. It owns an
//! [`ExpenseStore`] and a [`CategoryRegistry`] and enforces the invariants
//! that span both:
//!
//! - every expense references a registered category when it is added or updated
//! - expense ids are unique
//! - a category cannot be removed while expenses still reference it
//!
//! Update and delete by an unknown expense id stay silent no-ops here; the
//! strict variants that report `NotFound` live in `services::ExpenseService`.

pub mod categories;
pub mod expenses;

pub use categories::CategoryRegistry;
pub use expenses::ExpenseStore;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::LedgerError;
use crate::models::{default_categories, Category, CategoryId, Expense, ExpenseId, YearMonth};

/// In-memory expense ledger
#[derive(Debug, Clone)]
pub struct Ledger {
    expenses: ExpenseStore,
    categories: CategoryRegistry,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Create an empty ledger seeded with the default categories
    pub fn new() -> Self {
        Self::with_categories(default_categories())
    }

    /// Create an empty ledger with the given categories
    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            expenses: ExpenseStore::new(),
            categories: CategoryRegistry::from_categories(categories),
        }
    }

    // === Categories ===

    pub fn categories(&self) -> &CategoryRegistry {
        &self.categories
    }

    pub(crate) fn categories_mut(&mut self) -> &mut CategoryRegistry {
        &mut self.categories
    }

    /// All categories in order (cloned)
    pub fn list_categories(&self) -> Vec<Category> {
        self.categories.list()
    }

    pub fn get_category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.get(id)
    }

    /// Register a new category
    pub fn add_category(&mut self, category: Category) -> Result<(), LedgerError> {
        category
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;
        self.categories.add(category)
    }

    /// Change the name, colour or icon of a category
    pub fn update_category(&mut self, category: Category) -> Result<(), LedgerError> {
        category
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;
        self.categories.update(category)
    }

    /// Remove a category that no expense references
    pub fn remove_category(&mut self, id: &CategoryId) -> Result<Category, LedgerError> {
        let category = self
            .categories
            .get(id)
            .ok_or_else(|| LedgerError::category_not_found(id.to_string()))?;

        let count = self.expenses.count_in_category(id);
        if count > 0 {
            return Err(LedgerError::CategoryInUse {
                category: category.name.clone(),
                count,
            });
        }

        self.categories
            .remove(id)
            .ok_or_else(|| LedgerError::category_not_found(id.to_string()))
    }

    /// Bulk overwrite of the categories (load path only)
    pub fn replace_categories(&mut self, categories: Vec<Category>) {
        self.categories.replace_all(categories);
    }

    // === Expenses ===

    pub fn expenses(&self) -> &ExpenseStore {
        &self.expenses
    }

    /// Add an expense whose category is registered and whose id is new
    pub fn add_expense(&mut self, expense: Expense) -> Result<(), LedgerError> {
        self.ensure_category(&expense.category_id)?;

        if self.expenses.contains(&expense.id) {
            return Err(LedgerError::Duplicate {
                entity_type: "Expense",
                identifier: expense.id.to_string(),
            });
        }

        debug!("Adding expense {} ({})", expense.id, expense.amount);
        self.expenses.add(expense);
        Ok(())
    }

    /// Replace the expense with `id`, keeping that id.
    ///
    /// Returns `Ok(false)` without touching anything when `id` is unknown.
    pub fn update_expense(
        &mut self,
        id: &ExpenseId,
        expense: Expense,
    ) -> Result<bool, LedgerError> {
        self.ensure_category(&expense.category_id)?;
        Ok(self.expenses.update(id, expense))
    }

    /// Delete the expense with `id`; returns how many records were removed
    pub fn delete_expense(&mut self, id: &ExpenseId) -> usize {
        self.expenses.delete(id)
    }

    pub fn get_expense(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.get(id)
    }

    pub fn list_expenses(&self) -> Vec<Expense> {
        self.expenses.list()
    }

    pub fn list_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<Expense> {
        self.expenses.list_by_date_range(start, end)
    }

    pub fn list_by_category(&self, category: &Category) -> Vec<Expense> {
        self.expenses.list_by_category(&category.id)
    }

    pub fn list_by_month(&self, month: YearMonth) -> Vec<Expense> {
        self.expenses.list_by_month(month)
    }

    /// Bulk overwrite of the expenses (load path only)
    pub fn replace_all(&mut self, expenses: Vec<Expense>) {
        self.expenses.replace_all(expenses);
    }

    /// Remove every expense, keeping the categories
    pub fn clear(&mut self) {
        self.expenses.clear();
    }

    /// The category an expense refers to
    pub fn category_of(&self, expense: &Expense) -> Option<&Category> {
        self.categories.get(&expense.category_id)
    }

    fn ensure_category(&self, id: &CategoryId) -> Result<(), LedgerError> {
        if self.categories.contains(id) {
            Ok(())
        } else {
            Err(LedgerError::category_not_found(id.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Rgb};

    fn lunch() -> Expense {
        Expense::new(
            "Lunch",
            Money::from_cents(1250),
            CategoryId::from("1"),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            None,
        )
    }

    #[test]
    fn test_new_ledger_has_default_categories() {
        let ledger = Ledger::new();
        assert_eq!(ledger.list_categories().len(), 8);
        assert!(ledger.expenses().is_empty());
    }

    #[test]
    fn test_add_expense_requires_known_category() {
        let mut ledger = Ledger::new();
        let mut expense = lunch();
        expense.category_id = CategoryId::from("99");

        let err = ledger.add_expense(expense).unwrap_err();
        assert!(err.is_not_found());
        assert!(ledger.expenses().is_empty());
    }

    #[test]
    fn test_add_expense_rejects_duplicate_id() {
        let mut ledger = Ledger::new();
        let expense = lunch();
        ledger.add_expense(expense.clone()).unwrap();

        let err = ledger.add_expense(expense).unwrap_err();
        assert!(matches!(err, LedgerError::Duplicate { .. }));
        assert_eq!(ledger.expenses().len(), 1);
    }

    #[test]
    fn test_update_expense_keeps_id_and_checks_category() {
        let mut ledger = Ledger::new();
        let expense = lunch();
        let id = expense.id;
        ledger.add_expense(expense).unwrap();

        let mut replacement = lunch();
        replacement.description = "Brunch".to_string();
        assert!(ledger.update_expense(&id, replacement).unwrap());
        assert_eq!(ledger.get_expense(&id).unwrap().description, "Brunch");

        let mut bad = lunch();
        bad.category_id = CategoryId::from("nope");
        assert!(ledger.update_expense(&id, bad).is_err());

        assert!(!ledger.update_expense(&ExpenseId::new(), lunch()).unwrap());
        assert_eq!(ledger.expenses().len(), 1);
    }

    #[test]
    fn test_category_edit_is_seen_through_expenses() {
        let mut ledger = Ledger::new();
        let expense = lunch();
        ledger.add_expense(expense.clone()).unwrap();

        let mut food = ledger.get_category(&CategoryId::from("1")).unwrap().clone();
        food.name = "Meals".to_string();
        food.color = Rgb::new(1, 2, 3);
        ledger.update_category(food).unwrap();

        let category = ledger.category_of(&expense).unwrap();
        assert_eq!(category.name, "Meals");
        assert_eq!(category.color, Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_remove_category_in_use_is_refused() {
        let mut ledger = Ledger::new();
        let expense = lunch();
        let id = expense.id;
        ledger.add_expense(expense).unwrap();

        let food = CategoryId::from("1");
        let err = ledger.remove_category(&food).unwrap_err();
        assert!(matches!(err, LedgerError::CategoryInUse { count: 1, .. }));

        ledger.delete_expense(&id);
        assert_eq!(ledger.remove_category(&food).unwrap().name, "Food");
        assert!(ledger.get_category(&food).is_none());
    }

    #[test]
    fn test_add_category_validates() {
        let mut ledger = Ledger::new();
        let blank = Category::new("9", "", Rgb::grey(), "");
        assert!(ledger.add_category(blank).unwrap_err().is_validation());

        let dup = Category::new("1", "Food again", Rgb::grey(), "");
        assert!(matches!(
            ledger.add_category(dup).unwrap_err(),
            LedgerError::Duplicate { .. }
        ));
    }

    #[test]
    fn test_clear_keeps_categories() {
        let mut ledger = Ledger::new();
        ledger.add_expense(lunch()).unwrap();
        ledger.clear();

        assert!(ledger.list_expenses().is_empty());
        assert_eq!(ledger.list_categories().len(), 8);
    }
}
