//! Category service
//!
//! Category CRUD on top of the ledger's registry: assigns ids to new
//! categories, rejects duplicate names and applies partial edits.

use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::models::{Category, CategoryId, Rgb};

use super::expense::resolve_category;

/// Service for category management
pub struct CategoryService<'a> {
    ledger: &'a mut Ledger,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    /// List all categories with how many expenses use each
    pub fn list_with_usage(&self) -> Vec<(Category, usize)> {
        self.ledger
            .categories()
            .iter()
            .map(|c| (c.clone(), self.ledger.expenses().count_in_category(&c.id)))
            .collect()
    }

    /// Create a new category with the next free numeric id
    pub fn create(&mut self, name: &str, color: Option<Rgb>, icon: &str) -> LedgerResult<Category> {
        let name = name.trim();
        self.ensure_name_free(name, None)?;

        let id = self.ledger.categories().next_numeric_id();
        let category = Category::new(id, name, color.unwrap_or_default(), icon.trim());
        self.ledger.add_category(category.clone())?;

        debug!("Created category {} ({})", category.name, category.id);
        Ok(category)
    }

    /// Change the name, colour or icon of a category given by id or name
    pub fn edit(
        &mut self,
        identifier: &str,
        name: Option<&str>,
        color: Option<Rgb>,
        icon: Option<&str>,
    ) -> LedgerResult<Category> {
        let mut category = resolve_category(&*self.ledger, identifier)?.clone();

        if let Some(name) = name {
            let name = name.trim();
            self.ensure_name_free(name, Some(&category.id))?;
            category.name = name.to_string();
        }
        if let Some(color) = color {
            category.color = color;
        }
        if let Some(icon) = icon {
            category.icon = icon.trim().to_string();
        }

        self.ledger.update_category(category.clone())?;
        Ok(category)
    }

    /// Delete a category that no expense uses
    pub fn delete(&mut self, identifier: &str) -> LedgerResult<Category> {
        let id = resolve_category(&*self.ledger, identifier)?.id.clone();
        self.ledger.remove_category(&id)
    }

    fn ensure_name_free(&self, name: &str, except: Option<&CategoryId>) -> LedgerResult<()> {
        match self.ledger.categories().find_by_name(name) {
            Some(existing) if Some(&existing.id) != except => Err(LedgerError::Duplicate {
                entity_type: "Category",
                identifier: name.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_create_category() {
        let mut ledger = Ledger::new();
        let mut service = CategoryService::new(&mut ledger);

        let pets = service.create("  Pets ", Some(Rgb::new(1, 2, 3)), "🐶").unwrap();
        assert_eq!(pets.id, CategoryId::from("9"));
        assert_eq!(pets.name, "Pets");

        let garden = service.create("Garden", None, "").unwrap();
        assert_eq!(garden.id, CategoryId::from("10"));
        assert_eq!(garden.color, Rgb::grey());
        assert_eq!(ledger.list_categories().len(), 10);
    }

    #[test]
    fn test_create_rejects_duplicate_and_blank_names() {
        let mut ledger = Ledger::new();
        let mut service = CategoryService::new(&mut ledger);

        let dup = service.create("food", None, "").unwrap_err();
        assert!(matches!(dup, LedgerError::Duplicate { .. }));
        assert!(service.create("   ", None, "").unwrap_err().is_validation());
    }

    #[test]
    fn test_edit_by_name() {
        let mut ledger = Ledger::new();
        let mut service = CategoryService::new(&mut ledger);

        let edited = service
            .edit("travel", Some("Trips"), Some(Rgb::new(9, 9, 9)), None)
            .unwrap();
        assert_eq!(edited.id, CategoryId::from("2"));
        assert_eq!(edited.icon, "✈️");

        // Renaming to its own name is not a clash
        assert!(service.edit("2", Some("trips"), None, None).is_ok());
        assert!(service.edit("2", Some("Food"), None, None).is_err());
        assert!(service.edit("Nope", None, None, None).unwrap_err().is_not_found());
    }

    #[test]
    fn test_delete_and_usage() {
        let mut ledger = Ledger::new();
        ledger
            .add_expense(Expense::new(
                "Lunch",
                Money::from_cents(1000),
                CategoryId::from("1"),
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                None,
            ))
            .unwrap();

        let mut service = CategoryService::new(&mut ledger);
        let usage = service.list_with_usage();
        assert_eq!(usage[0].1, 1);
        assert_eq!(usage[1].1, 0);

        assert!(matches!(
            service.delete("Food").unwrap_err(),
            LedgerError::CategoryInUse { .. }
        ));
        assert_eq!(service.delete("Others").unwrap().id, CategoryId::from("8"));
    }
}
