//! Category registry
//!
//! Keyed by id so duplicate ids are structurally impossible, while a
//! separate order vector keeps the insertion order callers see.

use std::collections::HashMap;

use tracing::warn;

use crate::error::LedgerError;
use crate::models::{Category, CategoryId};

/// The set of known categories
#[derive(Debug, Clone, Default)]
pub struct CategoryRegistry {
    by_id: HashMap<CategoryId, Category>,
    order: Vec<CategoryId>,
}

impl CategoryRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from a list, dropping repeated ids
    pub fn from_categories(categories: Vec<Category>) -> Self {
        let mut registry = Self::new();
        registry.replace_all(categories);
        registry
    }

    /// All categories in insertion order (cloned)
    pub fn list(&self) -> Vec<Category> {
        self.iter().cloned().collect()
    }

    /// Iterate categories in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }

    /// Add a category; an existing id is rejected
    pub fn add(&mut self, category: Category) -> Result<(), LedgerError> {
        if self.by_id.contains_key(&category.id) {
            return Err(LedgerError::Duplicate {
                entity_type: "Category",
                identifier: category.id.to_string(),
            });
        }

        self.order.push(category.id.clone());
        self.by_id.insert(category.id.clone(), category);
        Ok(())
    }

    /// Get a category by id
    pub fn get(&self, id: &CategoryId) -> Option<&Category> {
        self.by_id.get(id)
    }

    /// Find a category by name (case-insensitive)
    pub fn find_by_name(&self, name: &str) -> Option<&Category> {
        let name_lower = name.trim().to_lowercase();
        self.iter().find(|c| c.name.to_lowercase() == name_lower)
    }

    /// Check if a category id is known
    pub fn contains(&self, id: &CategoryId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Replace the name, colour and icon of an existing category
    pub fn update(&mut self, category: Category) -> Result<(), LedgerError> {
        match self.by_id.get_mut(&category.id) {
            Some(existing) => {
                *existing = category;
                Ok(())
            }
            None => Err(LedgerError::category_not_found(category.id.to_string())),
        }
    }

    /// Remove a category, returning it if it existed
    pub fn remove(&mut self, id: &CategoryId) -> Option<Category> {
        let removed = self.by_id.remove(id)?;
        self.order.retain(|existing| existing != id);
        Some(removed)
    }

    /// Replace every category (load path)
    pub fn replace_all(&mut self, categories: Vec<Category>) {
        self.by_id.clear();
        self.order.clear();

        for category in categories {
            let id = category.id.clone();
            if let Err(e) = self.add(category) {
                warn!("Ignoring category with repeated id '{}': {}", id, e);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Id one greater than the largest numeric id in use
    pub fn next_numeric_id(&self) -> CategoryId {
        let max = self
            .order
            .iter()
            .filter_map(|id| id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        CategoryId::new((max + 1).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{default_categories, Rgb};

    fn pets() -> Category {
        Category::new("9", "Pets", Rgb::new(10, 20, 30), "🐾")
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let registry = CategoryRegistry::from_categories(default_categories());
        let names: Vec<String> = registry.list().into_iter().map(|c| c.name).collect();
        assert_eq!(names[0], "Food");
        assert_eq!(names[7], "Others");
        assert_eq!(registry.len(), 8);
    }

    #[test]
    fn test_list_is_a_copy() {
        let registry = CategoryRegistry::from_categories(default_categories());
        let mut listed = registry.list();
        listed[0].name = "Changed".to_string();
        listed.clear();

        assert_eq!(registry.len(), 8);
        assert_eq!(registry.get(&CategoryId::from("1")).unwrap().name, "Food");
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut registry = CategoryRegistry::new();
        registry.add(pets()).unwrap();

        let err = registry.add(pets()).unwrap_err();
        assert!(matches!(err, LedgerError::Duplicate { .. }));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_get_and_find_by_name() {
        let registry = CategoryRegistry::from_categories(default_categories());
        assert_eq!(registry.get(&CategoryId::from("5")).unwrap().name, "Healthcare");
        assert!(registry.get(&CategoryId::from("42")).is_none());
        assert_eq!(registry.find_by_name("  travel ").unwrap().id.as_str(), "2");
    }

    #[test]
    fn test_update_and_remove() {
        let mut registry = CategoryRegistry::new();
        registry.add(pets()).unwrap();

        let mut renamed = pets();
        renamed.name = "Animals".to_string();
        registry.update(renamed).unwrap();
        assert_eq!(registry.get(&CategoryId::from("9")).unwrap().name, "Animals");

        let missing = Category::new("10", "Ghost", Rgb::grey(), "");
        assert!(registry.update(missing).unwrap_err().is_not_found());

        assert!(registry.remove(&CategoryId::from("9")).is_some());
        assert!(registry.remove(&CategoryId::from("9")).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_replace_all_drops_repeated_ids() {
        let mut registry = CategoryRegistry::new();
        let mut second = pets();
        second.name = "Second".to_string();
        registry.replace_all(vec![pets(), second]);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.list()[0].name, "Pets");
    }

    #[test]
    fn test_next_numeric_id() {
        let registry = CategoryRegistry::from_categories(default_categories());
        assert_eq!(registry.next_numeric_id().as_str(), "9");
        assert_eq!(CategoryRegistry::new().next_numeric_id().as_str(), "1");
    }
}
