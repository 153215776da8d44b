//! Category model
//!
//! Categories are shared reference data: expenses point at them by id, so
//! renaming or recolouring a category shows up everywhere it is used.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::color::Rgb;
use super::ids::CategoryId;

/// A spending category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable identifier, never regenerated
    pub id: CategoryId,

    /// Display name
    pub name: String,

    /// Colour used by charts and listings
    pub color: Rgb,

    /// Icon glyph (usually an emoji)
    #[serde(default)]
    pub icon: String,
}

impl Category {
    /// Create a new category
    pub fn new(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        color: Rgb,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color,
            icon: icon.into(),
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.id.as_str().trim().is_empty() {
            return Err(CategoryValidationError::EmptyId);
        }

        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.chars().count() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.chars().count()));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The seed categories used when no categories have been persisted yet
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("1", "Food", Rgb::new(255, 99, 71), "🍔"),
        Category::new("2", "Travel", Rgb::new(65, 105, 225), "✈️"),
        Category::new("3", "Entertainment", Rgb::new(255, 215, 0), "🎬"),
        Category::new("4", "Shopping", Rgb::new(147, 112, 219), "🛍️"),
        Category::new("5", "Healthcare", Rgb::new(60, 179, 113), "🏥"),
        Category::new("6", "Bills", Rgb::new(220, 20, 60), "📄"),
        Category::new("7", "Education", Rgb::new(0, 191, 255), "📚"),
        Category::new("8", "Others", Rgb::new(128, 128, 128), "📦"),
    ]
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyId,
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "Category id cannot be empty"),
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}
