//! Category display formatting

use crate::models::Category;

/// Format categories with their usage counts
pub fn format_category_list(categories: &[(Category, usize)]) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<4} {:<3} {:<20} {:<8} {:>8}\n",
        "ID", "", "Name", "Color", "Expenses"
    ));
    output.push_str(&"-".repeat(47));
    output.push('\n');

    for (category, count) in categories {
        output.push_str(&format!(
            "{:<4} {:<3} {:<20} {:<8} {:>8}\n",
            category.id,
            category.icon,
            category.name,
            category.color.to_hex(),
            count
        ));
    }

    output
}

/// Format category details for display
pub fn format_category_details(category: &Category) -> String {
    format!(
        "Category: {}\n  ID:    {}\n  Color: {} ({}, {}, {})\n  Icon:  {}\n",
        category.name,
        category.id,
        category.color.to_hex(),
        category.color.r,
        category.color.g,
        category.color.b,
        if category.icon.is_empty() { "-" } else { category.icon.as_str() }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{default_categories, Rgb};

    #[test]
    fn test_category_list() {
        let rows: Vec<(Category, usize)> = default_categories()
            .into_iter()
            .map(|c| (c, 0))
            .collect();
        let text = format_category_list(&rows);

        assert_eq!(text.lines().count(), 10);
        assert!(text.contains("Healthcare"));
        assert!(text.contains("#3cb371"));
    }

    #[test]
    fn test_category_details() {
        let category = Category::new("9", "Pets", Rgb::new(1, 2, 3), "");
        let text = format_category_details(&category);
        assert!(text.contains("Color: #010203 (1, 2, 3)"));
        assert!(text.contains("Icon:  -"));
    }
}
