//! Category CLI commands
//!
//! Implements CLI commands for category management.

use clap::Subcommand;

use crate::display::{format_category_details, format_category_list};
use crate::error::LedgerResult;
use crate::ledger::Ledger;
use crate::services::CategoryService;

use super::parse_color;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List all categories
    List,

    /// Create a new category
    Add {
        /// Category name
        name: String,
        /// Colour as #rrggbb or r,g,b (default grey)
        #[arg(long)]
        color: Option<String>,
        /// Icon shown next to the name
        #[arg(long, default_value = "")]
        icon: String,
    },

    /// Edit a category
    Edit {
        /// Category name or ID
        category: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New colour
        #[arg(long)]
        color: Option<String>,
        /// New icon
        #[arg(long)]
        icon: Option<String>,
    },

    /// Delete a category that no expense uses
    Delete {
        /// Category name or ID
        category: String,
    },
}

impl CategoryCommands {
    /// Whether the command changes the ledger
    pub fn is_mutating(&self) -> bool {
        !matches!(self, CategoryCommands::List)
    }
}

/// Handle a category command
pub fn handle_category_command(ledger: &mut Ledger, cmd: CategoryCommands) -> LedgerResult<()> {
    let mut service = CategoryService::new(ledger);

    match cmd {
        CategoryCommands::List => {
            print!("{}", format_category_list(&service.list_with_usage()));
        }

        CategoryCommands::Add { name, color, icon } => {
            let color = color.as_deref().map(parse_color).transpose()?;
            let category = service.create(&name, color, &icon)?;
            println!("Created category: {}", category.name);
            println!("  ID: {}", category.id);
        }

        CategoryCommands::Edit {
            category,
            name,
            color,
            icon,
        } => {
            if name.is_none() && color.is_none() && icon.is_none() {
                println!("No changes specified. Use --name, --color or --icon.");
                return Ok(());
            }

            let color = color.as_deref().map(parse_color).transpose()?;
            let updated = service.edit(&category, name.as_deref(), color, icon.as_deref())?;
            print!("Updated {}", format_category_details(&updated));
        }

        CategoryCommands::Delete { category } => {
            let removed = service.delete(&category)?;
            println!("Deleted category: {}", removed.name);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, Rgb};

    #[test]
    fn test_add_edit_delete() {
        let mut ledger = Ledger::new();

        handle_category_command(
            &mut ledger,
            CategoryCommands::Add {
                name: "Pets".to_string(),
                color: Some("#102030".to_string()),
                icon: "🐶".to_string(),
            },
        )
        .unwrap();
        let pets = ledger.get_category(&CategoryId::from("9")).unwrap();
        assert_eq!(pets.color, Rgb::new(16, 32, 48));

        handle_category_command(
            &mut ledger,
            CategoryCommands::Edit {
                category: "pets".to_string(),
                name: Some("Animals".to_string()),
                color: None,
                icon: None,
            },
        )
        .unwrap();
        assert_eq!(ledger.get_category(&CategoryId::from("9")).unwrap().name, "Animals");

        handle_category_command(
            &mut ledger,
            CategoryCommands::Delete {
                category: "9".to_string(),
            },
        )
        .unwrap();
        assert_eq!(ledger.list_categories().len(), 8);
    }

    #[test]
    fn test_bad_color_is_validation_error() {
        let mut ledger = Ledger::new();
        let err = handle_category_command(
            &mut ledger,
            CategoryCommands::Add {
                name: "Pets".to_string(),
                color: Some("blue".to_string()),
                icon: String::new(),
            },
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_list_is_read_only() {
        assert!(!CategoryCommands::List.is_mutating());
        assert!(CategoryCommands::Delete {
            category: "1".to_string()
        }
        .is_mutating());
    }
}
