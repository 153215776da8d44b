//! Expense display formatting
//!
//! Expense listings are rendered as tables; a single expense as a block of
//! labelled fields.

use tabled::settings::{object::Columns, Alignment, Style};
use tabled::{Table, Tabled};

use crate::ledger::Ledger;
use crate::models::{Category, Expense, Money};

use super::report::truncate;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format a list of expenses as a table with a total line
pub fn format_expense_table(
    expenses: &[Expense],
    ledger: &Ledger,
    currency: &str,
    date_format: &str,
) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows = expenses.iter().map(|expense| ExpenseRow {
        id: expense.id.short(),
        date: expense.date.format(date_format).to_string(),
        description: truncate(&expense.description, 30),
        category: category_label(ledger.category_of(expense), expense),
        amount: expense.amount.format_with_symbol(currency),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::last(), Alignment::right());

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    format!(
        "{}\n\n{} expense(s), total {}\n",
        table,
        expenses.len(),
        total.format_with_symbol(currency)
    )
}

/// Format expense details for display
pub fn format_expense_details(
    expense: &Expense,
    category: Option<&Category>,
    currency: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Date:        {}\n", expense.date.format("%Y-%m-%d")));
    output.push_str(&format!("Description: {}\n", expense.description));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "Category:    {}\n",
        category_label(category, expense)
    ));

    if let Some(notes) = &expense.notes {
        output.push_str(&format!("Notes:       {}\n", notes));
    }

    output
}

fn category_label(category: Option<&Category>, expense: &Expense) -> String {
    match category {
        Some(c) if c.icon.is_empty() => c.name.clone(),
        Some(c) => format!("{} {}", c.icon, c.name),
        None => format!("(unknown: {})", expense.category_id),
    }
}
