//! Summary report
//!
//! Total spend, transaction count and a per-category table sorted by the
//! largest amount first.

use crate::models::{Expense, Money};

use super::aggregate::{average, percentage, total_amount, CategoryTotal};

const RULE_WIDTH: usize = 50;

/// One line of the category table
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub category_name: String,
    pub amount: Money,
    /// Share of the total in percent (0 when the total is 0)
    pub percentage: f64,
}

/// Summary of a set of expenses
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
    pub total: Money,
    pub transaction_count: usize,
    pub average: Money,
    /// Sorted by descending amount
    pub rows: Vec<SummaryRow>,
}

impl SummaryReport {
    /// Build the report from expenses and their per-category totals
    pub fn generate(expenses: &[Expense], category_totals: Vec<CategoryTotal>) -> Self {
        let total = total_amount(expenses);

        let mut rows: Vec<SummaryRow> = category_totals
            .into_iter()
            .map(|entry| SummaryRow {
                percentage: percentage(entry.total, total),
                category_name: entry.category.name,
                amount: entry.total,
            })
            .collect();
        // Stable sort keeps registry order between equal amounts
        rows.sort_by(|a, b| b.amount.cmp(&a.amount));

        Self {
            total,
            transaction_count: expenses.len(),
            average: average(expenses),
            rows,
        }
    }

    /// Render as plain text
    pub fn render(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        // Header
        output.push_str("EXPENSE SUMMARY REPORT\n");
        output.push_str(&"=".repeat(RULE_WIDTH));
        output.push_str("\n\n");
        output.push_str(&format!(
            "Total Expenses: {}\n",
            self.total.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "Number of Transactions: {}\n",
            self.transaction_count
        ));
        output.push_str(&format!(
            "Average Expense: {}\n\n",
            self.average.format_with_symbol(currency_symbol)
        ));

        // Category table
        output.push_str("Expenses by Category:\n");
        output.push_str(&"-".repeat(RULE_WIDTH));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<20}: {}{:>8.2} ({:>5.1}%)\n",
                row.category_name,
                currency_symbol,
                row.amount.as_f64(),
                row.percentage
            ));
        }

        output
    }
}

/// Convenience wrapper: generate and render in one step
pub fn summary_report(
    expenses: &[Expense],
    category_totals: Vec<CategoryTotal>,
    currency_symbol: &str,
) -> String {
    SummaryReport::generate(expenses, category_totals).render(currency_symbol)
}
