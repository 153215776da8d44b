//! Report formatting utilities for terminal output
//!
//! Text renderings of the aggregation results: the monthly trend as bars,
//! the per-category breakdown and the overview dashboard.

use std::collections::BTreeMap;

use crate::models::{Expense, Money, YearMonth};
use crate::reports::{percentage, CategoryTotal, MonthComparison};

const BAR_WIDTH: usize = 30;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to at most `max_len` characters with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Monthly totals, oldest first, one bar per month
pub fn format_monthly_report(series: &BTreeMap<YearMonth, Money>, currency: &str) -> String {
    if series.is_empty() {
        return "No months to show.\n".to_string();
    }

    let max = series.values().map(|m| m.as_f64()).fold(0.0, f64::max);
    let total: Money = series.values().sum();

    let mut output = String::new();
    output.push_str("Monthly Expenses\n");
    output.push_str(&separator(50));
    output.push('\n');

    for (month, amount) in series {
        let line = format!(
            "{:<9} {:>12}  {}",
            month.label(),
            amount.format_with_symbol(currency),
            format_bar(amount.as_f64(), max, BAR_WIDTH)
        );
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output.push_str(&separator(50));
    output.push('\n');
    output.push_str(&format!(
        "{:<9} {:>12}\n",
        "Total",
        total.format_with_symbol(currency)
    ));

    output
}

/// Category totals with their share of `total`, largest first
pub fn format_category_breakdown(
    totals: &[CategoryTotal],
    total: Money,
    currency: &str,
) -> String {
    if totals.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut sorted: Vec<&CategoryTotal> = totals.iter().collect();
    sorted.sort_by(|a, b| b.total.cmp(&a.total));
    let max = sorted.first().map(|t| t.total.as_f64()).unwrap_or(0.0);

    let mut output = String::new();
    for entry in sorted {
        let label = format!("{} {}", entry.category.icon, entry.category.name);
        let line = format!(
            "{:<20} {:>12} {:>6}  {}",
            truncate(label.trim(), 20),
            entry.total.format_with_symbol(currency),
            format_percentage(percentage(entry.total, total)),
            format_bar(entry.total.as_f64(), max, 20)
        );
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}

/// Headline numbers for a set of expenses
#[derive(Debug, Clone)]
pub struct Overview<'a> {
    pub total: Money,
    pub count: usize,
    pub average: Money,
    pub largest: Option<&'a Expense>,
    pub this_month: MonthComparison,
}

/// Format the overview dashboard
pub fn format_overview(overview: &Overview<'_>, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Total Expenses:     {}\n",
        overview.total.format_with_symbol(currency)
    ));
    output.push_str(&format!("Transactions:       {}\n", overview.count));
    output.push_str(&format!(
        "Average Expense:    {}\n",
        overview.average.format_with_symbol(currency)
    ));

    if let Some(largest) = overview.largest {
        output.push_str(&format!(
            "Largest Expense:    {} ({})\n",
            largest.amount.format_with_symbol(currency),
            largest.description
        ));
    }

    let month = &overview.this_month;
    output.push('\n');
    output.push_str(&format!(
        "{}: {} in {} expense(s)\n",
        month.month.label(),
        month.total.format_with_symbol(currency),
        month.count
    ));

    let change = month.change();
    let sign = if change.is_negative() { "" } else { "+" };
    let relative = month
        .change_percentage()
        .map(|pct| format!(" ({}{:.1}%)", sign, pct))
        .unwrap_or_default();
    output.push_str(&format!(
        "vs {}: {}{}{}\n",
        month.month.prev().label(),
        sign,
        change.format_with_symbol(currency),
        relative
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{default_categories, CategoryId};
    use crate::reports::amounts_by_category;
    use chrono::NaiveDate;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    fn expense(cents: i64, category: &str, month: u32) -> Expense {
        Expense::new(
            "Item",
            Money::from_cents(cents),
            CategoryId::from(category),
            NaiveDate::from_ymd_opt(2024, month, 10).unwrap(),
            None,
        )
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(50.0), "50%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(0.0, 0.0, 4), "    ");
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("🍔🍔🍔🍔🍔🍔", 5), "🍔🍔...");
    }

    #[test]
    fn test_monthly_report() {
        let mut series = BTreeMap::new();
        series.insert(ym(2024, 1), Money::from_cents(5000));
        series.insert(ym(2024, 2), Money::zero());
        series.insert(ym(2024, 3), Money::from_cents(2500));

        let text = format_monthly_report(&series, "$");
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[2].starts_with("Jan 2024"));
        assert!(lines[2].contains("$50.00"));
        assert_eq!(lines[2].chars().filter(|c| *c == '█').count(), BAR_WIDTH);
        assert!(lines[3].contains("$0.00"));
        assert!(lines.last().unwrap().contains("$75.00"));
    }

    #[test]
    fn test_category_breakdown_sorted() {
        let expenses = vec![expense(1000, "1", 3), expense(3000, "2", 3)];
        let totals = amounts_by_category(&default_categories(), &expenses);
        let text = format_category_breakdown(&totals, Money::from_cents(4000), "$");

        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].contains("Travel"));
        assert!(lines[0].contains("75%"));
        assert!(lines[1].contains("Food"));
    }

    #[test]
    fn test_overview() {
        let expenses = vec![expense(1000, "1", 2), expense(3000, "2", 3)];
        let overview = Overview {
            total: Money::from_cents(4000),
            count: 2,
            average: Money::from_cents(2000),
            largest: expenses.iter().max_by_key(|e| e.amount),
            this_month: MonthComparison::compute(&expenses, ym(2024, 3)),
        };

        let text = format_overview(&overview, "$");
        assert!(text.contains("Total Expenses:     $40.00"));
        assert!(text.contains("Largest Expense:    $30.00"));
        assert!(text.contains("Mar 2024: $30.00 in 1 expense(s)"));
        assert!(text.contains("vs Feb 2024: +$20.00 (+200.0%)"));
    }
}
