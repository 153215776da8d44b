//! Aggregations over a slice of expenses
//!
//! Every function here is pure and recomputes from its input; nothing is
//! cached, so callers simply re-run them after each ledger mutation.

use std::collections::BTreeMap;

use crate::models::{Category, CategoryId, Expense, Money, YearMonth};

/// Total spent in one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money,
}

/// Sum of all amounts; zero for an empty slice
pub fn total_amount(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Sum of the amounts in one category
pub fn total_by_category(expenses: &[Expense], category_id: &CategoryId) -> Money {
    expenses
        .iter()
        .filter(|e| &e.category_id == category_id)
        .map(|e| e.amount)
        .sum()
}

/// Sum of the amounts dated within one month
pub fn total_by_month(expenses: &[Expense], month: YearMonth) -> Money {
    expenses
        .iter()
        .filter(|e| month.contains(e.date))
        .map(|e| e.amount)
        .sum()
}

/// Per-category totals in the order of `categories`.
///
/// Categories whose total is exactly zero are left out.
pub fn amounts_by_category(categories: &[Category], expenses: &[Expense]) -> Vec<CategoryTotal> {
    categories
        .iter()
        .map(|category| CategoryTotal {
            category: category.clone(),
            total: total_by_category(expenses, &category.id),
        })
        .filter(|entry| !entry.total.is_zero())
        .collect()
}

/// Totals for the `months` consecutive months ending at the current month
pub fn monthly_series(expenses: &[Expense], months: u32) -> BTreeMap<YearMonth, Money> {
    monthly_series_ending(expenses, months, YearMonth::current())
}

/// Totals for the `months` consecutive months ending at `end` (inclusive).
///
/// Months without expenses are present with a zero total.
pub fn monthly_series_ending(
    expenses: &[Expense],
    months: u32,
    end: YearMonth,
) -> BTreeMap<YearMonth, Money> {
    (0..months)
        .rev()
        .map(|back| {
            let month = end.minus_months(back);
            (month, total_by_month(expenses, month))
        })
        .collect()
}

/// Mean amount per expense, rounded to the cent; zero for an empty slice
pub fn average(expenses: &[Expense]) -> Money {
    if expenses.is_empty() {
        return Money::zero();
    }
    total_amount(expenses).split_evenly(expenses.len())
}

/// The single most expensive expense
pub fn largest_expense(expenses: &[Expense]) -> Option<&Expense> {
    expenses.iter().max_by_key(|e| e.amount)
}

/// Share of `part` in `total` as a percentage; zero when `total` is zero
pub fn percentage(part: Money, total: Money) -> f64 {
    if total.is_zero() {
        0.0
    } else {
        part.cents() as f64 / total.cents() as f64 * 100.0
    }
}

/// Spending in a month compared with the month before
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthComparison {
    pub month: YearMonth,
    pub total: Money,
    pub previous_total: Money,
    pub count: usize,
}

impl MonthComparison {
    pub fn compute(expenses: &[Expense], month: YearMonth) -> Self {
        Self {
            month,
            total: total_by_month(expenses, month),
            previous_total: total_by_month(expenses, month.prev()),
            count: expenses.iter().filter(|e| month.contains(e.date)).count(),
        }
    }

    /// Difference against the previous month
    pub fn change(&self) -> Money {
        self.total - self.previous_total
    }

    /// Relative change in percent; `None` when the previous month had no spending
    pub fn change_percentage(&self) -> Option<f64> {
        if self.previous_total.is_zero() {
            None
        } else {
            Some(percentage(self.change(), self.previous_total))
        }
    }
}
