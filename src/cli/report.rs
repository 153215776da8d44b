//! CLI commands for reports
//!
//! Every report is recomputed from the current ledger on each call.

use clap::Subcommand;

use crate::config::settings::{Settings, MAX_REPORT_MONTHS};
use crate::display::{format_category_breakdown, format_monthly_report, format_overview, Overview};
use crate::error::LedgerResult;
use crate::ledger::Ledger;
use crate::models::{Expense, YearMonth};
use crate::reports::{
    amounts_by_category, average, largest_expense, monthly_series, total_amount, MonthComparison,
    SummaryReport,
};

use super::parse_month;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Summary with totals and a per-category table
    Summary {
        /// Restrict to one month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Month-by-month totals ending at the current month
    Monthly {
        /// Number of months (default from settings)
        #[arg(
            short = 'n',
            long,
            value_parser = clap::value_parser!(u32).range(1..=MAX_REPORT_MONTHS as i64)
        )]
        months: Option<u32>,
    },

    /// Per-category breakdown with bars
    Categories {
        /// Restrict to one month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Headline numbers and this month compared with the last
    Overview,
}

/// Handle a report command
pub fn handle_report_command(
    ledger: &Ledger,
    settings: &Settings,
    cmd: ReportCommands,
) -> LedgerResult<()> {
    let currency = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Summary { month } => {
            let expenses = expenses_for(ledger, month.as_deref())?;
            let totals = amounts_by_category(&ledger.list_categories(), &expenses);
            print!("{}", SummaryReport::generate(&expenses, totals).render(currency));
        }

        ReportCommands::Monthly { months } => {
            let months = months
                .unwrap_or(settings.report_months)
                .min(MAX_REPORT_MONTHS);
            let series = monthly_series(ledger.expenses().as_slice(), months);
            print!("{}", format_monthly_report(&series, currency));
        }

        ReportCommands::Categories { month } => {
            let expenses = expenses_for(ledger, month.as_deref())?;
            let totals = amounts_by_category(&ledger.list_categories(), &expenses);
            print!(
                "{}",
                format_category_breakdown(&totals, total_amount(&expenses), currency)
            );
        }

        ReportCommands::Overview => {
            let expenses = ledger.expenses().as_slice();
            let overview = Overview {
                total: total_amount(expenses),
                count: expenses.len(),
                average: average(expenses),
                largest: largest_expense(expenses),
                this_month: MonthComparison::compute(expenses, YearMonth::current()),
            };
            print!("{}", format_overview(&overview, currency));
        }
    }

    Ok(())
}

fn expenses_for(ledger: &Ledger, month: Option<&str>) -> LedgerResult<Vec<Expense>> {
    match month {
        Some(month) => Ok(ledger.list_by_month(parse_month(month)?)),
        None => Ok(ledger.list_expenses()),
    }
}
