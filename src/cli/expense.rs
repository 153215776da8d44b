//! Expense CLI commands
//!
//! Handlers for adding, listing, showing, editing and deleting expenses.

use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_table};
use crate::error::LedgerResult;
use crate::ledger::Ledger;
use crate::services::{ExpenseFilter, ExpenseInput, ExpenseService, ExpenseUpdate};

use super::{parse_amount, parse_date, parse_month, today};

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// What the money was spent on
    pub description: String,
    /// Amount (e.g. "12.50" or "$12.50")
    pub amount: String,
    /// Category name or ID
    #[arg(short, long, default_value = "Others")]
    pub category: String,
    /// Expense date (YYYY-MM-DD, default today)
    #[arg(short, long)]
    pub date: Option<String>,
    /// Notes
    #[arg(short, long)]
    pub notes: Option<String>,
}

/// Arguments for `list`
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Filter by category name or ID
    #[arg(short, long)]
    pub category: Option<String>,
    /// Filter by month (YYYY-MM)
    #[arg(short, long)]
    pub month: Option<String>,
    /// Start date (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub from: Option<String>,
    /// End date (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub to: Option<String>,
    /// Number of expenses to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for `edit`
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Expense ID or unambiguous ID prefix
    pub id: String,
    /// New description
    #[arg(long)]
    pub description: Option<String>,
    /// New amount
    #[arg(short, long)]
    pub amount: Option<String>,
    /// New category name or ID
    #[arg(short, long)]
    pub category: Option<String>,
    /// New date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,
    /// New notes
    #[arg(short, long, conflicts_with = "clear_notes")]
    pub notes: Option<String>,
    /// Remove the notes
    #[arg(long)]
    pub clear_notes: bool,
}

/// Handle `add`
pub fn handle_add_command(
    ledger: &mut Ledger,
    settings: &Settings,
    args: AddArgs,
) -> LedgerResult<()> {
    let amount = parse_amount(&args.amount)?;
    let date = match args.date {
        Some(d) => parse_date(&d)?,
        None => today(),
    };

    let mut service = ExpenseService::new(ledger);
    let category_id = service.resolve_category(&args.category)?.id.clone();

    let expense = service.create(ExpenseInput {
        description: args.description,
        amount,
        category_id,
        date,
        notes: args.notes,
    })?;

    println!(
        "Added expense {}: {} {}",
        expense.id.short(),
        expense.description,
        expense.amount.format_with_symbol(&settings.currency_symbol)
    );
    Ok(())
}

/// Handle `list`
pub fn handle_list_command(
    ledger: &mut Ledger,
    settings: &Settings,
    args: ListArgs,
) -> LedgerResult<()> {
    let service = ExpenseService::new(ledger);

    let mut filter = ExpenseFilter::new();
    if let Some(category) = &args.category {
        filter = filter.category(service.resolve_category(category)?.id.clone());
    }
    if let Some(month) = &args.month {
        filter = filter.month(parse_month(month)?);
    }
    let from = args.from.as_deref().map(parse_date).transpose()?;
    let to = args.to.as_deref().map(parse_date).transpose()?;
    filter = filter.date_range(from, to);
    if let Some(limit) = args.limit {
        filter = filter.limit(limit);
    }

    let expenses = service.list(&filter);
    print!(
        "{}",
        format_expense_table(
            &expenses,
            ledger,
            &settings.currency_symbol,
            &settings.date_format
        )
    );
    Ok(())
}

/// Handle `show`
pub fn handle_show_command(ledger: &mut Ledger, settings: &Settings, id: &str) -> LedgerResult<()> {
    let service = ExpenseService::new(ledger);
    let id = service.find(id)?;
    let expense = service.get(&id)?.clone();

    print!(
        "{}",
        format_expense_details(
            &expense,
            ledger.category_of(&expense),
            &settings.currency_symbol
        )
    );
    Ok(())
}

/// Handle `edit`
pub fn handle_edit_command(
    ledger: &mut Ledger,
    settings: &Settings,
    args: EditArgs,
) -> LedgerResult<()> {
    let mut service = ExpenseService::new(ledger);
    let id = service.find(&args.id)?;

    let category_id = match &args.category {
        Some(category) => Some(service.resolve_category(category)?.id.clone()),
        None => None,
    };
    let notes = if args.clear_notes {
        Some(None)
    } else {
        args.notes.map(Some)
    };

    let update = ExpenseUpdate {
        description: args.description,
        amount: args.amount.as_deref().map(parse_amount).transpose()?,
        category_id,
        date: args.date.as_deref().map(parse_date).transpose()?,
        notes,
    };

    if update.is_empty() {
        println!(
            "No changes specified. Use --description, --amount, --category, --date or --notes."
        );
        return Ok(());
    }

    let expense = service.edit(&id, update)?;
    println!(
        "Updated expense {}: {} {}",
        expense.id.short(),
        expense.description,
        expense.amount.format_with_symbol(&settings.currency_symbol)
    );
    Ok(())
}

/// Handle `delete`
pub fn handle_delete_command(ledger: &mut Ledger, id: &str) -> LedgerResult<()> {
    let mut service = ExpenseService::new(ledger);
    let id = service.find(id)?;
    let expense = service.remove(&id)?;
    println!("Deleted expense {}: {}", expense.id.short(), expense.description);
    Ok(())
}
