use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use expense_ledger::cli::{
    handle_add_command, handle_category_command, handle_delete_command, handle_edit_command,
    handle_export_command, handle_import_command, handle_list_command, handle_report_command,
    handle_show_command, AddArgs, CategoryCommands, EditArgs, ExportCommands, ListArgs,
    ReportCommands,
};
use expense_ledger::config::paths::LedgerPaths;
use expense_ledger::config::settings::{Settings, MAX_REPORT_MONTHS};
use expense_ledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Personal expense tracker",
    long_about = "Records expenses by category and date, reports totals per category \
                  and per month, and keeps everything in plain JSON files."
)]
struct Cli {
    /// Directory holding settings and data
    #[arg(long, global = true, env = "EXPENSE_LEDGER_DIR")]
    data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add(AddArgs),

    /// List expenses, newest first
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show one expense
    Show {
        /// Expense ID or unambiguous ID prefix
        id: String,
    },

    /// Edit an expense
    Edit(EditArgs),

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID or unambiguous ID prefix
        id: String,
    },

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Reports over the recorded expenses
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export expenses to a file
    #[command(subcommand)]
    Export(ExportCommands),

    /// Import expenses from a CSV or JSON export
    Import {
        /// Path to a .csv or .json file
        file: PathBuf,
    },

    /// Show current configuration and paths, optionally changing settings
    Config {
        /// Currency symbol used in output
        #[arg(long)]
        currency: Option<String>,
        /// Default number of months in the monthly report
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_REPORT_MONTHS as i64))]
        months: Option<u32>,
    },
}

impl Commands {
    /// Whether the ledger must be saved after the command ran
    fn is_mutating(&self) -> bool {
        match self {
            Commands::Add(_)
            | Commands::Edit(_)
            | Commands::Delete { .. }
            | Commands::Import { .. } => true,
            Commands::Category(cmd) => cmd.is_mutating(),
            _ => false,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(log_level(cli.verbose));

    match main_inner(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn main_inner(cli: Cli) -> Result<()> {
    let paths = match cli.data_dir {
        Some(dir) => LedgerPaths::with_base_dir(dir),
        None => LedgerPaths::new()?,
    };
    debug!("Using data directory {}", paths.base_dir().display());

    let mut settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone());
    let mut ledger = storage.load_or_recover()?;

    let Some(command) = cli.command else {
        println!("expense - personal expense tracker");
        println!();
        println!("Run 'expense --help' for usage information.");
        return Ok(());
    };
    let mutating = command.is_mutating();

    match command {
        Commands::Add(args) => handle_add_command(&mut ledger, &settings, args)?,
        Commands::List(args) => handle_list_command(&mut ledger, &settings, args)?,
        Commands::Show { id } => handle_show_command(&mut ledger, &settings, &id)?,
        Commands::Edit(args) => handle_edit_command(&mut ledger, &settings, args)?,
        Commands::Delete { id } => handle_delete_command(&mut ledger, &id)?,
        Commands::Category(cmd) => handle_category_command(&mut ledger, cmd)?,
        Commands::Report(cmd) => handle_report_command(&ledger, &settings, cmd)?,
        Commands::Export(cmd) => handle_export_command(&ledger, cmd)?,
        Commands::Import { file } => handle_import_command(&mut ledger, &file)?,
        Commands::Config { currency, months } => {
            if currency.is_some() || months.is_some() {
                if let Some(currency) = currency {
                    settings.currency_symbol = currency;
                }
                if let Some(months) = months {
                    settings.report_months = months;
                }
                settings.save(&paths)?;
                println!("Settings saved.");
                println!();
            }

            println!("Expense Ledger Configuration");
            println!("============================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Expenses file:   {}", paths.expenses_file().display());
            println!("Categories file: {}", paths.categories_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Report months:   {}", settings.report_months);
            println!("  Date format:     {}", settings.date_format);
        }
    }

    if mutating {
        storage.save(&ledger)?;
    }

    Ok(())
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "expense_ledger={},{}={}",
            level,
            env!("CARGO_CRATE_NAME"),
            level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
