use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use spendwise::cli::{
    handle_budget_command, handle_expense_command, handle_export_command, handle_income_command,
    handle_report_command, handle_savings_command,
};
use spendwise::config::{paths::SpendwisePaths, settings::Settings};
use spendwise::storage::Storage;

#[derive(Parser)]
#[command(
    name = "spendwise",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal finance tracker",
    long_about = "Spendwise records expenses, income, monthly category budgets and \
                  savings goals, and shows where your money goes from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense commands
    #[command(subcommand, alias = "exp")]
    Expense(spendwise::cli::ExpenseCommands),

    /// Income commands
    #[command(subcommand)]
    Income(spendwise::cli::IncomeCommands),

    /// Budget commands
    #[command(subcommand)]
    Budget(spendwise::cli::BudgetCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Savings(spendwise::cli::SavingsCommands),

    /// Summaries and planning
    #[command(subcommand)]
    Report(spendwise::cli::ReportCommands),

    /// Export data
    #[command(subcommand)]
    Export(spendwise::cli::ExportCommands),

    /// Create the data directory and settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SpendwisePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_logging(&settings);

    let mut storage = Storage::open(&paths)?;

    let result = match cli.command {
        Some(Commands::Expense(cmd)) => handle_expense_command(&mut storage, &settings, cmd),
        Some(Commands::Income(cmd)) => handle_income_command(&mut storage, &settings, cmd),
        Some(Commands::Budget(cmd)) => handle_budget_command(&mut storage, &settings, cmd),
        Some(Commands::Savings(cmd)) => handle_savings_command(&mut storage, &settings, cmd),
        Some(Commands::Report(cmd)) => handle_report_command(&storage, &settings, cmd),
        Some(Commands::Export(cmd)) => handle_export_command(&storage, cmd),
        Some(Commands::Init) => {
            println!("Initializing Spendwise at: {}", paths.base_dir().display());
            settings.save(&paths).map(|_| {
                println!("Initialization complete!");
                println!();
                println!("Run 'spendwise expense add 12.50 \"Lunch\" --category Food' to record an expense.");
            })
        }
        Some(Commands::Config) => {
            println!("Spendwise Configuration");
            println!("=======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Log level:       {}", settings.log_level);
            Ok(())
        }
        None => {
            println!("Spendwise - personal finance tracker");
            println!();
            println!("Run 'spendwise --help' for usage information.");
            Ok(())
        }
    };

    for failure in storage.take_failures() {
        eprintln!("Warning: {}", failure);
    }

    Ok(result?)
}
