//! Expense CLI commands

use clap::Subcommand;
use tracing::info;

use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_list};
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::form::parse_optional_date;
use crate::models::{Expense, ExpenseForm};
use crate::reports::{filter_expenses, today, CategoryFilter, ExpenseFilter};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount (e.g., "12.50")
        amount: String,
        /// What the money was spent on
        description: String,
        /// Category (Food, Transportation, Entertainment, Shopping, Bills, Utilities, Grocery, Other)
        #[arg(short, long, default_value = "Other")]
        category: String,
        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List expenses, newest first
    List {
        /// Match against description or category name
        #[arg(short, long, default_value = "")]
        search: String,
        /// Category name or "All"
        #[arg(short, long, default_value = "All")]
        category: String,
        /// Start of date range (YYYY-MM-DD, needs --to)
        #[arg(long)]
        from: Option<String>,
        /// End of date range (YYYY-MM-DD, needs --from)
        #[arg(long)]
        to: Option<String>,
        /// Maximum number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show expense details
    Show {
        /// Expense ID
        expense: String,
    },
    /// Edit an expense
    Edit {
        /// Expense ID
        expense: String,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete an expense
    Delete {
        /// Expense ID
        expense: String,
    },
}

fn find(storage: &Storage, reference: &str) -> SpendwiseResult<Expense> {
    storage
        .expenses
        .find_by_ref(reference)
        .cloned()
        .ok_or_else(|| SpendwiseError::expense_not_found(reference))
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> SpendwiseResult<()> {
    match cmd {
        ExpenseCommands::Add {
            amount,
            description,
            category,
            date,
        } => {
            let today = today();
            let form = ExpenseForm {
                amount,
                category,
                description,
                date: date.unwrap_or_else(|| today.format("%Y-%m-%d").to_string()),
            };
            form.validate(today)?;

            let expense = storage.expenses.add(&form)?;
            info!(id = %expense.id, "Expense recorded");

            println!("Added expense: {}", expense.description);
            println!("  Amount:   {}", crate::display::money(settings, expense.amount));
            println!("  Category: {}", expense.category);
            println!("  ID:       {}", expense.id);
        }

        ExpenseCommands::List {
            search,
            category,
            from,
            to,
            limit,
        } => {
            let filter = ExpenseFilter {
                search,
                category: category
                    .parse::<CategoryFilter>()
                    .map_err(|e| SpendwiseError::Validation(e.to_string()))?,
                start_date: parse_optional_date("from", from.as_deref())?,
                end_date: parse_optional_date("to", to.as_deref())?,
            };

            let mut found = filter_expenses(storage.expenses.all(), &filter);
            if let Some(limit) = limit {
                found.truncate(limit);
            }
            print!("{}", format_expense_list(&found, settings));
        }

        ExpenseCommands::Show { expense } => {
            let found = find(storage, &expense)?;
            print!("{}", format_expense_details(&found, settings));
        }

        ExpenseCommands::Edit {
            expense,
            amount,
            category,
            description,
            date,
        } => {
            let found = find(storage, &expense)?;

            if amount.is_none() && category.is_none() && description.is_none() && date.is_none() {
                println!("No changes specified.");
                return Ok(());
            }

            let mut form = ExpenseForm::from_expense(&found);
            if let Some(amount) = amount {
                form.amount = amount;
            }
            if let Some(category) = category {
                form.category = category;
            }
            if let Some(description) = description {
                form.description = description;
            }
            if let Some(date) = date {
                form.date = date;
            }
            form.validate(today())?;

            if let Some(updated) = storage.expenses.update(found.id, &form)? {
                println!("Updated expense: {}", updated.description);
            }
        }

        ExpenseCommands::Delete { expense } => {
            let found = find(storage, &expense)?;
            storage.expenses.delete(found.id);
            println!("Deleted expense: {}", found.description);
        }
    }

    Ok(())
}
