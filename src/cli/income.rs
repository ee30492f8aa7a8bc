//! Income CLI commands

use clap::Subcommand;
use tracing::info;

use crate::config::settings::Settings;
use crate::display::{format_income_list, money};
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{Income, IncomeForm};
use crate::reports::{monthly_income_now, today, total_income};
use crate::storage::Storage;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Record income
    Add {
        /// Amount (e.g., "3000")
        amount: String,
        /// Where the money came from
        description: String,
        /// Category (Salary, Freelance, Investment, Business, Gift, Other)
        #[arg(short, long, default_value = "Salary")]
        category: String,
        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Mark as recurring (informational)
        #[arg(short, long)]
        recurring: bool,
    },
    /// List income with totals
    List,
    /// Edit an income entry
    Edit {
        /// Income ID
        income: String,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short, long)]
        recurring: Option<bool>,
    },
    /// Delete an income entry
    Delete {
        /// Income ID
        income: String,
    },
}

fn find(storage: &Storage, reference: &str) -> SpendwiseResult<Income> {
    storage
        .incomes
        .find_by_ref(reference)
        .cloned()
        .ok_or_else(|| SpendwiseError::income_not_found(reference))
}

/// Handle an income command
pub fn handle_income_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: IncomeCommands,
) -> SpendwiseResult<()> {
    match cmd {
        IncomeCommands::Add {
            amount,
            description,
            category,
            date,
            recurring,
        } => {
            let form = IncomeForm {
                amount,
                category,
                description,
                date: date.unwrap_or_else(|| today().format("%Y-%m-%d").to_string()),
                is_recurring: recurring,
            };
            form.validate()?;

            let income = storage.incomes.add(&form)?;
            info!(id = %income.id, "Income recorded");

            println!("Added income: {}", income.description);
            println!("  Amount:   {}", money(settings, income.amount));
            println!("  Category: {}", income.category);
            println!("  ID:       {}", income.id);
        }

        IncomeCommands::List => {
            let incomes = storage.incomes.all();
            print!("{}", format_income_list(incomes, settings));
            if !incomes.is_empty() {
                println!("This month: {}", money(settings, monthly_income_now(incomes)));
                println!("All time:   {}", money(settings, total_income(incomes)));
            }
        }

        IncomeCommands::Edit {
            income,
            amount,
            category,
            description,
            date,
            recurring,
        } => {
            let found = find(storage, &income)?;

            let mut form = IncomeForm::from_income(&found);
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
            if let Some(recurring) = recurring {
                form.is_recurring = recurring;
            }
            form.validate()?;

            if let Some(updated) = storage.incomes.update(found.id, &form)? {
                println!("Updated income: {}", updated.description);
            }
        }

        IncomeCommands::Delete { income } => {
            let found = find(storage, &income)?;
            storage.incomes.delete(found.id);
            println!("Deleted income: {}", found.description);
        }
    }

    Ok(())
}
