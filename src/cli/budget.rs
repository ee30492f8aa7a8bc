//! Budget CLI commands
//!
//! Budgets are monthly limits per expense category. `set` creates a budget
//! or replaces the amount of an existing one for the same category.

use clap::Subcommand;
use tracing::info;

use crate::config::settings::Settings;
use crate::display::{format_budget_list, format_budget_status, money};
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{Budget, BudgetForm, ExpenseCategory};
use crate::reports::{evaluate_budgets, today};
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the monthly budget for a category
    Set {
        /// Expense category
        category: String,
        /// Monthly amount (e.g., "300")
        amount: String,
    },
    /// List budgets
    List,
    /// Edit a budget
    Edit {
        /// Budget ID or category
        budget: String,
        /// Move the budget to another category
        #[arg(short, long)]
        category: Option<String>,
        /// New monthly amount
        #[arg(short, long)]
        amount: Option<String>,
    },
    /// Delete a budget
    Delete {
        /// Budget ID or category
        budget: String,
    },
    /// Show this month's spending against each budget
    Status,
}

fn find(storage: &Storage, reference: &str) -> SpendwiseResult<Budget> {
    storage
        .budgets
        .find_by_ref(reference)
        .cloned()
        .ok_or_else(|| SpendwiseError::budget_not_found(reference))
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> SpendwiseResult<()> {
    match cmd {
        BudgetCommands::Set { category, amount } => {
            let form = BudgetForm { category, amount };
            form.validate(&[])?;

            let existed = form
                .category
                .parse::<ExpenseCategory>()
                .ok()
                .and_then(|c| storage.budgets.get_by_category(c))
                .is_some();

            let budget = storage.budgets.add(&form)?;
            info!(id = %budget.id, category = %budget.category, "Budget set");

            let verb = if existed { "Updated" } else { "Created" };
            println!(
                "{} budget: {} {} per month",
                verb,
                budget.category,
                money(settings, budget.amount)
            );
        }

        BudgetCommands::List => {
            print!("{}", format_budget_list(storage.budgets.all(), settings));
        }

        BudgetCommands::Edit {
            budget,
            category,
            amount,
        } => {
            let found = find(storage, &budget)?;

            let form = BudgetForm {
                category: category.unwrap_or_else(|| found.category.to_string()),
                amount: amount.unwrap_or_else(|| found.amount.to_decimal_string()),
            };
            form.validate(&storage.budgets.taken_categories(Some(found.id)))?;

            if let Some(updated) = storage.budgets.update(found.id, &form)? {
                println!(
                    "Updated budget: {} {} per month",
                    updated.category,
                    money(settings, updated.amount)
                );
            }
        }

        BudgetCommands::Delete { budget } => {
            let found = find(storage, &budget)?;
            storage.budgets.delete(found.id);
            println!("Deleted budget for {}", found.category);
        }

        BudgetCommands::Status => {
            let statuses = evaluate_budgets(storage.budgets.all(), storage.expenses.all(), today());
            print!("{}", format_budget_status(&statuses, settings));
        }
    }

    Ok(())
}
