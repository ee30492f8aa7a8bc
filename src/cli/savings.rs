//! Savings goal CLI commands

use clap::Subcommand;
use tracing::info;

use crate::config::settings::Settings;
use crate::display::{format_savings_list, money};
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::form::parse_amount;
use crate::models::{SavingsGoal, SavingsGoalForm};
use crate::storage::Storage;

/// Savings goal subcommands
#[derive(Subcommand)]
pub enum SavingsCommands {
    /// Create a savings goal
    Add {
        /// Goal name
        name: String,
        /// Target amount
        target: String,
        /// Amount already saved
        #[arg(short, long, default_value = "")]
        current: String,
        /// Deadline (YYYY-MM-DD)
        #[arg(short, long)]
        deadline: Option<String>,
    },
    /// List goals with progress
    List,
    /// Edit a goal
    Edit {
        /// Goal ID or name
        goal: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        target: Option<String>,
        #[arg(short, long)]
        current: Option<String>,
        /// New deadline; pass an empty string to clear it
        #[arg(short, long)]
        deadline: Option<String>,
    },
    /// Delete a goal
    Delete {
        /// Goal ID or name
        goal: String,
    },
    /// Add money to a goal
    Fund {
        /// Goal ID or name
        goal: String,
        /// Amount to add
        amount: String,
    },
}

fn find(storage: &Storage, reference: &str) -> SpendwiseResult<SavingsGoal> {
    storage
        .savings
        .find_by_ref(reference)
        .cloned()
        .ok_or_else(|| SpendwiseError::savings_goal_not_found(reference))
}

/// Handle a savings goal command
pub fn handle_savings_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: SavingsCommands,
) -> SpendwiseResult<()> {
    match cmd {
        SavingsCommands::Add {
            name,
            target,
            current,
            deadline,
        } => {
            let form = SavingsGoalForm {
                name,
                target_amount: target,
                current_amount: current,
                deadline,
            };
            form.validate()?;

            let goal = storage.savings.add(&form)?;
            info!(id = %goal.id, "Savings goal created");

            println!("Created savings goal: {}", goal.name);
            println!(
                "  Saved: {} of {}",
                money(settings, goal.current_amount),
                money(settings, goal.target_amount)
            );
            println!("  ID:    {}", goal.id);
        }

        SavingsCommands::List => {
            print!("{}", format_savings_list(storage.savings.all(), settings));
        }

        SavingsCommands::Edit {
            goal,
            name,
            target,
            current,
            deadline,
        } => {
            let found = find(storage, &goal)?;

            let mut form = SavingsGoalForm::from_goal(&found);
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(target) = target {
                form.target_amount = target;
            }
            if let Some(current) = current {
                form.current_amount = current;
            }
            if let Some(deadline) = deadline {
                form.deadline = Some(deadline);
            }
            form.validate()?;

            if let Some(updated) = storage.savings.update(found.id, &form)? {
                println!("Updated savings goal: {}", updated.name);
            }
        }

        SavingsCommands::Delete { goal } => {
            let found = find(storage, &goal)?;
            storage.savings.delete(found.id);
            println!("Deleted savings goal: {}", found.name);
        }

        SavingsCommands::Fund { goal, amount } => {
            let found = find(storage, &goal)?;

            let amount = parse_amount("amount", &amount)?;
            if !amount.is_positive() {
                return Err(SpendwiseError::Validation(
                    "amount: must be a positive number".into(),
                ));
            }

            if let Some(funded) = storage.savings.add_funds(found.id, amount) {
                let progress = funded.progress();
                println!(
                    "Added {} to {}: {} of {} ({:.0}%)",
                    money(settings, amount),
                    funded.name,
                    money(settings, funded.current_amount),
                    money(settings, funded.target_amount),
                    progress.percentage
                );
                if progress.complete {
                    println!("Goal reached!");
                }
            }
        }
    }

    Ok(())
}
