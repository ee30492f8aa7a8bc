//! Report CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_planning, format_summary};
use crate::error::SpendwiseResult;
use crate::reports::{summarize_now, today, PlanningOverview};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Totals, category breakdown and the six-month trend
    Summary,
    /// This month's income against budgets, savings and spending
    Planning,
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> SpendwiseResult<()> {
    match cmd {
        ReportCommands::Summary => {
            let summary = summarize_now(storage.expenses.all());
            print!("{}", format_summary(&summary, settings));
        }

        ReportCommands::Planning => {
            let overview = PlanningOverview::build(
                storage.expenses.all(),
                storage.incomes.all(),
                storage.budgets.all(),
                storage.savings.all(),
                today(),
            );
            print!("{}", format_planning(&overview, settings));
        }
    }

    Ok(())
}
