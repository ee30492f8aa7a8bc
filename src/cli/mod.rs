//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the storage and report layers.

pub mod budget;
pub mod expense;
pub mod export;
pub mod income;
pub mod report;
pub mod savings;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands};
pub use income::{handle_income_command, IncomeCommands};
pub use report::{handle_report_command, ReportCommands};
pub use savings::{handle_savings_command, SavingsCommands};
