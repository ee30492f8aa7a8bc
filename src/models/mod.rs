//! Core data models for Spendwise
//!
//! This module contains the data structures of the finance tracker:
//! expenses, income, budgets, savings goals, and the form types that carry
//! raw user input toward them.

pub mod budget;
pub mod category;
pub mod expense;
pub mod form;
pub mod ids;
pub mod income;
pub mod money;
pub mod period;
pub mod savings;

pub use budget::{Budget, BudgetForm, StatusTier};
pub use category::{ExpenseCategory, IncomeCategory, UnknownCategory};
pub use expense::{Expense, ExpenseForm};
pub use form::FieldErrors;
pub use ids::{BudgetId, ExpenseId, IncomeId, SavingsGoalId};
pub use income::{Income, IncomeForm};
pub use money::{Money, MoneyParseError};
pub use period::CalendarMonth;
pub use savings::{SavingsGoal, SavingsGoalForm, SavingsProgress};
