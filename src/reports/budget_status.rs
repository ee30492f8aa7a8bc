//! Budget status evaluation
//!
//! Classifies how much of a category's monthly budget has been spent.

use chrono::NaiveDate;
use serde::Serialize;

use super::summary::monthly_spending_by_category;
use crate::models::{Budget, Expense, ExpenseCategory, Money, StatusTier};

/// Spend-versus-budget for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetStatus {
    pub category: ExpenseCategory,
    pub budgeted: Money,
    pub spent: Money,
    /// Negative once the budget is exceeded
    pub remaining: Money,
    /// spent / budgeted × 100, or 0 when nothing is budgeted
    pub percentage: f64,
    pub status: StatusTier,
}

/// Evaluate one category; performs no date filtering of its own
pub fn evaluate(category: ExpenseCategory, budgeted: Money, spent: Money) -> BudgetStatus {
    let percentage = spent.percentage_of(budgeted);
    BudgetStatus {
        category,
        budgeted,
        spent,
        remaining: budgeted - spent,
        percentage,
        status: StatusTier::from_percentage(percentage),
    }
}

/// Status of every budget against spending in the month of `today`
///
/// Results follow the order of `budgets`.
pub fn evaluate_budgets(budgets: &[Budget], expenses: &[Expense], today: NaiveDate) -> Vec<BudgetStatus> {
    let spending = monthly_spending_by_category(expenses, today);

    budgets
        .iter()
        .map(|budget| {
            let spent = spending
                .iter()
                .find(|t| t.category == budget.category)
                .map(|t| t.amount)
                .unwrap_or_default();
            evaluate(budget.category, budget.amount, spent)
        })
        .collect()
}
