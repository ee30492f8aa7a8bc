//! Monthly planning overview
//!
//! Compares this month's income with what is committed to budgets and
//! savings, and with what has actually been spent.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use super::budget_status::{evaluate_budgets, BudgetStatus};
use super::summary::{monthly_income, summarize};
use crate::models::{Budget, Expense, Income, Money, SavingsGoal};

/// Overall verdict for the month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FinancialHealth {
    /// Within budget and saving money
    OnTrack,
    /// Spending is above the total budget
    OverBudget,
    InProgress,
}

impl FinancialHealth {
    pub fn message(&self) -> &'static str {
        match self {
            Self::OnTrack => "You are within budget and saving money",
            Self::OverBudget => "You have exceeded your planned budget",
            Self::InProgress => "Keep tracking your spending to reach your goals",
        }
    }
}

impl fmt::Display for FinancialHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::OnTrack => "On track",
            Self::OverBudget => "Over budget",
            Self::InProgress => "In progress",
        };
        f.pad(label)
    }
}

/// Planning figures for the month containing `today`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningOverview {
    /// Income dated this month
    pub total_income: Money,
    pub total_budgeted: Money,
    /// Expenses dated this month
    pub total_spent: Money,
    /// Sum of every savings goal's current balance
    pub total_savings: Money,
    /// income − budgeted − savings; not clamped
    pub available_to_spend: Money,
    /// budgeted − spent
    pub remaining_from_budget: Money,
    /// income − spent
    pub actual_savings: Money,
    /// One entry per budget, in budget order
    pub budget_statuses: Vec<BudgetStatus>,
    pub health: FinancialHealth,
}

impl PlanningOverview {
    pub fn build(
        expenses: &[Expense],
        incomes: &[Income],
        budgets: &[Budget],
        goals: &[SavingsGoal],
        today: NaiveDate,
    ) -> Self {
        let total_income = monthly_income(incomes, today);
        let total_budgeted: Money = budgets.iter().map(|b| b.amount).sum();
        let total_spent = summarize(expenses, today).monthly_expenses;
        let total_savings: Money = goals.iter().map(|g| g.current_amount).sum();

        let actual_savings = total_income - total_spent;

        let health = if actual_savings.is_positive() && total_spent <= total_budgeted {
            FinancialHealth::OnTrack
        } else if total_spent > total_budgeted {
            FinancialHealth::OverBudget
        } else {
            FinancialHealth::InProgress
        };

        Self {
            total_income,
            total_budgeted,
            total_spent,
            total_savings,
            available_to_spend: total_income - total_budgeted - total_savings,
            remaining_from_budget: total_budgeted - total_spent,
            actual_savings,
            budget_statuses: evaluate_budgets(budgets, expenses, today),
            health,
        }
    }

    /// How far actual savings fall short of the amount held in goals
    pub fn savings_shortfall(&self) -> Money {
        if self.actual_savings >= self.total_savings {
            Money::zero()
        } else {
            self.total_savings - self.actual_savings
        }
    }
}
