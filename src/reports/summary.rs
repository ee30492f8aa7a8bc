//! Expense and income aggregation

use chrono::NaiveDate;
use serde::Serialize;

use super::today;
use crate::models::{CalendarMonth, Expense, ExpenseCategory, Income, Money};

/// Number of months in the spending trend
pub const TREND_MONTHS: usize = 6;

/// Amount attributed to one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub amount: Money,
}

/// Spending in one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyTrendPoint {
    /// Short month name, e.g. "Oct"
    pub label: String,
    pub month: CalendarMonth,
    pub amount: Money,
}

/// Headline figures for the expense collection
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSummary {
    pub total_expenses: Money,
    /// Spending within the calendar month of `today`
    pub monthly_expenses: Money,
    pub average_expense: Money,
    pub expense_count: usize,
    /// Every expense category in declaration order, zero when unused
    pub category_breakdown: Vec<CategoryTotal>,
    /// Oldest month first, ending with the current month
    pub monthly_trend: Vec<MonthlyTrendPoint>,
}

impl ExpenseSummary {
    /// Breakdown amount for a single category
    pub fn category_amount(&self, category: ExpenseCategory) -> Money {
        self.category_breakdown
            .iter()
            .find(|t| t.category == category)
            .map(|t| t.amount)
            .unwrap_or_default()
    }
}

/// Summarize all expenses relative to `today`
pub fn summarize(expenses: &[Expense], today: NaiveDate) -> ExpenseSummary {
    let current = CalendarMonth::containing(today);

    let total_expenses: Money = expenses.iter().map(|e| e.amount).sum();
    let expense_count = expenses.len();

    let monthly_trend = current
        .trailing(TREND_MONTHS)
        .into_iter()
        .map(|month| MonthlyTrendPoint {
            label: month.short_label(),
            month,
            amount: spent_in(expenses, month),
        })
        .collect();

    ExpenseSummary {
        total_expenses,
        monthly_expenses: spent_in(expenses, current),
        average_expense: total_expenses.average_over(expense_count),
        expense_count,
        category_breakdown: breakdown(expenses.iter()),
        monthly_trend,
    }
}

/// [`summarize`] against the local date
pub fn summarize_now(expenses: &[Expense]) -> ExpenseSummary {
    summarize(expenses, today())
}

/// Spending per category within the month of `today`
pub fn monthly_spending_by_category(expenses: &[Expense], today: NaiveDate) -> Vec<CategoryTotal> {
    let month = CalendarMonth::containing(today);
    breakdown(expenses.iter().filter(|e| month.contains(e.date)))
}

/// Income dated within the month of `today`
pub fn monthly_income(incomes: &[Income], today: NaiveDate) -> Money {
    let month = CalendarMonth::containing(today);
    incomes
        .iter()
        .filter(|i| month.contains(i.date))
        .map(|i| i.amount)
        .sum()
}

/// [`monthly_income`] against the local date
pub fn monthly_income_now(incomes: &[Income]) -> Money {
    monthly_income(incomes, today())
}

/// All income ever recorded
pub fn total_income(incomes: &[Income]) -> Money {
    incomes.iter().map(|i| i.amount).sum()
}

fn spent_in(expenses: &[Expense], month: CalendarMonth) -> Money {
    expenses
        .iter()
        .filter(|e| month.contains(e.date))
        .map(|e| e.amount)
        .sum()
}

fn breakdown<'a>(expenses: impl Iterator<Item = &'a Expense>) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = ExpenseCategory::ALL
        .iter()
        .map(|&category| CategoryTotal {
            category,
            amount: Money::zero(),
        })
        .collect();

    for expense in expenses {
        if let Some(total) = totals.iter_mut().find(|t| t.category == expense.category) {
            total.amount += expense.amount;
        }
    }

    totals
}
