//! Reports for Spendwise
//!
//! Pure aggregation over the in-memory collections: expense summaries and
//! trends, filtered views, budget status and the monthly planning overview.
//! Every function takes `today` explicitly; the `*_now` variants use the
//! local date.

pub mod budget_status;
pub mod filter;
pub mod planning;
pub mod summary;

pub use budget_status::{evaluate, evaluate_budgets, BudgetStatus};
pub use filter::{filter_expenses, CategoryFilter, ExpenseFilter};
pub use planning::{FinancialHealth, PlanningOverview};
pub use summary::{
    monthly_income, monthly_income_now, monthly_spending_by_category, summarize, summarize_now,
    total_income, CategoryTotal, ExpenseSummary, MonthlyTrendPoint, TREND_MONTHS,
};

use chrono::{Local, NaiveDate};

/// Today's date in the local time zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
