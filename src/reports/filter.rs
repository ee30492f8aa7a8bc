//! Filtered expense views

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

use crate::models::{Expense, ExpenseCategory, UnknownCategory};

/// Category criterion for a filtered view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ExpenseCategory),
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.pad("All"),
            Self::Only(category) => fmt::Display::fmt(category, f),
        }
    }
}

/// Criteria for narrowing the expense list; all criteria must match
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    /// Case-insensitive substring of the description or category name
    pub search: String,
    pub category: CategoryFilter,
    /// The date range only applies when both bounds are set
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ExpenseFilter {
    pub fn matches(&self, expense: &Expense) -> bool {
        self.matches_search(expense) && self.matches_category(expense) && self.matches_dates(expense)
    }

    fn matches_search(&self, expense: &Expense) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        expense.description.to_lowercase().contains(&needle)
            || expense.category.name().to_lowercase().contains(&needle)
    }

    fn matches_category(&self, expense: &Expense) -> bool {
        match self.category {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => expense.category == category,
        }
    }

    fn matches_dates(&self, expense: &Expense) -> bool {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => expense.date >= start && expense.date <= end,
            _ => true,
        }
    }
}

/// Expenses matching `filter`, in their original order
pub fn filter_expenses<'a>(expenses: &'a [Expense], filter: &ExpenseFilter) -> Vec<&'a Expense> {
    expenses.iter().filter(|e| filter.matches(e)).collect()
}
