//! Budget model
//!
//! A fixed monthly spending limit for one expense category. At most one
//! budget exists per category.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ExpenseCategory;
use super::form::{check_positive_amount, parse_amount, FieldErrors};
use super::ids::BudgetId;
use super::money::Money;
use crate::error::{SpendwiseError, SpendwiseResult};

/// A monthly limit for a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: BudgetId,
    pub category: ExpenseCategory,
    /// Fixed monthly amount for this category
    pub amount: Money,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Budget form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetForm {
    pub category: String,
    pub amount: String,
}

/// How close a category is to its limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTier {
    Safe,
    Warning,
    Danger,
    Exceeded,
}

impl StatusTier {
    pub const WARNING_PERCENT: f64 = 75.0;
    pub const DANGER_PERCENT: f64 = 90.0;
    pub const EXCEEDED_PERCENT: f64 = 100.0;

    /// Classify a spent-to-budget percentage; the highest threshold reached wins
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= Self::EXCEEDED_PERCENT {
            Self::Exceeded
        } else if percentage >= Self::DANGER_PERCENT {
            Self::Danger
        } else if percentage >= Self::WARNING_PERCENT {
            Self::Warning
        } else {
            Self::Safe
        }
    }

    /// Short message shown next to a category
    pub fn message(&self) -> &'static str {
        match self {
            Self::Safe => "Under control",
            Self::Warning => "You have used 75% of this budget",
            Self::Danger => "Careful, you are close to the limit",
            Self::Exceeded => "Budget exceeded",
        }
    }
}

impl fmt::Display for StatusTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Safe => "safe",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Exceeded => "exceeded",
        };
        f.pad(label)
    }
}

impl Budget {
    /// Build a new budget from form input
    pub fn from_form(form: &BudgetForm, now: DateTime<Utc>) -> SpendwiseResult<Self> {
        let (category, amount) = parse_fields(form)?;
        Ok(Self {
            id: BudgetId::new(),
            category,
            amount,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace category and amount, keeping id and creation time
    pub fn apply_form(&mut self, form: &BudgetForm, now: DateTime<Utc>) -> SpendwiseResult<()> {
        let (category, amount) = parse_fields(form)?;
        self.category = category;
        self.amount = amount;
        self.updated_at = now;
        Ok(())
    }
}

fn parse_fields(form: &BudgetForm) -> SpendwiseResult<(ExpenseCategory, Money)> {
    let category = form
        .category
        .parse()
        .map_err(|e| SpendwiseError::Validation(format!("category: {}", e)))?;
    let amount = parse_amount("amount", &form.amount)?;
    Ok((category, amount))
}

impl BudgetForm {
    /// Field-level validation
    ///
    /// `taken` lists categories that already have a budget (excluding the one
    /// being edited); choosing one of them is reported on the category field.
    pub fn validate(&self, taken: &[ExpenseCategory]) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        match self.category.parse::<ExpenseCategory>() {
            Ok(category) if taken.contains(&category) => {
                errors.add("category", "A budget for this category already exists")
            }
            Ok(_) => {}
            Err(e) => errors.add("category", e.to_string()),
        }

        check_positive_amount(&mut errors, "amount", &self.amount);

        errors.into_result()
    }
}
