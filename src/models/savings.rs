//! Savings goal model
//!
//! A named target amount with a running balance. The balance may exceed the
//! target; a goal is complete once `current_amount >= target_amount`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::form::{
    check_positive_amount, parse_amount, parse_optional_amount, parse_optional_date, FieldErrors,
    MAX_AMOUNT,
};
use super::ids::SavingsGoalId;
use super::money::Money;
use crate::error::SpendwiseResult;

/// Longest allowed goal name, in characters
pub const MAX_GOAL_NAME_LEN: usize = 100;

/// A savings goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub id: SavingsGoalId,
    pub name: String,
    pub target_amount: Money,
    pub current_amount: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Savings goal form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavingsGoalForm {
    pub name: String,
    pub target_amount: String,
    /// Empty means zero
    pub current_amount: String,
    pub deadline: Option<String>,
}

/// Progress toward a goal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavingsProgress {
    /// current / target × 100, or 0 when the target is zero
    pub percentage: f64,
    /// target − current; negative once the goal is overfunded
    pub remaining: Money,
    pub complete: bool,
}

impl SavingsGoal {
    /// Build a new goal from form input
    pub fn from_form(form: &SavingsGoalForm, now: DateTime<Utc>) -> SpendwiseResult<Self> {
        let (target_amount, current_amount, deadline) = parse_fields(form)?;
        Ok(Self {
            id: SavingsGoalId::new(),
            name: form.name.clone(),
            target_amount,
            current_amount,
            deadline,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace every mutable field from form input
    pub fn apply_form(
        &mut self,
        form: &SavingsGoalForm,
        now: DateTime<Utc>,
    ) -> SpendwiseResult<()> {
        let (target_amount, current_amount, deadline) = parse_fields(form)?;
        self.name = form.name.clone();
        self.target_amount = target_amount;
        self.current_amount = current_amount;
        self.deadline = deadline;
        self.updated_at = now;
        Ok(())
    }

    /// Add money to the goal's balance
    pub fn add_funds(&mut self, amount: Money, now: DateTime<Utc>) {
        self.current_amount += amount;
        self.updated_at = now;
    }

    pub fn is_complete(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    pub fn progress(&self) -> SavingsProgress {
        SavingsProgress {
            percentage: self.current_amount.percentage_of(self.target_amount),
            remaining: self.target_amount - self.current_amount,
            complete: self.is_complete(),
        }
    }
}

fn parse_fields(form: &SavingsGoalForm) -> SpendwiseResult<(Money, Money, Option<NaiveDate>)> {
    let target = parse_amount("target_amount", &form.target_amount)?;
    let current = parse_optional_amount("current_amount", &form.current_amount)?;
    let deadline = parse_optional_date("deadline", form.deadline.as_deref())?;
    Ok((target, current, deadline))
}

impl SavingsGoalForm {
    /// Prefill a form from an existing goal (for editing)
    pub fn from_goal(goal: &SavingsGoal) -> Self {
        Self {
            name: goal.name.clone(),
            target_amount: goal.target_amount.to_decimal_string(),
            current_amount: goal.current_amount.to_decimal_string(),
            deadline: goal.deadline.map(|d| d.format("%Y-%m-%d").to_string()),
        }
    }

    /// Field-level validation
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.add("name", "Name is required");
        } else if self.name.chars().count() > MAX_GOAL_NAME_LEN {
            errors.add("name", "Name must be at most 100 characters");
        }

        check_positive_amount(&mut errors, "target_amount", &self.target_amount);

        if !self.current_amount.trim().is_empty() {
            match Money::parse(&self.current_amount) {
                Ok(current) if current.is_negative() => {
                    errors.add("current_amount", "Current amount cannot be negative")
                }
                Ok(current) if current > MAX_AMOUNT => errors.add(
                    "current_amount",
                    "Current amount cannot exceed $1,000,000,000",
                ),
                Ok(_) => {}
                Err(e) => errors.add("current_amount", e.to_string()),
            }
        }

        if parse_optional_date("deadline", self.deadline.as_deref()).is_err() {
            errors.add("deadline", "Deadline must be in YYYY-MM-DD format");
        }

        errors.into_result()
    }
}
