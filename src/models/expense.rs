//! Expense model
//!
//! A single outflow of money, tagged with one of the fixed expense categories.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::category::ExpenseCategory;
use super::form::{check_positive_amount, parse_amount, parse_date, FieldErrors};
use super::ids::ExpenseId;
use super::money::Money;
use crate::error::{SpendwiseError, SpendwiseResult};

/// Largest amount a single expense may carry
pub const MAX_EXPENSE_AMOUNT: Money = Money::from_dollars(1_000_000);

/// Longest allowed expense description, in characters
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: ExpenseId,
    pub amount: Money,
    pub category: ExpenseCategory,
    pub description: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Expense form input, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseForm {
    pub amount: String,
    pub category: String,
    pub description: String,
    pub date: String,
}

impl Expense {
    /// Build a new expense from form input, stamping both timestamps with `now`
    pub fn from_form(form: &ExpenseForm, now: DateTime<Utc>) -> SpendwiseResult<Self> {
        let fields = ParsedExpense::parse(form)?;
        Ok(Self {
            id: ExpenseId::new(),
            amount: fields.amount,
            category: fields.category,
            description: fields.description,
            date: fields.date,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace every mutable field from form input, keeping id and creation time
    pub fn apply_form(&mut self, form: &ExpenseForm, now: DateTime<Utc>) -> SpendwiseResult<()> {
        let fields = ParsedExpense::parse(form)?;
        self.amount = fields.amount;
        self.category = fields.category;
        self.description = fields.description;
        self.date = fields.date;
        self.updated_at = now;
        Ok(())
    }
}

struct ParsedExpense {
    amount: Money,
    category: ExpenseCategory,
    description: String,
    date: NaiveDate,
}

impl ParsedExpense {
    fn parse(form: &ExpenseForm) -> SpendwiseResult<Self> {
        Ok(Self {
            amount: parse_amount("amount", &form.amount)?,
            category: form
                .category
                .parse()
                .map_err(|e| SpendwiseError::Validation(format!("category: {}", e)))?,
            description: form.description.clone(),
            date: parse_date("date", &form.date)?,
        })
    }
}

impl ExpenseForm {
    /// Prefill a form from an existing expense (for editing)
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            amount: expense.amount.to_decimal_string(),
            category: expense.category.name().to_string(),
            description: expense.description.clone(),
            date: expense.date.format("%Y-%m-%d").to_string(),
        }
    }

    /// Field-level validation, run before the form reaches storage
    pub fn validate(&self, today: NaiveDate) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if let Some(amount) = check_positive_amount(&mut errors, "amount", &self.amount) {
            if amount > MAX_EXPENSE_AMOUNT {
                errors.add("amount", "Amount cannot exceed $1,000,000");
            }
        }

        if self.description.trim().is_empty() {
            errors.add("description", "Description is required");
        } else if self.description.chars().count() > MAX_DESCRIPTION_LEN {
            errors.add("description", "Description must be at most 200 characters");
        }

        if self.date.trim().is_empty() {
            errors.add("date", "Date is required");
        } else {
            match parse_date("date", &self.date) {
                Ok(date) if date > today => errors.add("date", "Date cannot be in the future"),
                Ok(_) => {}
                Err(_) => errors.add("date", "Date must be in YYYY-MM-DD format"),
            }
        }

        if let Err(e) = self.category.parse::<ExpenseCategory>() {
            errors.add("category", e.to_string());
        }

        errors.into_result()
    }
}
