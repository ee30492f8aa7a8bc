//! Income model
//!
//! Money received. `is_recurring` is informational only; nothing generates
//! future entries from it.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::category::IncomeCategory;
use super::form::{check_positive_amount, parse_amount, parse_date, FieldErrors};
use super::ids::IncomeId;
use super::money::Money;
use crate::error::{SpendwiseError, SpendwiseResult};

/// A recorded income entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    pub id: IncomeId,
    pub amount: Money,
    pub category: IncomeCategory,
    pub description: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub is_recurring: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Income form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncomeForm {
    pub amount: String,
    pub category: String,
    pub description: String,
    pub date: String,
    pub is_recurring: bool,
}

impl Income {
    /// Build a new income entry from form input
    pub fn from_form(form: &IncomeForm, now: DateTime<Utc>) -> SpendwiseResult<Self> {
        let (amount, category, date) = parse_fields(form)?;
        Ok(Self {
            id: IncomeId::new(),
            amount,
            category,
            description: form.description.clone(),
            date,
            is_recurring: form.is_recurring,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace every mutable field from form input
    pub fn apply_form(&mut self, form: &IncomeForm, now: DateTime<Utc>) -> SpendwiseResult<()> {
        let (amount, category, date) = parse_fields(form)?;
        self.amount = amount;
        self.category = category;
        self.description = form.description.clone();
        self.date = date;
        self.is_recurring = form.is_recurring;
        self.updated_at = now;
        Ok(())
    }
}

fn parse_fields(form: &IncomeForm) -> SpendwiseResult<(Money, IncomeCategory, NaiveDate)> {
    let amount = parse_amount("amount", &form.amount)?;
    let category = form
        .category
        .parse()
        .map_err(|e| SpendwiseError::Validation(format!("category: {}", e)))?;
    let date = parse_date("date", &form.date)?;
    Ok((amount, category, date))
}

impl IncomeForm {
    /// Prefill a form from an existing entry (for editing)
    pub fn from_income(income: &Income) -> Self {
        Self {
            amount: income.amount.to_decimal_string(),
            category: income.category.name().to_string(),
            description: income.description.clone(),
            date: income.date.format("%Y-%m-%d").to_string(),
            is_recurring: income.is_recurring,
        }
    }

    /// Field-level validation
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        check_positive_amount(&mut errors, "amount", &self.amount);

        if self.description.trim().is_empty() {
            errors.add("description", "Description is required");
        }

        if self.date.trim().is_empty() {
            errors.add("date", "Date is required");
        } else if parse_date("date", &self.date).is_err() {
            errors.add("date", "Date must be in YYYY-MM-DD format");
        }

        if let Err(e) = self.category.parse::<IncomeCategory>() {
            errors.add("category", e.to_string());
        }

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> IncomeForm {
        IncomeForm {
            amount: "3200".into(),
            category: "Salary".into(),
            description: "October pay".into(),
            date: "2026-10-01".into(),
            is_recurring: true,
        }
    }

    #[test]
    fn test_from_form() {
        let income = Income::from_form(&form(), Utc::now()).unwrap();
        assert_eq!(income.amount, Money::from_dollars(3200));
        assert_eq!(income.category, IncomeCategory::Salary);
        assert!(income.is_recurring);
    }

    #[test]
    fn test_validate() {
        assert!(form().validate().is_ok());

        let bad = IncomeForm {
            amount: "-5".into(),
            category: "Lottery".into(),
            description: "".into(),
            date: "".into(),
            is_recurring: false,
        };
        let errors = bad.validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get("amount"), Some("Amount must be a positive number"));
    }

    #[test]
    fn test_missing_recurring_flag_defaults_false() {
        let income = Income::from_form(&form(), Utc::now()).unwrap();
        let mut json = serde_json::to_value(&income).unwrap();
        json.as_object_mut().unwrap().remove("isRecurring");

        let back: Income = serde_json::from_value(json).unwrap();
        assert!(!back.is_recurring);
    }

    #[test]
    fn test_apply_form() {
        let mut income = Income::from_form(&form(), Utc::now()).unwrap();
        let mut edit = IncomeForm::from_income(&income);
        edit.is_recurring = false;
        edit.category = "Gift".into();

        income.apply_form(&edit, Utc::now()).unwrap();
        assert!(!income.is_recurring);
        assert_eq!(income.category, IncomeCategory::Gift);
    }
}
