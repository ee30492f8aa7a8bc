//! Budget collection
//!
//! Budgets are keyed by category: adding a budget for a category that
//! already has one overwrites that budget in place.

use chrono::{DateTime, Utc};

use super::collection::{Collection, Record};
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{Budget, BudgetForm, BudgetId, ExpenseCategory};

impl Record for Budget {
    type Id = BudgetId;
    type Form = BudgetForm;

    const KEY: &'static str = "budgets";
    const ENTITY: &'static str = "budget";
    const NEWEST_FIRST: bool = false;

    fn id(&self) -> BudgetId {
        self.id
    }

    fn matches_ref(&self, reference: &str) -> bool {
        self.id.matches_ref(reference)
            || reference
                .parse::<ExpenseCategory>()
                .is_ok_and(|category| category == self.category)
    }

    fn from_form(form: &BudgetForm, now: DateTime<Utc>) -> SpendwiseResult<Self> {
        Budget::from_form(form, now)
    }

    fn apply_form(&mut self, form: &BudgetForm, now: DateTime<Utc>) -> SpendwiseResult<()> {
        Budget::apply_form(self, form, now)
    }

    fn upsert_target(records: &[Self], form: &BudgetForm) -> Option<usize> {
        let category: ExpenseCategory = form.category.parse().ok()?;
        records.iter().position(|b| b.category == category)
    }

    fn check_update(records: &[Self], index: usize, form: &BudgetForm) -> SpendwiseResult<()> {
        let Ok(category) = form.category.parse::<ExpenseCategory>() else {
            return Ok(());
        };

        let taken = records
            .iter()
            .enumerate()
            .any(|(i, b)| i != index && b.category == category);

        if taken {
            return Err(SpendwiseError::Duplicate {
                entity_type: "Budget",
                identifier: category.to_string(),
            });
        }
        Ok(())
    }
}

impl Collection<Budget> {
    pub fn get_by_category(&self, category: ExpenseCategory) -> Option<&Budget> {
        self.all().iter().find(|b| b.category == category)
    }

    /// Categories that already have a budget, excluding `except`
    pub fn taken_categories(&self, except: Option<BudgetId>) -> Vec<ExpenseCategory> {
        self.all()
            .iter()
            .filter(|b| Some(b.id) != except)
            .map(|b| b.category)
            .collect()
    }
}
