//! Income collection

use chrono::{DateTime, Utc};

use super::collection::Record;
use crate::error::SpendwiseResult;
use crate::models::{Income, IncomeForm, IncomeId};

impl Record for Income {
    type Id = IncomeId;
    type Form = IncomeForm;

    const KEY: &'static str = "income";
    const ENTITY: &'static str = "income";
    const NEWEST_FIRST: bool = true;

    fn id(&self) -> IncomeId {
        self.id
    }

    fn matches_ref(&self, reference: &str) -> bool {
        self.id.matches_ref(reference)
    }

    fn from_form(form: &IncomeForm, now: DateTime<Utc>) -> SpendwiseResult<Self> {
        Income::from_form(form, now)
    }

    fn apply_form(&mut self, form: &IncomeForm, now: DateTime<Utc>) -> SpendwiseResult<()> {
        Income::apply_form(self, form, now)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::models::{IncomeCategory, Money};
    use crate::reports::total_income;
    use crate::storage::{Collection, MemoryStore};

    fn salary() -> IncomeForm {
        IncomeForm {
            amount: "3000".into(),
            category: "Salary".into(),
            description: "October pay".into(),
            date: "2026-10-01".into(),
            is_recurring: true,
        }
    }

    #[test]
    fn test_add_and_reload() {
        let store = Rc::new(MemoryStore::new());
        let mut incomes: Collection<Income> = Collection::load(store.clone());
        let income = incomes.add(&salary()).unwrap();

        assert!(store.raw("income").unwrap().contains("\"isRecurring\":true"));

        let reloaded: Collection<Income> = Collection::load(store);
        let loaded = reloaded.get(income.id).unwrap();
        assert_eq!(loaded.category, IncomeCategory::Salary);
        assert_eq!(loaded.amount, Money::from_dollars(3000));
        assert!(loaded.is_recurring);
    }

    #[test]
    fn test_update_flips_recurring() {
        let store = Rc::new(MemoryStore::new());
        let mut incomes: Collection<Income> = Collection::load(store);
        let income = incomes.add(&salary()).unwrap();

        let mut form = IncomeForm::from_income(&income);
        form.is_recurring = false;
        let updated = incomes.update(income.id, &form).unwrap().unwrap();

        assert!(!updated.is_recurring);
        assert_eq!(updated.created_at, income.created_at);
    }

    #[test]
    fn test_oversized_income_rejected_and_totals_never_overflow() {
        let mut form = salary();
        form.amount = "50000000000000000".into();

        let errors = form.validate().unwrap_err();
        assert!(errors.get("amount").is_some());

        let store = Rc::new(MemoryStore::new());
        let mut incomes: Collection<Income> = Collection::load(store.clone());
        assert!(incomes.add(&form).unwrap_err().is_validation());
        assert!(incomes.is_empty());

        let mut records = Vec::new();
        for _ in 0..2 {
            let mut income = incomes.add(&salary()).unwrap();
            income.amount = Money::from_cents(i64::MAX / 2 + 1);
            records.push(income);
        }
        assert_eq!(total_income(&records), Money::from_cents(i64::MAX));
    }
}
