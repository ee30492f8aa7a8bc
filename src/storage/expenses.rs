//! Expense collection

use chrono::{DateTime, Utc};

use super::collection::Record;
use crate::error::SpendwiseResult;
use crate::models::{Expense, ExpenseForm, ExpenseId};

impl Record for Expense {
    type Id = ExpenseId;
    type Form = ExpenseForm;

    const KEY: &'static str = "expenses";
    const ENTITY: &'static str = "expense";
    const NEWEST_FIRST: bool = true;

    fn id(&self) -> ExpenseId {
        self.id
    }

    fn matches_ref(&self, reference: &str) -> bool {
        self.id.matches_ref(reference)
    }

    fn from_form(form: &ExpenseForm, now: DateTime<Utc>) -> SpendwiseResult<Self> {
        Expense::from_form(form, now)
    }

    fn apply_form(&mut self, form: &ExpenseForm, now: DateTime<Utc>) -> SpendwiseResult<()> {
        Expense::apply_form(self, form, now)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::models::{ExpenseCategory, Money};
    use crate::storage::{Collection, MemoryStore};

    #[test]
    fn test_new_expenses_go_first() {
        let store = Rc::new(MemoryStore::new());
        let mut expenses: Collection<Expense> = Collection::load(store);

        for (amount, description) in [("5", "Coffee"), ("40", "Groceries")] {
            expenses
                .add(&ExpenseForm {
                    amount: amount.into(),
                    category: "grocery".into(),
                    description: description.into(),
                    date: "2026-10-01".into(),
                })
                .unwrap();
        }

        let descriptions: Vec<_> = expenses.all().iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, vec!["Groceries", "Coffee"]);
        assert_eq!(expenses.all()[0].category, ExpenseCategory::Grocery);
        assert_eq!(expenses.all()[0].amount, Money::from_dollars(40));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let store = Rc::new(MemoryStore::new());
        let mut expenses: Collection<Expense> = Collection::load(store);

        let err = expenses
            .add(&ExpenseForm {
                amount: "5".into(),
                category: "Travel".into(),
                description: "Train".into(),
                date: "2026-10-01".into(),
            })
            .unwrap_err();

        assert!(err.is_validation());
        assert!(expenses.is_empty());
    }
}
