//! Savings goal collection

use chrono::{DateTime, Utc};

use super::collection::{Collection, Record};
use crate::error::SpendwiseResult;
use crate::models::{Money, SavingsGoal, SavingsGoalForm, SavingsGoalId};

impl Record for SavingsGoal {
    type Id = SavingsGoalId;
    type Form = SavingsGoalForm;

    const KEY: &'static str = "savings";
    const ENTITY: &'static str = "savings goal";
    const NEWEST_FIRST: bool = false;

    fn id(&self) -> SavingsGoalId {
        self.id
    }

    fn matches_ref(&self, reference: &str) -> bool {
        self.id.matches_ref(reference) || self.name.eq_ignore_ascii_case(reference.trim())
    }

    fn from_form(form: &SavingsGoalForm, now: DateTime<Utc>) -> SpendwiseResult<Self> {
        SavingsGoal::from_form(form, now)
    }

    fn apply_form(&mut self, form: &SavingsGoalForm, now: DateTime<Utc>) -> SpendwiseResult<()> {
        SavingsGoal::apply_form(self, form, now)
    }
}

impl Collection<SavingsGoal> {
    /// Add money to a goal and persist; unknown ids are ignored
    pub fn add_funds(&mut self, id: SavingsGoalId, amount: Money) -> Option<SavingsGoal> {
        let index = self.position(id)?;

        let goal = self.record_mut(index);
        goal.add_funds(amount, Utc::now());
        let funded = goal.clone();

        self.persist();
        Some(funded)
    }

    /// Sum of every goal's current balance
    pub fn total_saved(&self) -> Money {
        self.all().iter().map(|g| g.current_amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::storage::MemoryStore;

    fn goal_form(name: &str, target: &str, current: &str) -> SavingsGoalForm {
        SavingsGoalForm {
            name: name.into(),
            target_amount: target.into(),
            current_amount: current.into(),
            deadline: None,
        }
    }

    #[test]
    fn test_add_funds_completes_goal() {
        let store = Rc::new(MemoryStore::new());
        let mut goals: Collection<SavingsGoal> = Collection::load(store.clone());
        let goal = goals.add(&goal_form("Laptop", "1200", "1000")).unwrap();

        let funded = goals.add_funds(goal.id, Money::from_dollars(500)).unwrap();

        assert_eq!(funded.current_amount, Money::from_dollars(1500));
        assert!(funded.is_complete());
        assert!(store.raw("savings").unwrap().contains("\"currentAmount\":150000"));
    }

    #[test]
    fn test_add_funds_unknown_goal_is_noop() {
        let mut goals: Collection<SavingsGoal> = Collection::load(Rc::new(MemoryStore::new()));
        goals.add(&goal_form("Laptop", "1200", "")).unwrap();

        assert!(goals
            .add_funds(SavingsGoalId::new(), Money::from_dollars(10))
            .is_none());
        assert_eq!(goals.total_saved(), Money::zero());
    }

    #[test]
    fn test_goals_are_appended() {
        let mut goals: Collection<SavingsGoal> = Collection::load(Rc::new(MemoryStore::new()));
        goals.add(&goal_form("Laptop", "1200", "100")).unwrap();
        goals.add(&goal_form("Trip", "3000", "250.50")).unwrap();

        assert_eq!(goals.all()[0].name, "Laptop");
        assert_eq!(goals.find_by_ref("trip").map(|g| g.name.as_str()), Some("Trip"));
        assert_eq!(goals.total_saved(), Money::from_cents(35050));
    }
}
