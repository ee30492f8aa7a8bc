//! Storage layer for Spendwise
//!
//! Each collection is a JSON array stored under its own key. The
//! [`Storage`] coordinator owns one [`Collection`] per entity kind, all
//! sharing a single [`KeyValueStore`].

pub mod backend;
pub mod budgets;
pub mod collection;
pub mod expenses;
pub mod file_io;
pub mod income;
pub mod savings;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use collection::{Collection, Record, StorageFailure, StorageOperation};

use std::rc::Rc;

use crate::config::paths::SpendwisePaths;
use crate::error::SpendwiseError;
use crate::models::{Budget, Expense, Income, SavingsGoal};

/// Main storage coordinator that provides access to all collections
pub struct Storage {
    pub expenses: Collection<Expense>,
    pub incomes: Collection<Income>,
    pub budgets: Collection<Budget>,
    pub savings: Collection<SavingsGoal>,
}

impl Storage {
    /// Open file-backed storage, creating the data directory if needed
    pub fn open(paths: &SpendwisePaths) -> Result<Self, SpendwiseError> {
        paths.ensure_directories()?;
        Ok(Self::with_store(Rc::new(FileStore::new(paths.clone()))))
    }

    /// Load every collection from the given store
    pub fn with_store(store: Rc<dyn KeyValueStore>) -> Self {
        Self {
            expenses: Collection::load(store.clone()),
            incomes: Collection::load(store.clone()),
            budgets: Collection::load(store.clone()),
            savings: Collection::load(store),
        }
    }

    /// Drain failures from every collection
    pub fn take_failures(&mut self) -> Vec<StorageFailure> {
        let mut failures = self.expenses.take_failures();
        failures.extend(self.incomes.take_failures());
        failures.extend(self.budgets.take_failures());
        failures.extend(self.savings.take_failures());
        failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetForm, ExpenseForm};
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendwisePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::open(&paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(storage.expenses.is_empty());
        assert!(storage.take_failures().is_empty());
    }

    #[test]
    fn test_collections_use_separate_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendwisePaths::with_base_dir(temp_dir.path().to_path_buf());

        {
            let mut storage = Storage::open(&paths).unwrap();
            storage
                .expenses
                .add(&ExpenseForm {
                    amount: "12".into(),
                    category: "Food".into(),
                    description: "Lunch".into(),
                    date: "2026-10-02".into(),
                })
                .unwrap();
            storage
                .budgets
                .add(&BudgetForm {
                    category: "Food".into(),
                    amount: "300".into(),
                })
                .unwrap();
        }

        assert!(paths.collection_file("expenses").exists());
        assert!(paths.collection_file("budgets").exists());
        assert!(!paths.collection_file("income").exists());

        let storage = Storage::open(&paths).unwrap();
        assert_eq!(storage.expenses.len(), 1);
        assert_eq!(storage.budgets.len(), 1);
        assert!(storage.incomes.is_empty());
    }

    #[test]
    fn test_failures_are_aggregated() {
        let store = Rc::new(MemoryStore::new());
        store.insert_raw("expenses", "nope");
        store.insert_raw("savings", "{}");

        let mut storage = Storage::with_store(store);
        let keys: Vec<_> = storage.take_failures().iter().map(|f| f.key).collect();

        assert_eq!(keys, vec!["expenses", "savings"]);
        assert!(storage.take_failures().is_empty());
    }
}
