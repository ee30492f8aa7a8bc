//! Generic persisted collection
//!
//! A [`Collection`] holds one kind of record in memory and writes the whole
//! collection as a JSON array under its key after every mutation. Loading
//! never fails: a missing key is an empty collection, and a read or parse
//! error is logged, recorded as a [`StorageFailure`], and also treated as
//! empty. Write errors are recorded the same way and leave memory as is.

use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, warn};

use super::backend::KeyValueStore;
use crate::error::{SpendwiseError, SpendwiseResult};

/// An entity that lives in a [`Collection`]
pub trait Record: Clone + Serialize + DeserializeOwned {
    type Id: Copy + PartialEq + fmt::Display;
    type Form;

    /// Storage key the collection is written under
    const KEY: &'static str;
    /// Human name used in log lines
    const ENTITY: &'static str;
    /// New records go to the front instead of the back
    const NEWEST_FIRST: bool;

    fn id(&self) -> Self::Id;

    /// Whether a user-typed reference (full or short id) names this record
    fn matches_ref(&self, reference: &str) -> bool;

    fn from_form(form: &Self::Form, now: DateTime<Utc>) -> SpendwiseResult<Self>;

    fn apply_form(&mut self, form: &Self::Form, now: DateTime<Utc>) -> SpendwiseResult<()>;

    /// Existing record that an `add` should overwrite instead of inserting
    fn upsert_target(_records: &[Self], _form: &Self::Form) -> Option<usize> {
        None
    }

    /// Reject an update of the record at `index` before anything changes
    fn check_update(_records: &[Self], _index: usize, _form: &Self::Form) -> SpendwiseResult<()> {
        Ok(())
    }
}

/// Which storage call failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageOperation {
    Load,
    Save,
}

impl fmt::Display for StorageOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load => f.pad("load"),
            Self::Save => f.pad("save"),
        }
    }
}

/// A persistence error that was absorbed rather than returned
#[derive(Debug)]
pub struct StorageFailure {
    pub key: &'static str,
    pub operation: StorageOperation,
    pub error: SpendwiseError,
}

impl fmt::Display for StorageFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not {} '{}': {}", self.operation, self.key, self.error)
    }
}

/// In-memory records of one kind, mirrored to a key-value store
pub struct Collection<T: Record> {
    store: Rc<dyn KeyValueStore>,
    records: Vec<T>,
    failures: Vec<StorageFailure>,
}

impl<T: Record> Collection<T> {
    /// Load the collection from the store
    pub fn load(store: Rc<dyn KeyValueStore>) -> Self {
        let mut collection = Self {
            store,
            records: Vec::new(),
            failures: Vec::new(),
        };

        match collection.read() {
            Ok(records) => {
                debug!(key = T::KEY, count = records.len(), "Loaded {}", T::ENTITY);
                collection.records = records;
            }
            Err(e) => {
                warn!(key = T::KEY, error = %e, "Falling back to an empty {} collection", T::ENTITY);
                collection.failures.push(StorageFailure {
                    key: T::KEY,
                    operation: StorageOperation::Load,
                    error: e,
                });
            }
        }

        collection
    }

    fn read(&self) -> SpendwiseResult<Vec<T>> {
        match self.store.get(T::KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// The collection serialized exactly as it is persisted
    pub fn to_json(&self) -> SpendwiseResult<String> {
        Ok(serde_json::to_string(&self.records)?)
    }

    /// Write the whole collection under its key
    pub(super) fn persist(&mut self) {
        let result = self
            .to_json()
            .and_then(|json| self.store.set(T::KEY, &json));

        if let Err(e) = result {
            error!(key = T::KEY, error = %e, "Failed to persist {}", T::ENTITY);
            self.failures.push(StorageFailure {
                key: T::KEY,
                operation: StorageOperation::Save,
                error: e,
            });
        }
    }

    /// All records in collection order
    pub fn all(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Find a record by a user-typed reference
    ///
    /// Returns `None` when nothing matches or the reference is ambiguous.
    pub fn find_by_ref(&self, reference: &str) -> Option<&T> {
        let mut matches = self.records.iter().filter(|r| r.matches_ref(reference));
        let first = matches.next()?;
        if matches.next().is_some() {
            return None;
        }
        Some(first)
    }

    pub(super) fn position(&self, id: T::Id) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    pub(super) fn record_mut(&mut self, index: usize) -> &mut T {
        &mut self.records[index]
    }

    /// Create a record from form input and persist
    ///
    /// Nothing is stored if the form does not parse.
    pub fn add(&mut self, form: &T::Form) -> SpendwiseResult<T> {
        let now = Utc::now();

        let record = match T::upsert_target(&self.records, form) {
            Some(index) => {
                let existing = &mut self.records[index];
                existing.apply_form(form, now)?;
                existing.clone()
            }
            None => {
                let record = T::from_form(form, now)?;
                if T::NEWEST_FIRST {
                    self.records.insert(0, record.clone());
                } else {
                    self.records.push(record.clone());
                }
                record
            }
        };

        self.persist();
        Ok(record)
    }

    /// Replace a record's fields from form input and persist
    ///
    /// Returns `Ok(None)` without touching anything when `id` is unknown.
    pub fn update(&mut self, id: T::Id, form: &T::Form) -> SpendwiseResult<Option<T>> {
        let Some(index) = self.position(id) else {
            return Ok(None);
        };

        T::check_update(&self.records, index, form)?;

        let record = &mut self.records[index];
        record.apply_form(form, Utc::now())?;
        let updated = record.clone();

        self.persist();
        Ok(Some(updated))
    }

    /// Remove a record if present, then persist
    pub fn delete(&mut self, id: T::Id) -> Option<T> {
        let removed = self.position(id).map(|index| self.records.remove(index));
        self.persist();
        removed
    }

    /// Drain the failures recorded since the last call
    pub fn take_failures(&mut self) -> Vec<StorageFailure> {
        std::mem::take(&mut self.failures)
    }
}
