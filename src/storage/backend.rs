//! Key-value storage backends
//!
//! Collections persist through a small key-value contract: read the string
//! stored under a key, or replace it. [`FileStore`] keeps one JSON file per
//! key on disk; [`MemoryStore`] keeps everything in process and can be told
//! to fail, which is how the failure paths are tested.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::PathBuf;

use tracing::debug;

use super::file_io::{read_if_exists, write_atomic};
use crate::config::paths::SpendwisePaths;
use crate::error::{SpendwiseError, SpendwiseResult};

/// Durable string storage addressed by key
pub trait KeyValueStore {
    /// The value stored under `key`, or `None` if nothing was ever written
    fn get(&self, key: &str) -> SpendwiseResult<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> SpendwiseResult<()>;
}

/// Stores each key as `<data_dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    paths: SpendwisePaths,
}

impl FileStore {
    pub fn new(paths: SpendwisePaths) -> Self {
        Self { paths }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.paths.collection_file(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> SpendwiseResult<Option<String>> {
        read_if_exists(self.path_for(key))
    }

    fn set(&self, key: &str, value: &str) -> SpendwiseResult<()> {
        let path = self.path_for(key);
        write_atomic(&path, value.as_bytes())?;
        debug!(key, path = %path.display(), bytes = value.len(), "Wrote collection");
        Ok(())
    }
}

/// In-process store
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `get` fail
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    /// Make every subsequent `set` fail
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Store a raw value directly, bypassing any collection
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    /// The raw value under `key`
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> SpendwiseResult<Option<String>> {
        if self.fail_reads.get() {
            return Err(SpendwiseError::Storage(format!("Read of '{}' refused", key)));
        }
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> SpendwiseResult<()> {
        if self.fail_writes.get() {
            return Err(SpendwiseError::Storage(format!("Write of '{}' refused", key)));
        }
        self.insert_raw(key, value);
        Ok(())
    }
}
