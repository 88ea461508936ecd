//! In-memory contact store keyed by name.

use crate::error::{StoreError, StoreResult};
use crate::models::Record;
use indexmap::IndexMap;
use tracing::debug;

/// All contacts, keyed by exact name, iterated in insertion order.
///
/// The store exclusively owns its records. Callers reach a record through
/// [`ContactStore::find`] or [`ContactStore::find_mut`] and mutate it in place.
#[derive(Debug, Clone, Default)]
pub struct ContactStore {
    records: IndexMap<String, Record>,
}

impl ContactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, replacing any record already stored there.
    ///
    /// A replaced record keeps its position in iteration order.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().to_string();
        if self.records.insert(name.clone(), record).is_some() {
            debug!(contact = %name, "Replaced existing record");
        } else {
            debug!(contact = %name, "Added record");
        }
    }

    /// Exact-match lookup.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Exact-match lookup for in-place mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Remove the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no record has that name.
    pub fn delete(&mut self, name: &str) -> StoreResult<Record> {
        let record = self
            .records
            .shift_remove(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        debug!(contact = %name, "Deleted record");
        Ok(record)
    }

    /// Every record in insertion order.
    pub fn list(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
