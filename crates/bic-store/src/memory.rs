use std::collections::HashMap;
use std::sync::RwLock;

use bic_types::{BankCodeRecord, CountryCode, SwiftCode};

use crate::error::{StoreError, StoreResult};
use crate::traits::RecordStore;

// Key map plus an insertion-order list so scans are deterministic.
#[derive(Default)]
struct Inner {
    records: HashMap<SwiftCode, BankCodeRecord>,
    order: Vec<SwiftCode>,
}

/// In-memory, HashMap-based record store.
///
/// The default backend for tests, embedding, and the server. All records
/// are held behind a single `RwLock`, which makes `put`'s check-then-insert
/// atomic and lets reads proceed concurrently. Records are cloned on read.
pub struct InMemoryRecordStore {
    inner: RwLock<Inner>,
}

impl InMemoryRecordStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Remove all records from the store.
    pub fn clear(&self) {
        let mut inner = self.inner.write().expect("lock poisoned");
        inner.records.clear();
        inner.order.clear();
    }

    /// All stored SWIFT codes in insertion order.
    pub fn all_codes(&self) -> Vec<SwiftCode> {
        self.inner.read().expect("lock poisoned").order.clone()
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn get(&self, code: &SwiftCode) -> StoreResult<Option<BankCodeRecord>> {
        let inner = self.inner.read().expect("lock poisoned");
        Ok(inner.records.get(code).cloned())
    }

    fn put(&self, record: BankCodeRecord) -> StoreResult<()> {
        let mut inner = self.inner.write().expect("lock poisoned");
        if inner.records.contains_key(&record.swift_code) {
            return Err(StoreError::Duplicate(record.swift_code));
        }
        inner.order.push(record.swift_code.clone());
        inner.records.insert(record.swift_code.clone(), record);
        Ok(())
    }

    fn delete(&self, code: &SwiftCode) -> StoreResult<bool> {
        let mut inner = self.inner.write().expect("lock poisoned");
        if inner.records.remove(code).is_none() {
            return Ok(false);
        }
        inner.order.retain(|c| c != code);
        Ok(true)
    }

    fn find_by_country(&self, country: &CountryCode) -> StoreResult<Vec<BankCodeRecord>> {
        let inner = self.inner.read().expect("lock poisoned");
        Ok(inner
            .order
            .iter()
            .filter_map(|code| inner.records.get(code))
            .filter(|r| &r.country_code == country)
            .cloned()
            .collect())
    }

    fn find_by_prefix(
        &self,
        prefix: &str,
        exclude_headquarters: bool,
    ) -> StoreResult<Vec<BankCodeRecord>> {
        let inner = self.inner.read().expect("lock poisoned");
        Ok(inner
            .order
            .iter()
            .filter_map(|code| inner.records.get(code))
            .filter(|r| r.swift_code.as_str().starts_with(prefix))
            .filter(|r| !(exclude_headquarters && r.headquarters))
            .cloned()
            .collect())
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.inner.read().expect("lock poisoned").records.len())
    }
}

impl std::fmt::Debug for InMemoryRecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.inner.read().expect("lock poisoned").records.len();
        f.debug_struct("InMemoryRecordStore")
            .field("record_count", &count)
            .finish()
    }
}
