use bic_types::{BankCodeRecord, CountryCode, SwiftCode};

use crate::error::StoreResult;

/// Keyed repository of bank code records.
///
/// All implementations must satisfy these invariants:
/// - Keys are canonical SWIFT codes; the store performs no normalization.
/// - `put`'s duplicate check and insert are a single atomic step with
///   respect to concurrent mutations of the same key.
/// - Scans (`find_by_country`, `find_by_prefix`) return records in
///   insertion order.
/// - Reads may run concurrently with unrelated writes.
pub trait RecordStore: Send + Sync {
    /// Read a record by its canonical SWIFT code.
    ///
    /// Returns `Ok(None)` if no record exists under that key.
    fn get(&self, code: &SwiftCode) -> StoreResult<Option<BankCodeRecord>>;

    /// Insert a record keyed by its SWIFT code.
    ///
    /// Fails with [`StoreError::Duplicate`] if the key is already present;
    /// the store is unchanged in that case.
    ///
    /// [`StoreError::Duplicate`]: crate::error::StoreError::Duplicate
    fn put(&self, record: BankCodeRecord) -> StoreResult<()>;

    /// Delete a record by key. Returns `true` if a record existed and was
    /// removed, `false` if the key was absent.
    fn delete(&self, code: &SwiftCode) -> StoreResult<bool>;

    /// All records whose country code equals the given canonical code, in
    /// insertion order.
    fn find_by_country(&self, country: &CountryCode) -> StoreResult<Vec<BankCodeRecord>>;

    /// All records whose SWIFT code starts with `prefix` (the 8-character
    /// institution prefix), in insertion order.
    ///
    /// With `exclude_headquarters` set, records flagged as headquarters are
    /// filtered out — this is the branch-resolution query.
    fn find_by_prefix(
        &self,
        prefix: &str,
        exclude_headquarters: bool,
    ) -> StoreResult<Vec<BankCodeRecord>>;

    /// Number of records currently stored.
    fn len(&self) -> StoreResult<usize>;

    /// Returns `true` if the store holds no records.
    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}
