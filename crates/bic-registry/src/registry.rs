use std::sync::Arc;

use bic_store::RecordStore;
use bic_types::{CountryCode, RecordDraft, SwiftCode};

use crate::error::{RegistryError, RegistryResult};
use crate::resolver::branch_set;
use crate::views::{Acknowledgement, BranchView, CountryView, HeadquartersView, Lookup, RecordView};

/// The registry's operation surface.
///
/// Wraps a [`RecordStore`] handle and assembles the external response
/// shapes. Each operation is a single atomic step against the store; the
/// store handle is injected so tests can substitute a fresh in-memory
/// instance per run.
#[derive(Clone)]
pub struct Registry {
    store: Arc<dyn RecordStore>,
}

impl Registry {
    /// Create a registry over the given store backend.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// The underlying store handle.
    pub fn store(&self) -> &Arc<dyn RecordStore> {
        &self.store
    }

    /// Fetch a record by SWIFT code.
    ///
    /// Headquarters records are returned with their structural branch set;
    /// anything else is returned standalone. The raw code is canonicalized
    /// first, so lookups are case-insensitive.
    pub fn fetch(&self, raw_code: &str) -> RegistryResult<Lookup> {
        let code = SwiftCode::parse(raw_code)?;
        let record = self
            .store
            .get(&code)?
            .ok_or(RegistryError::CodeNotFound(code))?;

        if !record.headquarters {
            return Ok(Lookup::Record(RecordView::from(record)));
        }

        let candidates = self
            .store
            .find_by_prefix(record.swift_code.institution_prefix(), true)?;
        let branches = branch_set(&record, candidates)
            .into_iter()
            .map(BranchView::from)
            .collect();
        Ok(Lookup::Headquarters(HeadquartersView {
            record: RecordView::from(record),
            branches,
        }))
    }

    /// Fetch every record belonging to a country.
    ///
    /// The country name on the group is taken from the first member record
    /// in insertion order. An unused country code is reported as absence.
    pub fn fetch_country(&self, raw_country: &str) -> RegistryResult<CountryView> {
        let country = CountryCode::parse(raw_country)?;
        let records = self.store.find_by_country(&country)?;
        let first = records
            .first()
            .ok_or_else(|| RegistryError::CountryNotFound(country.clone()))?;

        let country_name = first.country_name.clone();
        Ok(CountryView {
            country_iso2: country,
            country_name,
            swift_codes: records.into_iter().map(BranchView::from).collect(),
        })
    }

    /// Validate and persist a new record.
    ///
    /// Fails with [`RegistryError::InvalidFormat`] before any store
    /// interaction, or [`RegistryError::Conflict`] if the code is taken.
    pub fn add(&self, draft: RecordDraft) -> RegistryResult<Acknowledgement> {
        let record = draft.validate()?;
        let code = record.swift_code.clone();
        self.store.put(record)?;
        tracing::debug!(code = %code, "record added");
        Ok(Acknowledgement::added())
    }

    /// Remove a record by SWIFT code, echoing the canonical code back.
    pub fn remove(&self, raw_code: &str) -> RegistryResult<Acknowledgement> {
        let code = SwiftCode::parse(raw_code)?;
        if !self.store.delete(&code)? {
            return Err(RegistryError::CodeNotFound(code));
        }
        tracing::debug!(code = %code, "record deleted");
        Ok(Acknowledgement::deleted(&code))
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bic_store::InMemoryRecordStore;

    fn registry() -> Registry {
        Registry::new(Arc::new(InMemoryRecordStore::new()))
    }

    fn draft(code: &str, country: &str, headquarters: bool) -> RecordDraft {
        RecordDraft {
            swift_code: code.into(),
            bank_name: Some(format!("Bank {code}")),
            address: Some("1 Main St".into()),
            country_iso2: country.into(),
            country_name: Some("Testland".into()),
            is_headquarter: headquarters,
        }
    }

    // -----------------------------------------------------------------------
    // Round-trip and casing
    // -----------------------------------------------------------------------

    #[test]
    fn add_then_fetch_round_trips() {
        let reg = registry();
        reg.add(draft("TESTCHPW001", "ch", false)).unwrap();

        let Lookup::Record(view) = reg.fetch("testchpw001").unwrap() else {
            panic!("non-headquarters lookup must be standalone");
        };
        assert_eq!(view.swift_code.as_str(), "TESTCHPW001");
        assert_eq!(view.country_iso2.as_str(), "CH");
        assert_eq!(view.country_name.as_deref(), Some("TESTLAND"));
        assert_eq!(view.bank_name.as_deref(), Some("Bank TESTCHPW001"));
        assert!(!view.is_headquarter);
    }

    #[test]
    fn fetch_is_case_insensitive() {
        let reg = registry();
        reg.add(draft("TESTCHPW001", "CH", false)).unwrap();

        for raw in ["TESTCHPW001", "testchpw001", "TestChPw001"] {
            assert!(reg.fetch(raw).is_ok(), "lookup failed for {raw}");
        }
    }

    #[test]
    fn fetch_missing_code() {
        let reg = registry();
        let err = reg.fetch("NOSUCHCODEX").unwrap_err();
        assert!(matches!(err, RegistryError::CodeNotFound(_)));
    }

    #[test]
    fn fetch_invalid_code_never_reaches_store() {
        let reg = registry();
        let err = reg.fetch("SHORT").unwrap_err();
        assert!(matches!(err, RegistryError::InvalidFormat(_)));
    }

    // -----------------------------------------------------------------------
    // Branch aggregation
    // -----------------------------------------------------------------------

    #[test]
    fn headquarters_fetch_includes_branches() {
        let reg = registry();
        reg.add(draft("BANKTESTXXX", "PL", true)).unwrap();
        reg.add(draft("BANKTEST001", "PL", false)).unwrap();

        let Lookup::Headquarters(view) = reg.fetch("BANKTESTXXX").unwrap() else {
            panic!("headquarters lookup must carry branches");
        };
        assert_eq!(view.branches.len(), 1);
        assert_eq!(view.branches[0].swift_code.as_str(), "BANKTEST001");
    }

    #[test]
    fn branch_aggregation_is_exact() {
        let reg = registry();
        reg.add(draft("BANKTESTXXX", "PL", true)).unwrap();
        reg.add(draft("BANKTEST001", "PL", false)).unwrap();
        reg.add(draft("BANKTEST002", "PL", false)).unwrap();
        reg.add(draft("BANKTEST003", "PL", false)).unwrap();
        // Same country, different institution: not a branch.
        reg.add(draft("OTHERBNK001", "PL", false)).unwrap();

        let Lookup::Headquarters(view) = reg.fetch("BANKTESTXXX").unwrap() else {
            panic!("expected headquarters shape");
        };
        let codes: Vec<&str> = view
            .branches
            .iter()
            .map(|b| b.swift_code.as_str())
            .collect();
        assert_eq!(codes, ["BANKTEST001", "BANKTEST002", "BANKTEST003"]);
    }

    #[test]
    fn headquarters_with_no_branches() {
        let reg = registry();
        reg.add(draft("LONEBANKXXX", "PL", true)).unwrap();

        let Lookup::Headquarters(view) = reg.fetch("LONEBANKXXX").unwrap() else {
            panic!("expected headquarters shape");
        };
        assert!(view.branches.is_empty());
    }

    #[test]
    fn branch_lookup_is_standalone() {
        let reg = registry();
        reg.add(draft("BANKTESTXXX", "PL", true)).unwrap();
        reg.add(draft("BANKTEST001", "PL", false)).unwrap();

        assert!(matches!(
            reg.fetch("BANKTEST001").unwrap(),
            Lookup::Record(_)
        ));
    }

    #[test]
    fn trusted_flag_controls_shape_not_suffix() {
        let reg = registry();
        // XXX suffix but submitted as a branch: returned standalone.
        reg.add(draft("BANKTESTXXX", "PL", false)).unwrap();
        assert!(matches!(
            reg.fetch("BANKTESTXXX").unwrap(),
            Lookup::Record(_)
        ));
    }

    #[test]
    fn duplicate_prefix_headquarters_share_branches() {
        let reg = registry();
        reg.add(draft("BANKTESTXXX", "PL", true)).unwrap();
        reg.add(draft("BANKTESTAAA", "PL", true)).unwrap();
        reg.add(draft("BANKTEST001", "PL", false)).unwrap();

        for hq in ["BANKTESTXXX", "BANKTESTAAA"] {
            let Lookup::Headquarters(view) = reg.fetch(hq).unwrap() else {
                panic!("expected headquarters shape for {hq}");
            };
            assert_eq!(view.branches.len(), 1);
            assert_eq!(view.branches[0].swift_code.as_str(), "BANKTEST001");
        }
    }

    // -----------------------------------------------------------------------
    // Country grouping
    // -----------------------------------------------------------------------

    #[test]
    fn country_fetch_groups_all_members() {
        let reg = registry();
        reg.add(draft("AAAAPLP1XXX", "PL", true)).unwrap();
        reg.add(draft("BBBBDEF1XXX", "DE", true)).unwrap();
        reg.add(draft("AAAAPLP1001", "pl", false)).unwrap();

        let view = reg.fetch_country("pl").unwrap();
        assert_eq!(view.country_iso2.as_str(), "PL");
        assert_eq!(view.country_name.as_deref(), Some("TESTLAND"));
        let codes: Vec<&str> = view
            .swift_codes
            .iter()
            .map(|r| r.swift_code.as_str())
            .collect();
        assert_eq!(codes, ["AAAAPLP1XXX", "AAAAPLP1001"]);
    }

    #[test]
    fn country_name_comes_from_first_member() {
        let reg = registry();
        let mut first = draft("AAAAPLP1XXX", "PL", true);
        first.country_name = Some("Poland".into());
        let mut second = draft("BBBBPLP1XXX", "PL", true);
        second.country_name = Some("Polska".into());
        reg.add(first).unwrap();
        reg.add(second).unwrap();

        let view = reg.fetch_country("PL").unwrap();
        assert_eq!(view.country_name.as_deref(), Some("POLAND"));
    }

    #[test]
    fn unused_country_is_absent() {
        let reg = registry();
        reg.add(draft("AAAACHZ1XXX", "CH", true)).unwrap();
        let err = reg.fetch_country("PL").unwrap_err();
        assert!(matches!(err, RegistryError::CountryNotFound(_)));
    }

    #[test]
    fn invalid_country_rejected_before_lookup() {
        let reg = registry();
        assert!(matches!(
            reg.fetch_country("P1").unwrap_err(),
            RegistryError::InvalidFormat(_)
        ));
        assert!(matches!(
            reg.fetch_country("POL").unwrap_err(),
            RegistryError::InvalidFormat(_)
        ));
    }

    // -----------------------------------------------------------------------
    // Create / delete
    // -----------------------------------------------------------------------

    #[test]
    fn duplicate_add_conflicts_regardless_of_fields() {
        let reg = registry();
        reg.add(draft("TESTCHPW001", "CH", false)).unwrap();

        let mut other = draft("testchpw001", "DE", true);
        other.bank_name = Some("Different Bank".into());
        let err = reg.add(other).unwrap_err();
        assert!(matches!(err, RegistryError::Conflict(_)));
    }

    #[test]
    fn invalid_add_makes_no_change() {
        let reg = registry();
        let err = reg.add(draft("TOOSHORT", "CH", false)).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidFormat(_)));
        assert!(reg.store().is_empty().unwrap());
    }

    #[test]
    fn delete_is_final() {
        let reg = registry();
        reg.add(draft("TODEL123XXX", "PL", true)).unwrap();

        let ack = reg.remove("todel123xxx").unwrap();
        assert_eq!(ack.message, "SWIFT code TODEL123XXX deleted successfully");

        assert!(matches!(
            reg.remove("TODEL123XXX").unwrap_err(),
            RegistryError::CodeNotFound(_)
        ));
        assert!(matches!(
            reg.fetch("TODEL123XXX").unwrap_err(),
            RegistryError::CodeNotFound(_)
        ));
    }

    #[test]
    fn deleted_branch_leaves_aggregation() {
        let reg = registry();
        reg.add(draft("BANKTESTXXX", "PL", true)).unwrap();
        reg.add(draft("BANKTEST001", "PL", false)).unwrap();
        reg.remove("BANKTEST001").unwrap();

        let Lookup::Headquarters(view) = reg.fetch("BANKTESTXXX").unwrap() else {
            panic!("expected headquarters shape");
        };
        assert!(view.branches.is_empty());
    }
}
