//! Structural branch resolution.
//!
//! The registry stores no parent/child link between a headquarters and its
//! branches. Membership is derived entirely from the identifier: every
//! non-headquarters record whose SWIFT code shares the target's 8-character
//! institution prefix is a branch of that headquarters. If two headquarters
//! records share a prefix, each resolves to the same branch set.

use bic_types::BankCodeRecord;

/// Compute the branch set for `target` from a candidate list.
///
/// A candidate is a branch of `target` when it shares the target's
/// institution prefix and is not itself flagged as a headquarters. The
/// function is total over any candidate list; callers normally pass the
/// store's prefix-query result, in which case the prefix filter is already
/// satisfied and only the headquarters exclusion applies.
///
/// The headquarters flag is taken as stored — a record with an `XXX`
/// suffix but a `false` flag counts as a branch.
pub fn branch_set(
    target: &BankCodeRecord,
    candidates: Vec<BankCodeRecord>,
) -> Vec<BankCodeRecord> {
    let prefix = target.swift_code.institution_prefix();
    candidates
        .into_iter()
        .filter(|r| r.swift_code.as_str().starts_with(prefix))
        .filter(|r| !r.headquarters)
        .collect()
}
