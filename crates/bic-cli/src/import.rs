//! CSV bulk import.
//!
//! Loads the tabular SWIFT-code export into a registry. Every row goes
//! through the same validated add path as the API, so a malformed row is
//! rejected with the same rules; rejected and duplicate rows are counted
//! and logged rather than aborting the load. The export carries no
//! headquarters column, so the flag is derived from the `XXX` suffix.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use bic_registry::{Registry, RegistryError};
use bic_types::RecordDraft;

/// One row of the export, named by its CSV headers.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "SWIFT CODE")]
    swift_code: String,
    #[serde(rename = "NAME")]
    bank_name: Option<String>,
    #[serde(rename = "ADDRESS")]
    address: Option<String>,
    #[serde(rename = "COUNTRY ISO2 CODE")]
    country_iso2: String,
    #[serde(rename = "COUNTRY NAME")]
    country_name: Option<String>,
}

impl CsvRow {
    fn into_draft(self) -> RecordDraft {
        // No flag column in the export: headquarters status follows the
        // branch-suffix convention.
        let is_headquarter = self.swift_code.to_uppercase().ends_with("XXX");
        RecordDraft {
            swift_code: self.swift_code,
            bank_name: self.bank_name,
            address: self.address,
            country_iso2: self.country_iso2,
            country_name: self.country_name,
            is_headquarter,
        }
    }
}

/// Outcome of a bulk load.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Rows accepted into the registry.
    pub imported: usize,
    /// Rows rejected by validation or as duplicates.
    pub skipped: usize,
}

/// Load a CSV export into `registry` through the standard add path.
pub fn import_csv(path: &Path, registry: &Registry) -> anyhow::Result<ImportReport> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open CSV file: {}", path.display()))?;

    let mut report = ImportReport::default();
    for (line, result) in reader.deserialize::<CsvRow>().enumerate() {
        let row = match result {
            Ok(row) => row,
            Err(err) => {
                tracing::warn!(line = line + 2, %err, "unreadable CSV row, skipping");
                report.skipped += 1;
                continue;
            }
        };
        let code = row.swift_code.clone();
        match registry.add(row.into_draft()) {
            Ok(_) => report.imported += 1,
            Err(err @ (RegistryError::InvalidFormat(_) | RegistryError::Conflict(_))) => {
                tracing::warn!(line = line + 2, code = %code, %err, "row rejected, skipping");
                report.skipped += 1;
            }
            // Backend failures are not row problems; stop the load.
            Err(err) => return Err(err).context("registry rejected the load"),
        }
    }
    Ok(report)
}
