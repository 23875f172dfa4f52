//! External response shapes.
//!
//! Three read shapes exist: the plain record, the headquarters record with
//! its resolved branch list, and the country group. All are assembled from
//! the flat record set; none add state of their own. Field names follow the
//! registry's public wire format (`swiftCode`, `countryISO2`, ...).

use serde::{Deserialize, Serialize};

use bic_types::{BankCodeRecord, CountryCode, SwiftCode};

/// Plain record shape: every stored field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordView {
    pub swift_code: SwiftCode,
    pub bank_name: Option<String>,
    pub address: Option<String>,
    #[serde(rename = "countryISO2")]
    pub country_iso2: CountryCode,
    pub country_name: Option<String>,
    pub is_headquarter: bool,
}

impl From<BankCodeRecord> for RecordView {
    fn from(record: BankCodeRecord) -> Self {
        Self {
            swift_code: record.swift_code,
            bank_name: record.bank_name,
            address: record.address,
            country_iso2: record.country_code,
            country_name: record.country_name,
            is_headquarter: record.headquarters,
        }
    }
}

/// Abbreviated shape used inside branch lists and country groups: a plain
/// record without the country name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchView {
    pub swift_code: SwiftCode,
    pub bank_name: Option<String>,
    pub address: Option<String>,
    #[serde(rename = "countryISO2")]
    pub country_iso2: CountryCode,
    pub is_headquarter: bool,
}

impl From<BankCodeRecord> for BranchView {
    fn from(record: BankCodeRecord) -> Self {
        Self {
            swift_code: record.swift_code,
            bank_name: record.bank_name,
            address: record.address,
            country_iso2: record.country_code,
            is_headquarter: record.headquarters,
        }
    }
}

/// Headquarters shape: the record's own fields plus its structural branch
/// set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadquartersView {
    #[serde(flatten)]
    pub record: RecordView,
    pub branches: Vec<BranchView>,
}

/// Country group shape: all records sharing a country code. The country
/// name is taken from the first member record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryView {
    #[serde(rename = "countryISO2")]
    pub country_iso2: CountryCode,
    pub country_name: Option<String>,
    pub swift_codes: Vec<BranchView>,
}

/// Lookup result: headquarters records carry their branches, everything
/// else is returned standalone. Serializes untagged, so the wire shape is
/// one of the two record shapes directly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Lookup {
    Headquarters(HeadquartersView),
    Record(RecordView),
}

/// Mutation acknowledgment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub message: String,
}

impl Acknowledgement {
    /// Acknowledgment for a successful create.
    pub fn added() -> Self {
        Self {
            message: "SWIFT code added successfully".into(),
        }
    }

    /// Acknowledgment for a successful delete, echoing the canonical code.
    pub fn deleted(code: &SwiftCode) -> Self {
        Self {
            message: format!("SWIFT code {code} deleted successfully"),
        }
    }
}
