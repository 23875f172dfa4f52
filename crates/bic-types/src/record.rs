use serde::{Deserialize, Serialize};

use crate::code::SwiftCode;
use crate::country::CountryCode;
use crate::error::ValidationError;

/// Cap on free-text fields (bank name, address, country name).
pub const MAX_TEXT_LEN: usize = 200;

/// A validated, canonical registry entry. The sole persisted entity.
///
/// `swift_code` is the primary key. The headquarters flag is stored exactly
/// as submitted; the headquarters↔branch relationship itself is never
/// stored, it is derived from the shared institution prefix at query time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankCodeRecord {
    pub swift_code: SwiftCode,
    pub bank_name: Option<String>,
    pub address: Option<String>,
    pub country_code: CountryCode,
    pub country_name: Option<String>,
    pub headquarters: bool,
}

/// A raw external submission, exactly as it arrives on the wire.
///
/// Field types are deliberately loose strings so that every format rule
/// lives in [`RecordDraft::validate`] rather than in the deserializer —
/// with one exception: `isHeadquarter` is a strict `bool`, so serde itself
/// rejects numeric or string stand-ins before validation runs.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDraft {
    pub swift_code: String,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(rename = "countryISO2")]
    pub country_iso2: String,
    #[serde(default)]
    pub country_name: Option<String>,
    pub is_headquarter: bool,
}

impl RecordDraft {
    /// Validate and canonicalize the draft into a [`BankCodeRecord`].
    ///
    /// Rejects on the first violation. Country name is uppercased; bank
    /// name and address are preserved verbatim, including the empty string,
    /// which stays distinct from an absent field.
    pub fn validate(self) -> Result<BankCodeRecord, ValidationError> {
        let swift_code = SwiftCode::parse(&self.swift_code)?;
        let country_code = CountryCode::parse(&self.country_iso2)?;

        check_text_len("bankName", self.bank_name.as_deref())?;
        check_text_len("address", self.address.as_deref())?;
        check_text_len("countryName", self.country_name.as_deref())?;

        Ok(BankCodeRecord {
            swift_code,
            bank_name: self.bank_name,
            address: self.address,
            country_code,
            country_name: self.country_name.map(|n| n.to_uppercase()),
            headquarters: self.is_headquarter,
        })
    }
}

fn check_text_len(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    if let Some(v) = value {
        let len = v.chars().count();
        if len > MAX_TEXT_LEN {
            return Err(ValidationError::FieldTooLong {
                field,
                max: MAX_TEXT_LEN,
                actual: len,
            });
        }
    }
    Ok(())
}
