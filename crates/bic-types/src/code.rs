use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Length of a full SWIFT/BIC code.
pub const CODE_LEN: usize = 11;

/// Length of the institution prefix (bank + location code).
pub const PREFIX_LEN: usize = 8;

/// Branch suffix that conventionally marks a headquarters record.
pub const HEADQUARTERS_SUFFIX: &str = "XXX";

/// An 11-character SWIFT/BIC identifier in canonical (uppercase) form.
///
/// Parsing uppercases the input and rejects anything that is not exactly
/// 11 characters, so two codes differing only in case are the same key.
/// The first 8 characters name the institution; the last 3 name the branch.
/// Character content beyond length is not constrained, matching the
/// registry's observable validation contract.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SwiftCode(String);

impl SwiftCode {
    /// Parse and canonicalize a raw SWIFT code.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let canonical = raw.to_uppercase();
        let len = canonical.chars().count();
        if len != CODE_LEN {
            return Err(ValidationError::InvalidCodeLength { actual: len });
        }
        Ok(Self(canonical))
    }

    /// The canonical 11-character code.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 8-character institution prefix (bank + location code).
    ///
    /// Branch membership is structural: every record whose code starts with
    /// this prefix belongs to the same institution.
    pub fn institution_prefix(&self) -> &str {
        &self.0[..self.suffix_start()]
    }

    /// The 3-character branch suffix.
    pub fn branch_suffix(&self) -> &str {
        &self.0[self.suffix_start()..]
    }

    // Byte offset of the 9th character. Codes are counted in characters,
    // so the boundary is located rather than assumed to be byte 8.
    fn suffix_start(&self) -> usize {
        self.0
            .char_indices()
            .nth(PREFIX_LEN)
            .map(|(idx, _)| idx)
            .unwrap_or(self.0.len())
    }

    /// Whether the branch suffix is the conventional headquarters marker.
    ///
    /// Informational only: the stored headquarters flag is supplied by the
    /// caller and is never derived from or checked against the suffix.
    pub fn has_headquarters_suffix(&self) -> bool {
        self.branch_suffix() == HEADQUARTERS_SUFFIX
    }
}

impl FromStr for SwiftCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SwiftCode {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<SwiftCode> for String {
    fn from(code: SwiftCode) -> Self {
        code.0
    }
}

impl fmt::Debug for SwiftCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SwiftCode({})", self.0)
    }
}

impl fmt::Display for SwiftCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
