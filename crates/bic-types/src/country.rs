use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Length of an ISO 3166-1 alpha-2 country code.
pub const COUNTRY_LEN: usize = 2;

/// A 2-letter ISO 3166-1 alpha-2 country code in canonical (uppercase) form.
///
/// Parsing uppercases the input and rejects anything that is not exactly
/// two alphabetic characters.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Parse and canonicalize a raw country code.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let len = raw.chars().count();
        if len != COUNTRY_LEN {
            return Err(ValidationError::InvalidCountryLength { actual: len });
        }
        if !raw.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::NonAlphabeticCountry {
                value: raw.to_string(),
            });
        }
        Ok(Self(raw.to_ascii_uppercase()))
    }

    /// The canonical 2-letter code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CountryCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

impl fmt::Debug for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CountryCode({})", self.0)
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
