use thiserror::Error;

/// Rejection reasons for malformed externally supplied fields.
///
/// Every variant maps to the `InvalidFormat` class at the API boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// SWIFT code is not exactly 11 characters.
    #[error("SWIFT code must be exactly 11 characters, got {actual}")]
    InvalidCodeLength { actual: usize },

    /// Country code is not exactly 2 characters.
    #[error("countryISO2 must be exactly 2 characters, got {actual}")]
    InvalidCountryLength { actual: usize },

    /// Country code contains non-alphabetic characters.
    #[error("countryISO2 must contain only alphabetic characters, got {value:?}")]
    NonAlphabeticCountry { value: String },

    /// Optional free-text field exceeds the 200-character cap.
    #[error("{field} must be at most {max} characters, got {actual}")]
    FieldTooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

/// Result alias for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;
