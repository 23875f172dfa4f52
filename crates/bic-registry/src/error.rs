use thiserror::Error;

use bic_store::StoreError;
use bic_types::{CountryCode, SwiftCode, ValidationError};

/// Terminal registry errors, reported synchronously to the caller.
///
/// All variants are caller errors or legitimate absence; none are retried.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No record exists under the given SWIFT code.
    #[error("SWIFT code not found: {0}")]
    CodeNotFound(SwiftCode),

    /// No records exist for the given country code.
    #[error("no SWIFT codes for country: {0}")]
    CountryNotFound(CountryCode),

    /// A record with this SWIFT code already exists.
    #[error("SWIFT code already exists: {0}")]
    Conflict(SwiftCode),

    /// Malformed input rejected before any store interaction.
    #[error("invalid format: {0}")]
    InvalidFormat(#[from] ValidationError),

    /// Backend failure unrelated to the request's validity.
    #[error("store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for RegistryError {
    fn from(err: StoreError) -> Self {
        match err {
            // A duplicate key is the registry's create-conflict, not a
            // backend fault.
            StoreError::Duplicate(code) => Self::Conflict(code),
            other => Self::Store(other),
        }
    }
}

/// Result alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
