//! Foundation types for the BIC registry.
//!
//! This crate provides the validated domain types used throughout the
//! registry. Every other `bic-*` crate depends on `bic-types`.
//!
//! # Key Types
//!
//! - [`SwiftCode`] — 11-character SWIFT/BIC identifier, canonicalized to
//!   uppercase; first 8 characters are the institution prefix, last 3 the
//!   branch suffix
//! - [`CountryCode`] — 2-letter ISO 3166-1 alpha-2 country code, uppercase
//! - [`BankCodeRecord`] — the persisted registry entity
//! - [`RecordDraft`] — raw external submission, validated into a record
//! - [`ValidationError`] — rejection reasons for malformed input
//!
//! # Normalization Rules
//!
//! All externally supplied identifiers pass through these types before any
//! store interaction, so case differences never cause false misses:
//!
//! 1. SWIFT codes and country codes are uppercased on parse.
//! 2. Country names are uppercased; bank names and addresses are preserved
//!    verbatim (an empty string is distinct from an absent field).
//! 3. Free-text fields are capped at 200 characters.
//! 4. The headquarters flag is a strict boolean; it is trusted as given and
//!    never derived from the `XXX` branch suffix.

pub mod code;
pub mod country;
pub mod error;
pub mod record;

pub use code::SwiftCode;
pub use country::CountryCode;
pub use error::ValidationError;
pub use record::{BankCodeRecord, RecordDraft};
