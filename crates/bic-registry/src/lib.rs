//! Core registry logic for the BIC registry.
//!
//! This crate is the heart of the service. It provides:
//! - [`Registry`] — the operation surface: fetch by code, fetch by country,
//!   add, and remove, over any [`RecordStore`] backend
//! - Branch resolution: the headquarters↔branch relationship is derived
//!   from the shared 8-character institution prefix, never stored
//! - The three response shapes: plain record, headquarters with branches,
//!   and country group
//! - The terminal error taxonomy: invalid format, conflict, not found
//!
//! Every operation normalizes its input before touching the store, so a
//! lookup with any mix of upper and lower case hits the same key.
//!
//! [`RecordStore`]: bic_store::RecordStore

pub mod error;
pub mod registry;
pub mod resolver;
pub mod views;

pub use error::{RegistryError, RegistryResult};
pub use registry::Registry;
pub use resolver::branch_set;
pub use views::{Acknowledgement, BranchView, CountryView, HeadquartersView, Lookup, RecordView};
