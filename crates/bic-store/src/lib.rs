//! Keyed record storage for the BIC registry.
//!
//! This crate implements the registry's single source of truth: a flat
//! collection of [`BankCodeRecord`]s keyed by their canonical SWIFT code.
//! There is no other persisted structure — the headquarters↔branch
//! relationship is computed from the key's institution prefix at query
//! time, never stored.
//!
//! # Storage Backends
//!
//! All backends implement the [`RecordStore`] trait:
//!
//! - [`InMemoryRecordStore`] — `HashMap`-based store for tests, embedding,
//!   and the default server backend
//!
//! # Design Rules
//!
//! 1. Keys are canonical: callers normalize codes before touching the store,
//!    so case differences never cause false misses.
//! 2. `put` is check-then-insert under a single write lock — the duplicate
//!    check cannot race with a concurrent insert of the same key.
//! 3. Concurrent reads are safe and may overlap unrelated writes.
//! 4. Scan results preserve insertion order, so query output is
//!    deterministic.
//! 5. The store never interprets record contents beyond its indexed fields.
//!
//! [`BankCodeRecord`]: bic_types::BankCodeRecord

pub mod error;
pub mod memory;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryRecordStore;
pub use traits::RecordStore;
