//! HTTP server for the BIC registry.
//!
//! Exposes the registry's operation surface over REST under `/v1`:
//! lookup by SWIFT code (headquarters records include their branches),
//! lookup by country, create, and delete. Errors render as
//! `{"detail": "..."}` with 400/404/409 statuses per the error class.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError, ServerResult};
pub use router::build_router;
pub use server::RegistryServer;
