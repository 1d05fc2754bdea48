//! Passbook Core - Account domain entities, services, and traits.
//!
//! This crate contains the in-memory banking core: the [`accounts::Account`]
//! entity with its balance guards, the owning [`registry::AccountRegistry`]
//! collection, and the service layer a scenario harness binds to. It performs
//! no I/O and installs no logger; both are the caller's concern.

pub mod accounts;
pub mod errors;
pub mod registry;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
