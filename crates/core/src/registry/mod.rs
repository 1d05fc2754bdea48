//! Account registry - the owning collection of accounts.
//!
//! Accounts are keyed by account number and numbers are unique within a
//! registry. Uniqueness lives here, never in the `Account` entity itself.

mod account_registry;
mod registry_errors;


// Re-export the public interface
pub use account_registry::AccountRegistry;
pub use registry_errors::RegistryError;
