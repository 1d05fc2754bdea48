//! Registry error types.

use thiserror::Error;

/// Errors raised by the owning account registry.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// No account is registered under the given number.
    #[error("Account not found: {0}")]
    NotFound(String),

    /// An account is already registered under the given number.
    #[error("Account number already registered: {0}")]
    AlreadyExists(String),
}
