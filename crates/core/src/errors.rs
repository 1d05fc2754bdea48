//! Core error types for the account domain.
//!
//! Every guard runs before any mutation, so a returned error always leaves
//! the entity and the registry exactly as they were.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::registry::RegistryError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the account core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A withdrawal exceeded the available balance.
    ///
    /// Kept apart from [`Error::Validation`] because it depends on entity
    /// state, not just the argument's shape; callers can branch on the two
    /// kinds to show different messages.
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}
