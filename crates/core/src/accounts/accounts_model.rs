//! Account domain models.

use chrono::{NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::accounts_constants::{is_valid_account_type, DEFAULT_ACCOUNT_TYPE};
use crate::errors::{Error, Result, ValidationError};

/// Domain model representing a bank account.
///
/// Fields are private: the balance changes only through [`Account::deposit`]
/// and [`Account::withdraw`], which keep it non-negative, and the identity
/// fields are fixed once the account is opened. Uniqueness of account
/// numbers is the registry's concern, not the entity's.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    account_number: String,
    account_holder: String,
    account_type: String,
    balance: Decimal,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

/// Input model for opening a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub account_number: String,
    pub account_holder: String,
    /// Account type; defaults to [`DEFAULT_ACCOUNT_TYPE`] when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    pub initial_balance: Decimal,
}

impl NewAccount {
    /// Validates the new account data.
    pub fn validate(&self) -> Result<()> {
        if self.account_number.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Account number cannot be empty".to_string(),
            )));
        }
        if self.account_holder.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Account holder cannot be empty".to_string(),
            )));
        }
        if let Some(account_type) = &self.account_type {
            if !is_valid_account_type(account_type) {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "Unknown account type: {}",
                    account_type
                ))));
            }
        }
        if self.initial_balance < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Initial balance must be non-negative".to_string(),
            )));
        }
        Ok(())
    }
}

impl Account {
    /// Opens an account from validated input.
    ///
    /// Fails with a validation error when the input violates
    /// [`NewAccount::validate`]; no account is produced in that case.
    pub fn open(new_account: NewAccount) -> Result<Self> {
        new_account.validate()?;
        let now = Utc::now().naive_utc();
        Ok(Account {
            account_number: new_account.account_number,
            account_holder: new_account.account_holder,
            account_type: new_account
                .account_type
                .unwrap_or_else(|| DEFAULT_ACCOUNT_TYPE.to_string()),
            balance: new_account.initial_balance,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn account_holder(&self) -> &str {
        &self.account_holder
    }

    pub fn account_type(&self) -> &str {
        &self.account_type
    }

    /// Current balance. Never negative.
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    /// Time of the last successful balance mutation.
    pub fn updated_at(&self) -> NaiveDateTime {
        self.updated_at
    }

    /// Credits `amount` to the balance.
    ///
    /// The amount must be strictly positive; on failure the account is
    /// unchanged.
    pub fn deposit(&mut self, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Deposit amount must be positive".to_string(),
            )));
        }
        self.balance += amount;
        self.updated_at = Utc::now().naive_utc();
        Ok(())
    }

    /// Debits `amount` from the balance.
    ///
    /// The amount must be strictly positive and must not exceed the current
    /// balance. The positivity guard runs first, so a non-positive amount is
    /// a validation failure even on an empty account. On failure the account
    /// is unchanged.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Withdrawal amount must be positive".to_string(),
            )));
        }
        if amount > self.balance {
            return Err(Error::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        self.updated_at = Utc::now().naive_utc();
        Ok(())
    }
}
