use std::collections::HashMap;

use super::registry_errors::RegistryError;
use crate::accounts::Account;
use crate::errors::Result;

/// Owning collection of accounts, keyed by account number.
///
/// There is no removal operation: account closing is not part of this core.
#[derive(Debug, Default)]
pub struct AccountRegistry {
    accounts: HashMap<String, Account>,
}

impl AccountRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an account under its account number.
    ///
    /// Fails with [`RegistryError::AlreadyExists`] when the number is
    /// already taken; the registry is unchanged in that case.
    pub fn register(&mut self, account: Account) -> Result<&Account> {
        let number = account.account_number().to_string();
        if self.accounts.contains_key(&number) {
            return Err(RegistryError::AlreadyExists(number).into());
        }
        Ok(self.accounts.entry(number).or_insert(account))
    }

    /// Looks up an account by number.
    pub fn get(&self, account_number: &str) -> Result<&Account> {
        self.accounts
            .get(account_number)
            .ok_or_else(|| RegistryError::NotFound(account_number.to_string()).into())
    }

    /// Looks up an account by number for mutation.
    pub fn get_mut(&mut self, account_number: &str) -> Result<&mut Account> {
        self.accounts
            .get_mut(account_number)
            .ok_or_else(|| RegistryError::NotFound(account_number.to_string()).into())
    }

    /// Returns true if an account is registered under the given number.
    pub fn contains(&self, account_number: &str) -> bool {
        self.accounts.contains_key(account_number)
    }

    /// Iterates over all registered accounts in unspecified order.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
