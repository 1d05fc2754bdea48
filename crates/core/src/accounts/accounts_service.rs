use log::debug;
use rust_decimal::Decimal;

use super::accounts_model::{Account, NewAccount};
use super::accounts_traits::AccountServiceTrait;
use crate::errors::Result;
use crate::registry::AccountRegistry;

/// Service for managing accounts backed by an in-memory registry.
///
/// Lookups are keyed by account number. Methods hand out owned snapshots;
/// a snapshot does not track later mutations of the registered account.
pub struct AccountService {
    registry: AccountRegistry,
}

impl AccountService {
    /// Creates a new AccountService with an empty registry.
    pub fn new() -> Self {
        Self {
            registry: AccountRegistry::new(),
        }
    }

    /// Number of registered accounts.
    pub fn account_count(&self) -> usize {
        self.registry.len()
    }
}

impl Default for AccountService {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountServiceTrait for AccountService {
    /// Opens a new account after input validation and registers it.
    ///
    /// A duplicate account number fails after validation and leaves the
    /// registry unchanged.
    fn open_account(&mut self, new_account: NewAccount) -> Result<Account> {
        debug!(
            "Opening account {} for holder {}",
            new_account.account_number, new_account.account_holder
        );
        let account = Account::open(new_account)?;
        let registered = self.registry.register(account)?;
        Ok(registered.clone())
    }

    fn deposit(&mut self, account_number: &str, amount: Decimal) -> Result<Account> {
        debug!("Depositing {} into account {}", amount, account_number);
        let account = self.registry.get_mut(account_number)?;
        account.deposit(amount)?;
        Ok(account.clone())
    }

    fn withdraw(&mut self, account_number: &str, amount: Decimal) -> Result<Account> {
        debug!("Withdrawing {} from account {}", amount, account_number);
        let account = self.registry.get_mut(account_number)?;
        account.withdraw(amount)?;
        Ok(account.clone())
    }

    fn get_account(&self, account_number: &str) -> Result<Account> {
        Ok(self.registry.get(account_number)?.clone())
    }

    fn get_balance(&self, account_number: &str) -> Result<Decimal> {
        Ok(self.registry.get(account_number)?.balance())
    }

    fn list_accounts(&self) -> Result<Vec<Account>> {
        Ok(self.registry.accounts().cloned().collect())
    }
}
