//! Account service traits.
//!
//! The trait defines the contract for account operations without tying a
//! caller to the registry-backed implementation, so a scenario harness can
//! bind to it or substitute its own double.

use rust_decimal::Decimal;

use super::accounts_model::{Account, NewAccount};
use crate::errors::Result;

/// Trait defining the contract for account operations.
///
/// Mutating operations take `&mut self`: the core is single-threaded and
/// defines no locking discipline. Callers sharing a service across threads
/// must add their own mutual exclusion around it.
pub trait AccountServiceTrait: Send + Sync {
    /// Opens a new account and registers it under its account number.
    fn open_account(&mut self, new_account: NewAccount) -> Result<Account>;

    /// Credits an amount to the account with the given number.
    ///
    /// Returns a snapshot of the updated account.
    fn deposit(&mut self, account_number: &str, amount: Decimal) -> Result<Account>;

    /// Debits an amount from the account with the given number.
    ///
    /// Returns a snapshot of the updated account.
    fn withdraw(&mut self, account_number: &str, amount: Decimal) -> Result<Account>;

    /// Retrieves a snapshot of the account with the given number.
    fn get_account(&self, account_number: &str) -> Result<Account>;

    /// Retrieves the current balance of the account with the given number.
    fn get_balance(&self, account_number: &str) -> Result<Decimal>;

    /// Lists snapshots of all registered accounts.
    fn list_accounts(&self) -> Result<Vec<Account>>;
}
