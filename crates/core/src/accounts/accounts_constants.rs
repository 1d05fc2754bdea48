/// Default account type for newly opened accounts
pub const DEFAULT_ACCOUNT_TYPE: &str = "SAVINGS";

/// Account type constants
pub mod account_types {
    pub const SAVINGS: &str = "SAVINGS";
    pub const CHECKING: &str = "CHECKING";
}

/// Returns true if the given account type is valid.
pub fn is_valid_account_type(account_type: &str) -> bool {
    matches!(
        account_type,
        account_types::SAVINGS | account_types::CHECKING
    )
}
