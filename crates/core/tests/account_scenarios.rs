//! End-to-end scenarios driving the service layer the way a teller
//! workflow would: open an account, move money, check the result.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use passbook_core::accounts::{AccountService, AccountServiceTrait, NewAccount};
use passbook_core::registry::RegistryError;
use passbook_core::Error;

fn new_account(number: &str, holder: &str, balance: Decimal) -> NewAccount {
    NewAccount {
        account_number: number.to_string(),
        account_holder: holder.to_string(),
        account_type: None,
        initial_balance: balance,
    }
}

#[test]
fn deposit_then_full_withdrawal_then_overdraft() {
    let mut service = AccountService::new();
    service
        .open_account(new_account("1001", "Taro Yamada", dec!(1000.0)))
        .unwrap();

    let account = service.deposit("1001", dec!(500.0)).unwrap();
    assert_eq!(account.balance(), dec!(1500.0));

    let account = service.withdraw("1001", dec!(1500.0)).unwrap();
    assert_eq!(account.balance(), Decimal::ZERO);

    let result = service.withdraw("1001", dec!(1.0));
    assert!(matches!(result, Err(Error::InsufficientFunds { .. })));
    assert_eq!(service.get_balance("1001").unwrap(), Decimal::ZERO);
}

#[test]
fn rejected_opening_leaves_no_account_behind() {
    let mut service = AccountService::new();

    let result = service.open_account(new_account("1002", "Hanako Suzuki", dec!(-100.0)));
    assert!(matches!(result, Err(Error::Validation(_))));

    assert_eq!(service.account_count(), 0);
    assert!(matches!(
        service.get_account("1002"),
        Err(Error::Registry(RegistryError::NotFound(_)))
    ));
}

#[test]
fn identity_fields_survive_transactions() {
    let mut service = AccountService::new();
    service
        .open_account(new_account("1001", "Taro Yamada", dec!(1000.0)))
        .unwrap();

    service.deposit("1001", dec!(500.0)).unwrap();
    service.withdraw("1001", dec!(200.0)).unwrap();

    let account = service.get_account("1001").unwrap();
    assert_eq!(account.account_number(), "1001");
    assert_eq!(account.account_holder(), "Taro Yamada");
    assert_eq!(account.balance(), dec!(1300.0));
}

#[test]
fn rejected_transactions_never_change_the_balance() {
    let mut service = AccountService::new();
    service
        .open_account(new_account("1001", "Taro Yamada", dec!(1000.0)))
        .unwrap();

    assert!(service.deposit("1001", dec!(0.0)).is_err());
    assert!(service.deposit("1001", dec!(-5.0)).is_err());
    assert!(service.withdraw("1001", dec!(0.0)).is_err());
    assert!(service.withdraw("1001", dec!(-5.0)).is_err());
    assert!(service.withdraw("1001", dec!(1000.01)).is_err());

    assert_eq!(service.get_balance("1001").unwrap(), dec!(1000.0));
}
