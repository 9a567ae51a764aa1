//! In-memory account registry.
//!
//! Maps account numbers to [`Account`]s and routes by-id operations to them.
//! The registry is a plain owned value: the console session holds it and
//! passes `&mut` access down, so no locking is involved.

use std::collections::HashMap;

use bankms_core::{AccountId, Amount, BankError, BankResult, Entity};

use crate::account::{Account, AccountKind, InterestAccrual, Reportable};

#[derive(Debug, Default)]
pub struct AccountRegistry {
    accounts: HashMap<AccountId, Account>,
}

impl AccountRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `account` under its own id.
    ///
    /// An account already registered under that id is replaced.
    pub fn register(&mut self, account: Account) {
        let id = account.id().clone();
        if let Some(previous) = self.accounts.insert(id.clone(), account) {
            tracing::warn!(
                account_id = %id,
                previous_holder = previous.holder_name(),
                "account number reused; previous account replaced"
            );
        }
    }

    pub fn lookup(&self, id: &AccountId) -> Option<&Account> {
        self.accounts.get(id)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Open a new account and register it (overwriting any previous holder of `id`).
    pub fn create_account(
        &mut self,
        id: AccountId,
        holder_name: impl Into<String>,
        initial_balance: Amount,
        kind: AccountKind,
    ) -> &Account {
        let account = Account::open(id.clone(), holder_name, initial_balance, kind);
        tracing::info!(account_id = %id, kind = kind.label(), "account created");
        log_last_record(&account);
        self.register(account);
        &self.accounts[&id]
    }

    /// Deposit into `id`, returning the new balance.
    pub fn deposit(&mut self, id: &AccountId, amount: Amount) -> BankResult<Amount> {
        let account = self.get_mut(id)?;
        account.deposit(amount)?;
        log_last_record(account);
        Ok(account.balance())
    }

    /// Withdraw from `id`, returning the new balance.
    pub fn withdraw(&mut self, id: &AccountId, amount: Amount) -> BankResult<Amount> {
        let account = self.get_mut(id)?;
        account.withdraw(amount)?;
        log_last_record(account);
        Ok(account.balance())
    }

    pub fn check_balance(&self, id: &AccountId) -> BankResult<Amount> {
        self.get(id).map(Account::balance)
    }

    pub fn view_transactions(&self, id: &AccountId) -> BankResult<Vec<String>> {
        Ok(self.get(id)?.transaction_history().collect())
    }

    pub fn accrue_interest(&mut self, id: &AccountId) -> BankResult<InterestAccrual> {
        let account = self.get_mut(id)?;
        let accrual = account.accrue_interest()?;
        if accrual.credited {
            log_last_record(account);
        } else {
            tracing::info!(account_id = %id, interest = %accrual.interest, "no interest credited");
        }
        Ok(accrual)
    }

    pub fn summary(&self, id: &AccountId) -> BankResult<String> {
        self.get(id).map(Reportable::summary)
    }

    fn get(&self, id: &AccountId) -> BankResult<&Account> {
        self.accounts
            .get(id)
            .ok_or_else(|| BankError::not_found(id.clone()))
    }

    fn get_mut(&mut self, id: &AccountId) -> BankResult<&mut Account> {
        self.accounts
            .get_mut(id)
            .ok_or_else(|| BankError::not_found(id.clone()))
    }
}

/// Log the entry the last successful operation appended.
fn log_last_record(account: &Account) {
    if let Some(record) = account.transactions().last() {
        tracing::info!(
            account_id = %account.id(),
            amount = %record.amount(),
            occurred_at = %record.occurred_at(),
            balance = %account.balance(),
            "{record}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn id(s: &str) -> AccountId {
        AccountId::new(s)
    }

    fn amt(v: i64) -> Amount {
        Amount::from(v)
    }

    fn seeded() -> AccountRegistry {
        let mut registry = AccountRegistry::new();
        registry.create_account(id("B1"), "Bob", amt(500), AccountKind::Regular);
        registry.create_account(
            id("A1"),
            "Alice",
            amt(1000),
            AccountKind::savings(amt(100), amt(5)),
        );
        registry
    }

    #[test]
    fn lookup_unknown_id_is_none() {
        let registry = AccountRegistry::new();
        assert!(registry.lookup(&id("nope")).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn register_then_lookup_returns_the_account() {
        let mut registry = AccountRegistry::new();
        let account = Account::regular(id("R1"), "Rita", amt(10));
        registry.register(account.clone());
        assert_eq!(registry.lookup(&id("R1")), Some(&account));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn register_overwrites_existing_id() {
        let mut registry = AccountRegistry::new();
        registry.create_account(id("X"), "First", amt(1), AccountKind::Regular);
        registry.deposit(&id("X"), amt(9)).unwrap();
        registry.create_account(id("X"), "Second", amt(2), AccountKind::Regular);

        let account = registry.lookup(&id("X")).unwrap();
        assert_eq!(account.holder_name(), "Second");
        assert_eq!(account.balance(), amt(2));
        assert_eq!(account.transactions().len(), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn unknown_id_yields_not_found_for_every_operation() {
        let mut registry = seeded();
        let missing = id("ZZ");
        let not_found = BankError::AccountNotFound(missing.clone());

        assert_eq!(registry.deposit(&missing, amt(10)), Err(not_found.clone()));
        assert_eq!(registry.withdraw(&missing, amt(10)), Err(not_found.clone()));
        assert_eq!(registry.check_balance(&missing), Err(not_found.clone()));
        assert_eq!(registry.view_transactions(&missing), Err(not_found.clone()));
        assert_eq!(registry.accrue_interest(&missing), Err(not_found.clone()));
        assert_eq!(registry.summary(&missing), Err(not_found));

        // other accounts untouched
        assert_eq!(registry.check_balance(&id("B1")), Ok(amt(500)));
        assert_eq!(registry.check_balance(&id("A1")), Ok(amt(1000)));
        assert_eq!(registry.view_transactions(&id("B1")).unwrap().len(), 1);
        assert_eq!(registry.view_transactions(&id("A1")).unwrap().len(), 1);
    }

    #[test]
    fn by_id_operations_delegate_to_the_account() {
        let mut registry = seeded();

        assert_eq!(registry.deposit(&id("B1"), amt(25)), Ok(amt(525)));
        assert_eq!(registry.withdraw(&id("A1"), amt(800)), Ok(amt(200)));
        assert!(matches!(
            registry.withdraw(&id("A1"), amt(150)),
            Err(BankError::InsufficientFunds(_))
        ));

        let accrual = registry.accrue_interest(&id("A1")).unwrap();
        assert_eq!(accrual.interest, amt(10));
        assert_eq!(registry.check_balance(&id("A1")), Ok(Amount::new(dec!(210.0))));

        assert_eq!(
            registry.view_transactions(&id("A1")).unwrap(),
            vec![
                "Account created with balance: 1000".to_string(),
                "Withdrew: 800".to_string(),
                format!("Deposited: {}", accrual.interest),
            ]
        );
        assert!(registry.summary(&id("B1")).unwrap().contains("Balance: 525"));
    }
}
